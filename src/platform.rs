//! The three platform/strategy combinations being compared.

use std::fmt;

/// A platform/strategy combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    /// Wealthsimple: zero commission, pays the retail conversion spread.
    Wealthsimple,
    /// Questrade with a plain order, converting at the broker's rate.
    QuestradeRegular,
    /// Questrade converting currency via the DLR/DLR.U interlisted pair.
    NorbertsGambit,
}

impl Platform {
    /// All platforms, in comparison order.
    pub const ALL: [Platform; 3] = [
        Platform::Wealthsimple,
        Platform::QuestradeRegular,
        Platform::NorbertsGambit,
    ];

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Wealthsimple => "Wealthsimple",
            Platform::QuestradeRegular => "Questrade (Regular)",
            Platform::NorbertsGambit => "Questrade (Norbert's Gambit)",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
