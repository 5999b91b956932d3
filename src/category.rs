//! Investment categories: what is being bought, and in which currency.

use std::fmt;
use std::str::FromStr;

use crate::error::FeeError;

/// Asset category for a single order.
///
/// The category decides which fee components apply: USD-denominated assets
/// attract currency conversion, ETF orders trade commission-free on
/// Questrade, and Norbert's Gambit only makes sense for US stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvestmentCategory {
    CadEtf,
    UsdEtf,
    UsStock,
    CadStock,
}

impl InvestmentCategory {
    /// All categories, in display order.
    pub const ALL: [InvestmentCategory; 4] = [
        InvestmentCategory::CadEtf,
        InvestmentCategory::UsdEtf,
        InvestmentCategory::UsStock,
        InvestmentCategory::CadStock,
    ];

    /// True for USD-denominated assets. These attract conversion fees.
    #[inline]
    pub fn is_usd(self) -> bool {
        matches!(
            self,
            InvestmentCategory::UsdEtf | InvestmentCategory::UsStock
        )
    }

    /// True for ETFs, which purchase commission-free on Questrade.
    #[inline]
    pub fn is_etf(self) -> bool {
        matches!(self, InvestmentCategory::CadEtf | InvestmentCategory::UsdEtf)
    }
}

impl fmt::Display for InvestmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvestmentCategory::CadEtf => write!(f, "CAD ETF"),
            InvestmentCategory::UsdEtf => write!(f, "USD ETF"),
            InvestmentCategory::UsStock => write!(f, "US STOCK"),
            InvestmentCategory::CadStock => write!(f, "CAD STOCK"),
        }
    }
}

impl FromStr for InvestmentCategory {
    type Err = FeeError;

    /// Parses the display labels, case-insensitively. Spaces, hyphens and
    /// underscores are interchangeable, so "usd-etf" parses like "USD ETF".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        match normalized.as_str() {
            "CAD ETF" => Ok(InvestmentCategory::CadEtf),
            "USD ETF" => Ok(InvestmentCategory::UsdEtf),
            "US STOCK" => Ok(InvestmentCategory::UsStock),
            "CAD STOCK" => Ok(InvestmentCategory::CadStock),
            _ => Err(FeeError::UnknownCategory(s.to_string())),
        }
    }
}
