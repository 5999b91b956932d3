//! Cost breakdowns: the result of one fee calculation.

use std::fmt;

use crate::platform::Platform;

/// Itemized cost of executing one order on one platform/strategy.
///
/// A breakdown is a value object: created fresh per calculation and never
/// mutated. `conversion_fee` and `ecn_fee` are `None` when the strategy
/// does not model that component at all, which is distinct from `Some(0.0)`
/// (the component applies but costs nothing for this order).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBreakdown {
    pub platform: Platform,
    /// Currency conversion cost. `None` when conversion is structurally
    /// eliminated (Norbert's Gambit) rather than merely free.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none", default)
    )]
    pub conversion_fee: Option<f64>,
    /// Commission, flat per the platform's rules.
    pub commission: f64,
    /// Estimated ECN fees. `None` for platforms that don't model them.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none", default)
    )]
    pub ecn_fee: Option<f64>,
    /// Sum of every component that applies.
    pub total_cost: f64,
    /// Whether this strategy is meaningful for the requested category.
    pub applicable: bool,
    /// Explanation, present only when `applicable` is false.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none", default)
    )]
    pub note: Option<String>,
}

impl CostBreakdown {
    /// Sum of the individual components, treating unmodeled ones as zero.
    /// Always equals `total_cost`.
    pub fn component_sum(&self) -> f64 {
        self.conversion_fee.unwrap_or(0.0) + self.commission + self.ecn_fee.unwrap_or(0.0)
    }

    /// A zeroed breakdown for a strategy that does not apply.
    pub(crate) fn inapplicable(platform: Platform, note: &str) -> Self {
        Self {
            platform,
            conversion_fee: Some(0.0),
            commission: 0.0,
            ecn_fee: None,
            total_cost: 0.0,
            applicable: false,
            note: Some(note.to_string()),
        }
    }
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${:.2} total", self.platform, self.total_cost)?;
        match self.conversion_fee {
            Some(conv) => write!(f, " (conversion ${conv:.2}")?,
            None => write!(f, " (no conversion")?,
        }
        write!(f, ", commission ${:.2}", self.commission)?;
        if let Some(ecn) = self.ecn_fee {
            write!(f, ", ECN ${ecn:.2}")?;
        }
        write!(f, ")")?;
        if let Some(note) = &self.note {
            write!(f, " [{note}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_sum_treats_absent_as_zero() {
        let breakdown = CostBreakdown {
            platform: Platform::NorbertsGambit,
            conversion_fee: None,
            commission: 19.90,
            ecn_fee: Some(0.54),
            total_cost: 20.44,
            applicable: true,
            note: None,
        };
        assert!((breakdown.component_sum() - 20.44).abs() < 1e-9);
    }

    #[test]
    fn inapplicable_shape() {
        let breakdown = CostBreakdown::inapplicable(Platform::NorbertsGambit, "not applicable");
        assert!(!breakdown.applicable);
        assert_eq!(breakdown.total_cost, 0.0);
        assert_eq!(breakdown.conversion_fee, Some(0.0));
        assert_eq!(breakdown.ecn_fee, None);
        assert_eq!(breakdown.note.as_deref(), Some("not applicable"));
    }

    #[test]
    fn display_distinguishes_missing_conversion() {
        let with = CostBreakdown {
            platform: Platform::Wealthsimple,
            conversion_fee: Some(15.0),
            commission: 0.0,
            ecn_fee: None,
            total_cost: 15.0,
            applicable: true,
            note: None,
        };
        let without = CostBreakdown {
            platform: Platform::NorbertsGambit,
            conversion_fee: None,
            commission: 19.9,
            ecn_fee: Some(0.54),
            total_cost: 20.44,
            applicable: true,
            note: None,
        };
        assert!(format!("{with}").contains("conversion $15.00"));
        assert!(format!("{without}").contains("no conversion"));
    }
}
