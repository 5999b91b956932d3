//! Fee schedule: the business constants behind every calculation.

/// Per-platform fee rates and reference prices.
///
/// All monetary fields are dollars; conversion rates are fractions
/// (0.015 = 1.5%). The schedule is passed into [`FeeModel`] explicitly so
/// alternate fee tables can be tested without touching global state.
///
/// [`FeeModel`]: crate::FeeModel
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FeeSchedule {
    /// Wealthsimple currency conversion rate on USD assets.
    pub wealthsimple_conversion_pct: f64,
    /// Questrade currency conversion rate on USD assets.
    pub questrade_conversion_pct: f64,
    /// ECN fee per share routed.
    pub ecn_fee_per_share: f64,
    /// Minimum commission per stock trade on Questrade.
    pub min_commission: f64,
    /// Upper bound of Questrade's commission band.
    ///
    /// The flat model never applies this as a ceiling: stock trades always
    /// resolve to `min_commission`. Kept as configuration for schedules
    /// that do tier by share count.
    pub max_commission: f64,
    /// Flat commission for one leg of the DLR/DLR.U pair.
    pub dlr_commission: f64,
    /// Assumed share price used to approximate per-share ECN fees when the
    /// actual price is unknown at calculation time.
    pub reference_share_price: f64,
    /// Assumed DLR share price for the gambit's per-share estimate.
    pub dlr_share_price: f64,
}

impl FeeSchedule {
    /// Validate the schedule. Returns `Err` with a description if any field
    /// is nonsensical.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            (
                "wealthsimple_conversion_pct",
                self.wealthsimple_conversion_pct,
            ),
            ("questrade_conversion_pct", self.questrade_conversion_pct),
            ("ecn_fee_per_share", self.ecn_fee_per_share),
            ("min_commission", self.min_commission),
            ("max_commission", self.max_commission),
            ("dlr_commission", self.dlr_commission),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be >= 0 and finite, got {value}"));
            }
        }
        for (name, value) in [
            ("reference_share_price", self.reference_share_price),
            ("dlr_share_price", self.dlr_share_price),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be > 0 and finite, got {value}"));
            }
        }
        if self.min_commission > self.max_commission {
            return Err(format!(
                "min_commission ({}) exceeds max_commission ({})",
                self.min_commission, self.max_commission
            ));
        }
        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            wealthsimple_conversion_pct: 0.015, // 1.5%
            questrade_conversion_pct: 0.02,     // 2%
            ecn_fee_per_share: 0.0035,
            min_commission: 4.95,
            max_commission: 9.95,
            dlr_commission: 9.95,
            reference_share_price: 50.0,
            dlr_share_price: 13.0,
        }
    }
}
