//! The fee model: one calculation per platform/strategy.

use crate::breakdown::CostBreakdown;
use crate::category::InvestmentCategory;
use crate::error::FeeError;
use crate::platform::Platform;
use crate::schedule::FeeSchedule;

/// Computes itemized cost breakdowns for a single order.
///
/// Every operation is a pure function of `(amount, category)` and the
/// schedule captured at construction. Amounts are dollars and must be
/// finite and non-negative; zero is a valid degenerate order that costs
/// nothing on every platform (no fee scales super-linearly with zero
/// principal, and flat commissions only apply when a trade happens).
#[derive(Debug, Clone)]
pub struct FeeModel {
    schedule: FeeSchedule,
}

impl FeeModel {
    /// Create a fee model with the given schedule.
    ///
    /// # Panics
    ///
    /// Panics if `schedule` fails validation (NaN rates, negative fees,
    /// non-positive reference prices). Fail-fast at construction, not at
    /// calculation time.
    #[track_caller]
    pub fn new(schedule: FeeSchedule) -> Self {
        if let Err(msg) = schedule.validate() {
            panic!("invalid FeeSchedule: {msg}");
        }
        Self { schedule }
    }

    /// Access the active schedule.
    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Wealthsimple: no commission, retail conversion spread on USD assets.
    ///
    /// ECN fees are not modeled for this platform at all, so the field is
    /// absent rather than zero.
    pub fn wealthsimple(
        &self,
        amount: f64,
        category: InvestmentCategory,
    ) -> Result<CostBreakdown, FeeError> {
        check_amount(amount)?;

        let conversion_fee = if category.is_usd() {
            amount * self.schedule.wealthsimple_conversion_pct
        } else {
            0.0
        };

        Ok(CostBreakdown {
            platform: Platform::Wealthsimple,
            conversion_fee: Some(conversion_fee),
            commission: 0.0,
            ecn_fee: None,
            total_cost: conversion_fee,
            applicable: true,
            note: None,
        })
    }

    /// Questrade with a regular order: conversion spread on USD assets,
    /// per-share ECN fees, and the minimum commission on stock trades.
    /// ETF purchases are commission-free.
    pub fn questrade_regular(
        &self,
        amount: f64,
        category: InvestmentCategory,
    ) -> Result<CostBreakdown, FeeError> {
        check_amount(amount)?;

        let conversion_fee = if category.is_usd() {
            amount * self.schedule.questrade_conversion_pct
        } else {
            0.0
        };

        // Share count is approximated from a fixed reference price, good
        // enough for order-of-magnitude ECN fees.
        let estimated_shares = amount / self.schedule.reference_share_price;
        let ecn_fee = estimated_shares * self.schedule.ecn_fee_per_share;

        let commission = if category.is_etf() || amount == 0.0 {
            0.0
        } else {
            self.schedule.min_commission
        };

        Ok(CostBreakdown {
            platform: Platform::QuestradeRegular,
            conversion_fee: Some(conversion_fee),
            commission,
            ecn_fee: Some(ecn_fee),
            total_cost: conversion_fee + commission + ecn_fee,
            applicable: true,
            note: None,
        })
    }

    /// Norbert's Gambit on Questrade: buy DLR, journal it, sell DLR.U.
    ///
    /// Only meaningful for US stock orders; any other category gets an
    /// inapplicable breakdown that the comparator excludes from candidates.
    /// Two commissions and two rounds of ECN fees, and no conversion fee
    /// field at all: the spread is structurally eliminated, not zero.
    pub fn norberts_gambit(
        &self,
        amount: f64,
        category: InvestmentCategory,
    ) -> Result<CostBreakdown, FeeError> {
        check_amount(amount)?;

        if category != InvestmentCategory::UsStock {
            return Ok(CostBreakdown::inapplicable(
                Platform::NorbertsGambit,
                "Norbert's Gambit not applicable",
            ));
        }

        // One buy of DLR and one sell of DLR.U.
        let commission = if amount == 0.0 {
            0.0
        } else {
            self.schedule.dlr_commission * 2.0
        };
        let estimated_shares = amount / self.schedule.dlr_share_price;
        let ecn_fee = estimated_shares * self.schedule.ecn_fee_per_share * 2.0;

        Ok(CostBreakdown {
            platform: Platform::NorbertsGambit,
            conversion_fee: None,
            commission,
            ecn_fee: Some(ecn_fee),
            total_cost: commission + ecn_fee,
            applicable: true,
            note: None,
        })
    }

    /// All three breakdowns, in fixed comparison order.
    pub fn breakdowns(
        &self,
        amount: f64,
        category: InvestmentCategory,
    ) -> Result<Vec<CostBreakdown>, FeeError> {
        Ok(vec![
            self.wealthsimple(amount, category)?,
            self.questrade_regular(amount, category)?,
            self.norberts_gambit(amount, category)?,
        ])
    }
}

impl Default for FeeModel {
    fn default() -> Self {
        Self::new(FeeSchedule::default())
    }
}

/// Reject amounts the arithmetic would turn into nonsense.
fn check_amount(amount: f64) -> Result<(), FeeError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(FeeError::InvalidAmount { amount });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn wealthsimple_us_stock() {
        let model = FeeModel::default();
        let b = model
            .wealthsimple(1000.0, InvestmentCategory::UsStock)
            .unwrap();
        assert!(approx(b.conversion_fee.unwrap(), 15.0));
        assert_eq!(b.commission, 0.0);
        assert_eq!(b.ecn_fee, None);
        assert!(approx(b.total_cost, 15.0));
    }

    #[test]
    fn wealthsimple_cad_is_free() {
        let model = FeeModel::default();
        for category in [InvestmentCategory::CadEtf, InvestmentCategory::CadStock] {
            let b = model.wealthsimple(1000.0, category).unwrap();
            assert_eq!(b.conversion_fee, Some(0.0));
            assert_eq!(b.total_cost, 0.0);
        }
    }

    #[test]
    fn questrade_us_stock() {
        let model = FeeModel::default();
        let b = model
            .questrade_regular(1000.0, InvestmentCategory::UsStock)
            .unwrap();
        assert!(approx(b.conversion_fee.unwrap(), 20.0));
        assert_eq!(b.commission, 4.95);
        // 1000 / 50 = 20 estimated shares, at $0.0035 each
        assert!(approx(b.ecn_fee.unwrap(), 0.07));
        assert!(approx(b.total_cost, 25.02));
    }

    #[test]
    fn questrade_etf_has_no_commission() {
        let model = FeeModel::default();
        for category in [InvestmentCategory::CadEtf, InvestmentCategory::UsdEtf] {
            let b = model.questrade_regular(1000.0, category).unwrap();
            assert_eq!(b.commission, 0.0);
        }
    }

    #[test]
    fn questrade_stock_pays_minimum_commission() {
        let model = FeeModel::default();
        for category in [InvestmentCategory::UsStock, InvestmentCategory::CadStock] {
            let b = model.questrade_regular(1000.0, category).unwrap();
            assert_eq!(b.commission, 4.95);
        }
    }

    #[test]
    fn gambit_us_stock() {
        let model = FeeModel::default();
        let b = model
            .norberts_gambit(1000.0, InvestmentCategory::UsStock)
            .unwrap();
        assert!(b.applicable);
        assert_eq!(b.conversion_fee, None);
        assert!(approx(b.commission, 19.90));
        // 1000 / 13 estimated shares, two transactions
        assert!((b.ecn_fee.unwrap() - 0.5384615).abs() < 1e-6);
        assert!((b.total_cost - 20.4384615).abs() < 1e-6);
    }

    #[test]
    fn gambit_inapplicable_elsewhere() {
        let model = FeeModel::default();
        for category in [
            InvestmentCategory::CadEtf,
            InvestmentCategory::UsdEtf,
            InvestmentCategory::CadStock,
        ] {
            let b = model.norberts_gambit(1000.0, category).unwrap();
            assert!(!b.applicable);
            assert_eq!(b.total_cost, 0.0);
            assert!(b.note.is_some());
        }
    }

    #[test]
    fn zero_amount_costs_nothing_everywhere() {
        let model = FeeModel::default();
        for category in InvestmentCategory::ALL {
            for b in model.breakdowns(0.0, category).unwrap() {
                assert_eq!(b.total_cost, 0.0, "{} should be free at zero", b.platform);
            }
        }
    }

    #[test]
    fn negative_amount_rejected() {
        let model = FeeModel::default();
        let err = model
            .wealthsimple(-100.0, InvestmentCategory::CadEtf)
            .unwrap_err();
        assert_eq!(err, FeeError::InvalidAmount { amount: -100.0 });
        assert!(
            model
                .questrade_regular(-0.01, InvestmentCategory::UsStock)
                .is_err()
        );
        assert!(
            model
                .norberts_gambit(-1.0, InvestmentCategory::UsStock)
                .is_err()
        );
    }

    #[test]
    fn non_finite_amount_rejected() {
        let model = FeeModel::default();
        assert!(
            model
                .wealthsimple(f64::NAN, InvestmentCategory::UsStock)
                .is_err()
        );
        assert!(
            model
                .breakdowns(f64::INFINITY, InvestmentCategory::UsStock)
                .is_err()
        );
    }

    #[test]
    fn totals_match_component_sums() {
        let model = FeeModel::default();
        for category in InvestmentCategory::ALL {
            for b in model.breakdowns(2500.0, category).unwrap() {
                assert!(approx(b.total_cost, b.component_sum()), "{}", b.platform);
            }
        }
    }

    #[test]
    fn breakdowns_fixed_order() {
        let model = FeeModel::default();
        let all = model.breakdowns(1000.0, InvestmentCategory::CadEtf).unwrap();
        let platforms: Vec<_> = all.iter().map(|b| b.platform).collect();
        assert_eq!(platforms, Platform::ALL.to_vec());
    }

    #[test]
    fn alternate_schedule_flows_through() {
        let schedule = FeeSchedule {
            wealthsimple_conversion_pct: 0.03,
            ..FeeSchedule::default()
        };
        let model = FeeModel::new(schedule);
        let b = model
            .wealthsimple(1000.0, InvestmentCategory::UsdEtf)
            .unwrap();
        assert!(approx(b.total_cost, 30.0));
    }

    #[test]
    #[should_panic(expected = "invalid FeeSchedule")]
    fn invalid_schedule_panics() {
        FeeModel::new(FeeSchedule {
            dlr_share_price: -13.0,
            ..FeeSchedule::default()
        });
    }
}
