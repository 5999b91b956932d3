//! Comparison and ranking of cost breakdowns.

use crate::breakdown::CostBreakdown;
use crate::category::InvestmentCategory;
use crate::error::FeeError;
use crate::model::FeeModel;
use crate::platform::Platform;

/// Keep only breakdowns whose strategy applies to the requested category.
///
/// Inapplicable strategies are excluded outright, never just ranked last,
/// so a zeroed placeholder can never win a recommendation.
pub fn candidates(breakdowns: &[CostBreakdown]) -> Vec<&CostBreakdown> {
    breakdowns.iter().filter(|b| b.applicable).collect()
}

/// The cheapest candidate, or `None` for an empty slate.
///
/// Ties go to the earliest candidate in input order (strict less-than
/// scan), so the result stays deterministic even when several platforms
/// tie at zero cost.
pub fn recommend<'a>(candidates: &[&'a CostBreakdown]) -> Option<&'a CostBreakdown> {
    let mut best: Option<&'a CostBreakdown> = None;
    for &candidate in candidates {
        match best {
            Some(current) if candidate.total_cost < current.total_cost => best = Some(candidate),
            None => best = Some(candidate),
            _ => {}
        }
    }
    best
}

/// A candidate with its cost as a share of the order amount.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedCost {
    pub breakdown: CostBreakdown,
    /// `total_cost / amount * 100`; zero when the amount itself is zero.
    pub cost_pct: f64,
}

/// Ranked candidates plus the scale callers use for relative rendering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranking {
    /// Candidates in input order with relative percentages.
    pub entries: Vec<RankedCost>,
    /// Largest candidate total; zero for an empty slate.
    pub max_total_cost: f64,
}

/// Rank candidates by relative cost. Order is preserved; this annotates,
/// it does not sort.
pub fn rank(candidates: &[&CostBreakdown], amount: f64) -> Ranking {
    let entries = candidates
        .iter()
        .map(|&b| RankedCost {
            breakdown: b.clone(),
            cost_pct: if amount > 0.0 {
                b.total_cost / amount * 100.0
            } else {
                0.0
            },
        })
        .collect();
    let max_total_cost = candidates
        .iter()
        .map(|b| b.total_cost)
        .fold(0.0_f64, f64::max);
    Ranking {
        entries,
        max_total_cost,
    }
}

/// Full comparison for one order: every breakdown, the applicable ones
/// ranked, and the recommendation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub amount: f64,
    pub category: InvestmentCategory,
    /// All strategies in fixed order, inapplicable ones included.
    pub breakdowns: Vec<CostBreakdown>,
    /// Applicable strategies, in input order, with relative percentages.
    pub ranked: Vec<RankedCost>,
    /// Platform with the minimum total among applicable strategies.
    pub recommended: Platform,
    /// Largest applicable total, the scale for relative rendering.
    pub max_total_cost: f64,
}

/// Compute, filter, rank and recommend in one shot.
pub fn compare(
    model: &FeeModel,
    amount: f64,
    category: InvestmentCategory,
) -> Result<Comparison, FeeError> {
    let breakdowns = model.breakdowns(amount, category)?;
    let (ranked, recommended, max_total_cost) = {
        let slate = candidates(&breakdowns);
        let ranking = rank(&slate, amount);
        // Wealthsimple and Questrade apply to every category, so the slate
        // is never empty.
        let recommended = recommend(&slate)
            .expect("candidate slate always contains Wealthsimple and Questrade")
            .platform;
        (ranking.entries, recommended, ranking.max_total_cost)
    };

    Ok(Comparison {
        amount,
        category,
        breakdowns,
        ranked,
        recommended,
        max_total_cost,
    })
}
