#![cfg(feature = "serde")]

//! Round-trip tests: serialization preserves every field, including the
//! distinction between a zero fee and a fee that is not modeled.

use feewise::{Comparison, CostBreakdown, FeeModel, InvestmentCategory, compare};

#[test]
fn breakdown_roundtrip_is_exact() {
    let model = FeeModel::default();
    for category in InvestmentCategory::ALL {
        for b in model.breakdowns(1234.56, category).unwrap() {
            let json = serde_json::to_string(&b).unwrap();
            let back: CostBreakdown = serde_json::from_str(&json).unwrap();
            assert_eq!(b, back, "{category}");
        }
    }
}

#[test]
fn gambit_omits_unmodeled_fields() {
    let model = FeeModel::default();
    let b = model
        .norberts_gambit(1000.0, InvestmentCategory::UsStock)
        .unwrap();
    let json = serde_json::to_string(&b).unwrap();
    // Structurally eliminated conversion: the key is absent, not zero.
    assert!(!json.contains("conversion_fee"));
    assert!(!json.contains("note"));
}

#[test]
fn zero_conversion_keeps_its_key() {
    let model = FeeModel::default();
    let b = model
        .wealthsimple(1000.0, InvestmentCategory::CadStock)
        .unwrap();
    let json = serde_json::to_string(&b).unwrap();
    assert!(json.contains("\"conversion_fee\":0.0"));
    // Wealthsimple does not model ECN fees at all.
    assert!(!json.contains("ecn_fee"));
}

#[test]
fn applicable_flag_survives() {
    let model = FeeModel::default();
    let b = model
        .norberts_gambit(1000.0, InvestmentCategory::CadEtf)
        .unwrap();
    let json = serde_json::to_string(&b).unwrap();
    let back: CostBreakdown = serde_json::from_str(&json).unwrap();
    assert!(!back.applicable);
    assert_eq!(back.note, b.note);
}

#[test]
fn comparison_roundtrip() {
    let model = FeeModel::default();
    let result = compare(&model, 1000.0, InvestmentCategory::UsStock).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: Comparison = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}
