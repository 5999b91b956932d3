//! Best-guess investment category from quote metadata.

use feewise::InvestmentCategory;

use crate::types::StockQuote;

/// Exchange codes that mark a stock as Canadian-listed.
const CAD_EXCHANGES: [&str; 3] = ["TSX", "TSXV", "NEO"];

/// Infer the most likely category for a quote.
///
/// ETFs split on trading currency; stocks split on currency or a known
/// Canadian exchange. The result is a suggested default for the comparison
/// inputs, never authoritative, and anything unrecognized falls back to
/// US stock.
pub fn detect_category(quote: &StockQuote) -> InvestmentCategory {
    if quote.is_etf() {
        if quote.is_cad() {
            InvestmentCategory::CadEtf
        } else {
            InvestmentCategory::UsdEtf
        }
    } else {
        let on_cad_exchange = quote
            .exchange
            .as_deref()
            .is_some_and(|e| CAD_EXCHANGES.iter().any(|x| e.eq_ignore_ascii_case(x)));
        if quote.is_cad() || on_cad_exchange {
            InvestmentCategory::CadStock
        } else {
            InvestmentCategory::UsStock
        }
    }
}
