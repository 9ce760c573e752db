// src/domain/price.rs

use crate::domain::record::PropertyRecord;

/// Picks the single authoritative price for a record.
///
/// Fallback order, first present wins:
/// `market_value` -> `display_price` -> `predicted_price` -> 0.
///
/// A return of 0.0 is ambiguous between "free/unset" and "no data at all";
/// callers that need to tell those apart must also check [`has_known_price`].
pub fn resolve(record: &PropertyRecord) -> f64 {
    record
        .market_value
        .or(record.display_price)
        .or(record.predicted_price)
        .unwrap_or(0.0)
}

/// True iff at least one of the three fallback fields is present,
/// i.e. [`resolve`] returned an actual figure rather than the 0 default.
pub fn has_known_price(record: &PropertyRecord) -> bool {
    record.market_value.is_some()
        || record.display_price.is_some()
        || record.predicted_price.is_some()
}

/// Which caption a view should put under the resolved price.
pub fn price_caption(record: &PropertyRecord) -> &'static str {
    if record.market_value.is_some() {
        "Market Value"
    } else if has_known_price(record) {
        "Estimated Value"
    } else {
        "No price data"
    }
}
