// src/domain/comparison.rs

use std::fmt;

use crate::domain::price;
use crate::domain::record::PropertyRecord;

/// Comparing a property to itself is a caller bug, not a valid
/// zero-difference result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidComparisonError {
    pub address: String,
}

impl fmt::Display for InvalidComparisonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "both sides of the comparison are the same property: {}",
            self.address
        )
    }
}

impl std::error::Error for InvalidComparisonError {}

/// Outcome of comparing two property records. Immutable; recomputed fresh on
/// every invocation, never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub property_a: PropertyRecord,
    pub property_b: PropertyRecord,
    pub resolved_price_a: f64,
    pub resolved_price_b: f64,
    pub price_difference: f64,
    /// Absent when the cheaper side resolved to 0 (division undefined).
    pub percentage_difference: Option<f64>,
    pub higher_address: String,
    pub lower_address: String,
    pub field_deltas: Vec<FieldDelta>,
}

/// One attribute compared across both properties. Only produced when both
/// sides actually carry the field; a missing value is never degraded to 0,
/// since that would fabricate a misleading delta.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDelta {
    pub field: &'static str,
    pub value_a: f64,
    pub value_b: f64,
}

impl FieldDelta {
    pub fn difference(&self) -> f64 {
        (self.value_a - self.value_b).abs()
    }
}

/// Compares two resolved property records.
///
/// The result is order-independent: swapping the arguments changes which
/// record sits in `property_a`, but `price_difference`, `higher_address`
/// and `lower_address` all stay the same. Exact price ties break toward
/// property A, deterministically, so a naive `>` in a view can never flip
/// the winner depending on argument order.
pub fn compare(
    property_a: &PropertyRecord,
    property_b: &PropertyRecord,
) -> Result<ComparisonResult, InvalidComparisonError> {
    if property_a.address == property_b.address {
        return Err(InvalidComparisonError {
            address: property_a.address.clone(),
        });
    }

    let resolved_price_a = price::resolve(property_a);
    let resolved_price_b = price::resolve(property_b);

    let price_difference = (resolved_price_a - resolved_price_b).abs();
    let floor = resolved_price_a.min(resolved_price_b);
    let percentage_difference = if floor > 0.0 {
        Some(price_difference / floor * 100.0)
    } else {
        None
    };

    // Tie goes to A: >= keeps the winner stable across argument order.
    let (higher_address, lower_address) = if resolved_price_a >= resolved_price_b {
        (property_a.address.clone(), property_b.address.clone())
    } else {
        (property_b.address.clone(), property_a.address.clone())
    };

    let mut field_deltas = Vec::new();

    // Emits a delta only when the field is defined on both sides.
    macro_rules! delta_if_both {
        ($field:ident, $field_name:expr) => {
            if let (Some(a), Some(b)) = (property_a.$field, property_b.$field) {
                field_deltas.push(FieldDelta {
                    field: $field_name,
                    value_a: a,
                    value_b: b,
                });
            }
        };
    }

    delta_if_both!(bedrooms, "bedrooms");
    delta_if_both!(bathrooms, "bathrooms");
    if let (Some(a), Some(b)) = (property_a.year_built, property_b.year_built) {
        field_deltas.push(FieldDelta {
            field: "year_built",
            value_a: a as f64,
            value_b: b as f64,
        });
    }
    delta_if_both!(property_tax, "property_tax");
    delta_if_both!(hoa_fee, "hoa_fee");
    delta_if_both!(last_sold_price, "last_sold_price");

    Ok(ComparisonResult {
        property_a: property_a.clone(),
        property_b: property_b.clone(),
        resolved_price_a,
        resolved_price_b,
        price_difference,
        percentage_difference,
        higher_address,
        lower_address,
        field_deltas,
    })
}
