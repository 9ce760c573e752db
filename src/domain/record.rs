// src/domain/record.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One listed property as served by the remote Property API.
///
/// Every price-related field is independently optional; absence is expected,
/// not erroneous. Which one of them represents the property's value for
/// display and comparison is decided by `domain::price::resolve`, never by
/// reading the fields directly in a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PropertyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Secondary identity key: within one comparison, the address is what
    /// distinguishes "property 1" from "property 2".
    pub address: String,

    #[serde(default)]
    pub property_type: PropertyType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<f64>,
    /// Bathrooms may be fractional (half-baths).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_footage: Option<f64>,
    /// Meaningful only for single-family homes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_area: Option<f64>,
    /// Meaningful only for condominiums.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sold_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sold_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_tax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoa_fee: Option<f64>,

    /// Semantically a set of tags; order is kept only for display.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

/// Property classification as the remote API spells it ("SFH", "Condo").
/// Unrecognized values round-trip untouched so new types coming from the
/// server never break deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "SFH")]
    SingleFamilyHome,
    #[serde(rename = "Condo")]
    Condominium,
    #[serde(untagged)]
    Other(String),
}

impl Default for PropertyType {
    fn default() -> Self {
        PropertyType::Other(String::new())
    }
}

impl PropertyType {
    /// Human-readable label for cards and tables.
    pub fn label(&self) -> &str {
        match self {
            PropertyType::SingleFamilyHome => "Single Family Home",
            PropertyType::Condominium => "Condominium",
            PropertyType::Other(s) if s.is_empty() => "Unknown",
            PropertyType::Other(s) => s,
        }
    }

    /// Wire value expected by the remote API.
    pub fn as_api_str(&self) -> &str {
        match self {
            PropertyType::SingleFamilyHome => "SFH",
            PropertyType::Condominium => "Condo",
            PropertyType::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }
}
