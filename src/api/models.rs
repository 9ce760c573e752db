// src/api/models.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::record::PropertyRecord;

/// `GET /properties` and `GET /properties/search` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyList {
    #[serde(default)]
    pub properties: Vec<PropertyRecord>,
    #[serde(default)]
    pub count: usize,
    /// Opaque provenance tag (which backing store answered). UI messaging
    /// only; the comparison core never looks at it.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// `GET /properties/stats/summary` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyStats {
    #[serde(default)]
    pub total_properties: u64,
    #[serde(default)]
    pub average_market_value: f64,
    #[serde(default)]
    pub property_types: HashMap<String, u64>,
    #[serde(default)]
    pub source: Option<String>,
}

/// `POST /compare-properties` payload. Only the two records and the opaque
/// chart are consumed; the server's own difference/summary numbers are
/// recomputed locally so there is exactly one source of truth for what the
/// user sees.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteComparison {
    pub property1: PropertyRecord,
    pub property2: PropertyRecord,
    /// Base64-encoded image, embedded verbatim in a data URI, never decoded.
    #[serde(default)]
    pub chart: Option<String>,
    #[serde(default)]
    pub chart_available: bool,
}

/// Acknowledgement for `POST /properties`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddReceipt {
    #[serde(default)]
    pub message: String,
    pub address: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// Request body for `POST /properties`, shaped the way the remote API
/// expects a caller-constructed property.
#[derive(Debug, Clone, Serialize)]
pub struct NewProperty {
    pub address: String,
    pub property_type: String,
    pub lot_size: i64,
    pub square_footage: i64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub garage: i64,
    pub year_built: i64,
    pub market_value: i64,
    pub amenities: Vec<String>,
    pub neighborhood_features: Vec<String>,
    pub condition: String,
}

impl NewProperty {
    /// Builds a property from raw form fields. Numeric fields fall back to 0
    /// (year built to 2000) when the text does not parse; list fields are
    /// comma-split free text with blanks dropped.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let text = |key: &str| form.get(key).map(|s| s.trim()).unwrap_or("");
        let number = |key: &str| text(key).parse::<i64>().unwrap_or(0);
        let list = |key: &str| {
            text(key)
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        NewProperty {
            address: text("address").to_string(),
            property_type: {
                let t = text("property_type");
                if t.is_empty() { "SFH" } else { t }.to_string()
            },
            lot_size: number("lot_size"),
            square_footage: number("square_footage"),
            bedrooms: number("bedrooms"),
            bathrooms: number("bathrooms"),
            garage: number("garage"),
            year_built: text("year_built").parse::<i64>().unwrap_or(2000),
            market_value: number("market_value"),
            amenities: list("amenities"),
            neighborhood_features: list("neighborhood_features"),
            condition: {
                let c = text("condition");
                if c.is_empty() { "fair" } else { c }.to_string()
            },
        }
    }
}
