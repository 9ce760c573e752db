use std::collections::HashMap;
use std::io::Read;
use std::sync::Mutex;

use astra::Body;
use http::Request;
use serde_json::json;

use crate::api::models::{AddReceipt, NewProperty, PropertyList, PropertyStats, RemoteComparison};
use crate::api::PropertyService;
use crate::domain::record::PropertyRecord;
use crate::errors::ServerError;

/// In-memory stand-in for the remote Property API, so router tests run
/// without a network.
pub struct StubApi {
    properties: Mutex<Vec<PropertyRecord>>,
    pub offline: bool,
    pub fail_stats: bool,
    pub chart: Option<String>,
}

impl StubApi {
    pub fn new(properties: Vec<PropertyRecord>) -> Self {
        Self {
            properties: Mutex::new(properties),
            offline: false,
            fail_stats: false,
            chart: None,
        }
    }

    pub fn offline() -> Self {
        let mut stub = Self::new(Vec::new());
        stub.offline = true;
        stub
    }

    fn guard(&self) -> Result<(), ServerError> {
        if self.offline {
            Err(ServerError::RemoteUnavailable(
                "connection refused".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    fn find(&self, address: &str) -> Option<PropertyRecord> {
        self.properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.address == address)
            .cloned()
    }
}

impl PropertyService for StubApi {
    fn list_properties(&self) -> Result<PropertyList, ServerError> {
        self.guard()?;
        let properties = self.properties.lock().unwrap().clone();
        Ok(PropertyList {
            count: properties.len(),
            properties,
            source: Some("stub".to_string()),
            note: None,
        })
    }

    fn search_properties(&self, query: &str) -> Result<PropertyList, ServerError> {
        self.guard()?;
        let needle = query.to_lowercase();
        let properties: Vec<PropertyRecord> = self
            .properties
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                p.address.to_lowercase().contains(&needle)
                    || p.property_type.label().to_lowercase().contains(&needle)
                    || p.amenities.iter().any(|a| a.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        Ok(PropertyList {
            count: properties.len(),
            properties,
            source: Some("stub".to_string()),
            note: None,
        })
    }

    fn add_property(&self, property: &NewProperty) -> Result<AddReceipt, ServerError> {
        self.guard()?;
        let record: PropertyRecord = serde_json::from_value(json!({
            "address": property.address,
            "property_type": property.property_type,
            "bedrooms": property.bedrooms,
            "bathrooms": property.bathrooms,
            "year_built": property.year_built,
            "market_value": property.market_value,
            "amenities": property.amenities,
        }))
        .map_err(|e| ServerError::RemoteUnavailable(e.to_string()))?;

        self.properties.lock().unwrap().push(record);
        Ok(AddReceipt {
            message: "Custom property added successfully".to_string(),
            address: property.address.clone(),
            id: Some("custom_test".to_string()),
        })
    }

    fn compare_properties(
        &self,
        address1: &str,
        address2: &str,
    ) -> Result<RemoteComparison, ServerError> {
        self.guard()?;
        let property1 = self.find(address1).ok_or(ServerError::NotFound)?;
        let property2 = self.find(address2).ok_or(ServerError::NotFound)?;
        Ok(RemoteComparison {
            property1,
            property2,
            chart: self.chart.clone(),
            chart_available: self.chart.is_some(),
        })
    }

    fn property_stats(&self) -> Result<PropertyStats, ServerError> {
        self.guard()?;
        if self.fail_stats {
            return Err(ServerError::RemoteUnavailable("stats down".to_string()));
        }
        let properties = self.properties.lock().unwrap();
        let total = properties.len() as u64;
        let sum: f64 = properties.iter().filter_map(|p| p.market_value).sum();
        let mut property_types = HashMap::new();
        for p in properties.iter() {
            *property_types
                .entry(p.property_type.as_api_str().to_string())
                .or_insert(0u64) += 1;
        }
        Ok(PropertyStats {
            total_properties: total,
            average_market_value: if total > 0 { sum / total as f64 } else { 0.0 },
            property_types,
            source: Some("stub".to_string()),
        })
    }
}

/// Two priced properties plus one with no price data at all.
pub fn sample_properties() -> Vec<PropertyRecord> {
    let mut oak = PropertyRecord {
        address: "12 Oak Ln".to_string(),
        ..Default::default()
    };
    oak.property_type = crate::domain::record::PropertyType::SingleFamilyHome;
    oak.market_value = Some(500_000.0);
    oak.bedrooms = Some(4.0);
    oak.bathrooms = Some(2.5);
    oak.property_tax = Some(6_200.0);
    oak.amenities = vec!["pool".to_string(), "garage".to_string()];

    let mut elm = PropertyRecord {
        address: "9 Elm St".to_string(),
        ..Default::default()
    };
    elm.property_type = crate::domain::record::PropertyType::Condominium;
    elm.display_price = Some(450_000.0);
    elm.bedrooms = Some(2.0);
    elm.property_tax = Some(5_400.0);
    elm.hoa_fee = Some(320.0);

    let pier = PropertyRecord {
        address: "3 Pier Rd".to_string(),
        ..Default::default()
    };

    vec![oak, elm, pier]
}

pub fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::new(""))
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> astra::Request {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::new(form.to_string()))
        .unwrap()
}

pub fn read_body(resp: &mut astra::Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("response body should be readable");
    String::from_utf8(bytes).expect("response body should be utf-8")
}

pub fn location_of(resp: &astra::Response) -> String {
    resp.headers()
        .get("Location")
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}
