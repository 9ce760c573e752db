pub mod client;
pub mod models;

pub use client::PropertyApi;
pub use models::{AddReceipt, NewProperty, PropertyList, PropertyStats, RemoteComparison};

use crate::errors::ServerError;

/// The remote Property Comparison API, seen as a set of logical operations.
/// The real client lives in [`client`]; router tests swap in an in-memory
/// implementation.
pub trait PropertyService {
    fn list_properties(&self) -> Result<PropertyList, ServerError>;
    fn search_properties(&self, query: &str) -> Result<PropertyList, ServerError>;
    fn add_property(&self, property: &NewProperty) -> Result<AddReceipt, ServerError>;
    fn compare_properties(
        &self,
        address1: &str,
        address2: &str,
    ) -> Result<RemoteComparison, ServerError>;
    fn property_stats(&self) -> Result<PropertyStats, ServerError>;
}
