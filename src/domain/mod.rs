pub mod comparison;
pub mod price;
pub mod record;
pub mod selection;

pub use comparison::{compare, ComparisonResult};
pub use record::{PropertyRecord, PropertyType};
pub use selection::{SelectionSet, Slot};
