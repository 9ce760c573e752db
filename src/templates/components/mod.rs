pub mod card;
pub mod error;
pub mod selection_bar;

pub use card::property_card;
pub use error::notice;
pub use selection_bar::selection_bar;
