mod manage_tests;
mod selection_tests;

pub use browse_tests::*;
pub use compare_tests::*;
pub use manage_tests::*;
pub use selection_tests::*;
