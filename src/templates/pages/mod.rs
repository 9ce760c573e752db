pub mod browse;
pub mod compare;
pub mod home;
pub mod manage;

pub use browse::{browse_page, BrowseVm};
pub use compare::compare_page;
pub use home::home_page;
pub use manage::{manage_page, ManageVm};
