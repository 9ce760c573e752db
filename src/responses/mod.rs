pub mod errors;
pub mod html;

// These two *are* in responses/errors.rs
pub use errors::{error_to_response, html_error_response, ResultResp};

// Normal HTML response + redirect
pub use html::{html_response, redirect_response};
