//! Request handlers.

mod status;

pub use status::status_page;
