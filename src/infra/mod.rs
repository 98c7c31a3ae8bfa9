//! Card text rendering and sanitization

mod sanitize;

pub use sanitize::sanitize;
