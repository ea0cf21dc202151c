//! HTTP handlers for drink operations.

pub mod drinks;
pub use drinks::*;
