//! DrinkCatalog and request validation.

mod catalog;
mod validation;
pub use catalog::DrinkCatalog;
pub use validation::RequestValidator;
