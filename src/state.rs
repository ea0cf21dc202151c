//! Shared application state for all routes.

use crate::service::DrinkCatalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: DrinkCatalog,
}

impl AppState {
    pub fn new(catalog: DrinkCatalog) -> Self {
        AppState { catalog }
    }
}
