//! Drinks catalog: a REST service for creating, filtering, updating and aggregating drinks.

pub mod config;
pub mod error;
pub mod extractors;
pub mod forms;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError};
pub use migration::{apply_migrations, ensure_database_exists};
pub use model::{Drink, DrinkChanges, DrinkFilter, NewDrink};
pub use routes::{app_router, common_routes_with_ready, drink_routes};
pub use service::{DrinkCatalog, RequestValidator};
pub use state::AppState;
pub use store::{DrinkStore, MemoryDrinkStore, PgDrinkStore};
