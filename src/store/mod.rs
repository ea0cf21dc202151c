//! Persistence for drinks: the `DrinkStore` seam and its PostgreSQL and in-process backends.

mod memory;
mod postgres;

pub use memory::MemoryDrinkStore;
pub use postgres::PgDrinkStore;

use crate::config::{Settings, StoreKind};
use crate::error::AppError;
use crate::migration::{apply_migrations, ensure_database_exists};
use crate::model::{Drink, DrinkChanges, DrinkFilter, DurationLeader, NewDrink};
use async_trait::async_trait;
use std::sync::Arc;

/// Every method is a single statement against the backing store.
#[async_trait]
pub trait DrinkStore: Send + Sync {
    /// Insert a drink and return it with its assigned id.
    async fn insert(&self, drink: &NewDrink) -> Result<Drink, AppError>;

    /// Returns false when no drink has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    async fn list(&self, filter: &DrinkFilter) -> Result<Vec<Drink>, AppError>;

    /// Apply non-empty `changes`. Returns false when no drink has this id.
    async fn update(&self, id: i64, changes: &DrinkChanges) -> Result<bool, AppError>;

    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    async fn average_price(&self) -> Result<Option<f64>, AppError>;

    async fn max_duration(&self) -> Result<Option<DurationLeader>, AppError>;

    async fn min_duration(&self) -> Result<Option<i32>, AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Build the store selected by `settings`. For Postgres this creates the database (optionally),
/// the schema and the drinks table before returning.
pub async fn connect(settings: &Settings) -> Result<Arc<dyn DrinkStore>, AppError> {
    match settings.store {
        StoreKind::Memory => {
            tracing::info!("using in-memory drink store");
            Ok(Arc::new(MemoryDrinkStore::new()))
        }
        StoreKind::Postgres => {
            if settings.create_database {
                ensure_database_exists(&settings.database_url).await?;
            }
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            apply_migrations(&pool, &settings.schema).await?;
            tracing::info!(schema = %settings.schema, "connected to postgres drink store");
            Ok(Arc::new(PgDrinkStore::new(pool, &settings.schema)))
        }
    }
}
