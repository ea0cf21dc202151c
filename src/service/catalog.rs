//! Catalog operations over an injected `DrinkStore`.

use crate::error::AppError;
use crate::model::{Drink, DrinkChanges, DrinkFilter, DurationLeader, NewDrink};
use crate::store::DrinkStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct DrinkCatalog {
    store: Arc<dyn DrinkStore>,
}

impl DrinkCatalog {
    pub fn new(store: Arc<dyn DrinkStore>) -> Self {
        DrinkCatalog { store }
    }

    pub async fn create(&self, drink: NewDrink) -> Result<Drink, AppError> {
        let created = self.store.insert(&drink).await?;
        tracing::info!(id = created.id, name = %created.name, "drink created");
        Ok(created)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(AppError::drink_not_found());
        }
        tracing::info!(id, "drink deleted");
        Ok(())
    }

    pub async fn list(&self, filter: &DrinkFilter) -> Result<Vec<Drink>, AppError> {
        self.store.list(filter).await
    }

    /// Set the price to a new absolute value.
    pub async fn update_price(&self, id: i64, price: f64) -> Result<(), AppError> {
        self.update(id, &DrinkChanges::price(price)).await
    }

    /// Replace the fields present in `changes`; with no changes only existence is checked.
    pub async fn update(&self, id: i64, changes: &DrinkChanges) -> Result<(), AppError> {
        let found = if changes.is_empty() {
            self.store.exists(id).await?
        } else {
            self.store.update(id, changes).await?
        };
        if !found {
            return Err(AppError::drink_not_found());
        }
        tracing::info!(id, "drink updated");
        Ok(())
    }

    pub async fn average_price(&self) -> Result<Option<f64>, AppError> {
        self.store.average_price().await
    }

    pub async fn max_duration(&self) -> Result<Option<DurationLeader>, AppError> {
        self.store.max_duration().await
    }

    pub async fn min_duration(&self) -> Result<Option<i32>, AppError> {
        self.store.min_duration().await
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}
