//! In-process `DrinkStore`. Same semantics as the Postgres backend; nothing survives a restart.

use super::DrinkStore;
use crate::error::AppError;
use crate::model::{Drink, DrinkChanges, DrinkFilter, DurationLeader, NewDrink};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Rows {
    last_id: i64,
    by_id: BTreeMap<i64, Drink>,
}

#[derive(Default)]
pub struct MemoryDrinkStore {
    rows: RwLock<Rows>,
}

impl MemoryDrinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DrinkStore for MemoryDrinkStore {
    async fn insert(&self, drink: &NewDrink) -> Result<Drink, AppError> {
        let mut rows = self.rows.write().await;
        rows.last_id += 1;
        let stored = drink.clone().into_drink(rows.last_id);
        rows.by_id.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.rows.write().await.by_id.remove(&id).is_some())
    }

    async fn list(&self, filter: &DrinkFilter) -> Result<Vec<Drink>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows
            .by_id
            .values()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, changes: &DrinkChanges) -> Result<bool, AppError> {
        let mut rows = self.rows.write().await;
        match rows.by_id.get_mut(&id) {
            Some(drink) => {
                changes.apply(drink);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.rows.read().await.by_id.contains_key(&id))
    }

    async fn average_price(&self) -> Result<Option<f64>, AppError> {
        let rows = self.rows.read().await;
        if rows.by_id.is_empty() {
            return Ok(None);
        }
        let total: f64 = rows.by_id.values().map(|d| d.price).sum();
        Ok(Some(total / rows.by_id.len() as f64))
    }

    async fn max_duration(&self) -> Result<Option<DurationLeader>, AppError> {
        let rows = self.rows.read().await;
        let mut leader: Option<&Drink> = None;
        for drink in rows.by_id.values() {
            // Strictly greater keeps the lowest id among ties.
            if leader.map_or(true, |l| drink.duration > l.duration) {
                leader = Some(drink);
            }
        }
        Ok(leader.map(|d| DurationLeader {
            duration: d.duration,
            name: d.name.clone(),
        }))
    }

    async fn min_duration(&self) -> Result<Option<i32>, AppError> {
        Ok(self.rows.read().await.by_id.values().map(|d| d.duration).min())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
