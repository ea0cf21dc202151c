//! `DrinkStore` over a sqlx PostgreSQL pool.

use super::DrinkStore;
use crate::error::AppError;
use crate::model::{Drink, DrinkChanges, DrinkFilter, DurationLeader, NewDrink};
use crate::sql::{self, qualified_table, QueryBuf, DRINKS_TABLE};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgDrinkStore {
    pool: PgPool,
    table: String,
}

impl PgDrinkStore {
    /// The drinks table is expected in `schema`; see `apply_migrations`.
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgDrinkStore {
            pool,
            table: qualified_table(schema, DRINKS_TABLE),
        }
    }

    async fn fetch_many(&self, q: &QueryBuf) -> Result<Vec<Drink>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Drink>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn fetch_one(&self, q: &QueryBuf) -> Result<Drink, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Drink>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_one(&self.pool).await?)
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.execute(&self.pool).await?.rows_affected())
    }
}

#[async_trait]
impl DrinkStore for PgDrinkStore {
    async fn insert(&self, drink: &NewDrink) -> Result<Drink, AppError> {
        self.fetch_one(&sql::insert(&self.table, drink)).await
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.execute(&sql::delete(&self.table, id)).await? > 0)
    }

    async fn list(&self, filter: &DrinkFilter) -> Result<Vec<Drink>, AppError> {
        self.fetch_many(&sql::select_list(&self.table, filter)).await
    }

    async fn update(&self, id: i64, changes: &DrinkChanges) -> Result<bool, AppError> {
        match sql::update(&self.table, id, changes) {
            Some(q) => Ok(self.execute(&q).await? > 0),
            None => self.exists(id).await,
        }
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let q = sql::exists(&self.table, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_scalar::<_, i64>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_optional(&self.pool).await?.is_some())
    }

    async fn average_price(&self) -> Result<Option<f64>, AppError> {
        let stmt = sql::average_price(&self.table);
        tracing::debug!(sql = %stmt, "query");
        Ok(sqlx::query_scalar::<_, Option<f64>>(&stmt)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn max_duration(&self) -> Result<Option<DurationLeader>, AppError> {
        let stmt = sql::max_duration(&self.table);
        tracing::debug!(sql = %stmt, "query");
        Ok(sqlx::query_as::<_, DurationLeader>(&stmt)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn min_duration(&self) -> Result<Option<i32>, AppError> {
        let stmt = sql::min_duration(&self.table);
        tracing::debug!(sql = %stmt, "query");
        Ok(sqlx::query_scalar::<_, Option<i32>>(&stmt)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
