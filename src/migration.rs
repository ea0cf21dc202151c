//! Database bootstrap: create the database, schema and drinks table when they are missing.

use crate::error::{AppError, ConfigError};
use crate::sql::{qualified_table, quoted, DRINKS_TABLE};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Create the schema (unless it is `public`) and the drinks table. Idempotent.
pub async fn apply_migrations(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    if schema != "public" {
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)))
            .execute(pool)
            .await?;
    }
    sqlx::query(&drinks_table_ddl(schema)).execute(pool).await?;
    tracing::debug!(schema = %schema, "drinks table ready");
    Ok(())
}

fn drinks_table_ddl(schema: &str) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            "id" BIGSERIAL PRIMARY KEY,
            "name" VARCHAR(100) NOT NULL,
            "description" TEXT,
            "price" DOUBLE PRECISION NOT NULL CHECK ("price" >= 0),
            "duration" INTEGER NOT NULL CHECK ("duration" >= 0)
        )
        "#,
        qualified_table(schema, DRINKS_TABLE)
    )
}

/// Connect to the `postgres` maintenance database and create the target database if it does not exist.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

/// Split `postgres://host/db?opts` into the maintenance URL (same host, `postgres` db, same options) and `db`.
fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ConfigError::DatabaseUrl("no database path".into()))?;
    let path_and_query = &url[path_start..];
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((db, q)) => (db.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(q) = query {
        admin_url.push('?');
        admin_url.push_str(q);
    }
    Ok((admin_url, db_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name_from_url() {
        let (admin, db) = parse_db_name_from_url("postgres://u:p@localhost:5432/drinks").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(db, "drinks");
    }

    #[test]
    fn keeps_connection_options_on_admin_url() {
        let (admin, db) =
            parse_db_name_from_url("postgres://localhost/drinks?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(db, "drinks");
    }

    #[test]
    fn url_without_path_is_rejected() {
        assert!(parse_db_name_from_url("postgres://localhost").is_err());
    }

    #[test]
    fn ddl_targets_schema_qualified_table() {
        let ddl = drinks_table_ddl("cafe");
        assert!(ddl.contains(r#"CREATE TABLE IF NOT EXISTS "cafe"."drinks""#));
        assert!(ddl.contains(r#""price" DOUBLE PRECISION NOT NULL"#));
    }
}
