//! Builds parameterized INSERT, SELECT, UPDATE, DELETE and aggregate statements for the drinks table.

use super::params::PgBindValue;
use crate::model::{DrinkChanges, DrinkFilter, NewDrink};

/// Name of the table holding drinks.
pub const DRINKS_TABLE: &str = "drinks";

const DRINK_COLUMNS: &str = r#""id", "name", "description", "price", "duration""#;

/// Quote identifier for PostgreSQL (safe: only from config).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// Escape LIKE metacharacters so the input is matched literally.
fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// INSERT one drink, returning the stored row.
pub fn insert(table: &str, drink: &NewDrink) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(PgBindValue::Text(drink.name.clone()));
    q.push_param(PgBindValue::NullableText(drink.description.clone()));
    q.push_param(PgBindValue::F64(drink.price));
    q.push_param(PgBindValue::I32(drink.duration));
    q.sql = format!(
        r#"INSERT INTO {} ("name", "description", "price", "duration") VALUES ($1, $2, $3, $4) RETURNING {}"#,
        table, DRINK_COLUMNS
    );
    q
}

/// DELETE by id. Caller checks rows affected.
pub fn delete(table: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(PgBindValue::I64(id));
    q.sql = format!(r#"DELETE FROM {} WHERE "id" = $1"#, table);
    q
}

/// SELECT id only, to check a drink exists.
pub fn exists(table: &str, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(PgBindValue::I64(id));
    q.sql = format!(r#"SELECT "id" FROM {} WHERE "id" = $1"#, table);
    q
}

/// SELECT list with conjunctive filters, ordered by id.
pub fn select_list(table: &str, filter: &DrinkFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    if let Some(name) = &filter.name {
        let n = q.push_param(PgBindValue::Text(format!("%{}%", like_escape(name))));
        where_parts.push(format!(r#""name" ILIKE ${}"#, n));
    }
    if let Some(min) = filter.min_price {
        let n = q.push_param(PgBindValue::F64(min));
        where_parts.push(format!(r#""price" >= ${}"#, n));
    }
    if let Some(max) = filter.max_price {
        let n = q.push_param(PgBindValue::F64(max));
        where_parts.push(format!(r#""price" <= ${}"#, n));
    }
    if let Some(min) = filter.min_duration {
        let n = q.push_param(PgBindValue::I32(min));
        where_parts.push(format!(r#""duration" >= ${}"#, n));
    }
    if let Some(max) = filter.max_duration {
        let n = q.push_param(PgBindValue::I32(max));
        where_parts.push(format!(r#""duration" <= ${}"#, n));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!(
        r#"SELECT {} FROM {}{} ORDER BY "id""#,
        DRINK_COLUMNS, table, where_clause
    );
    q
}

/// UPDATE only the fields present in `changes`. Returns None when there is nothing to set.
pub fn update(table: &str, id: i64, changes: &DrinkChanges) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    if let Some(name) = &changes.name {
        let n = q.push_param(PgBindValue::Text(name.clone()));
        sets.push(format!(r#""name" = ${}"#, n));
    }
    if let Some(description) = &changes.description {
        let n = q.push_param(PgBindValue::NullableText(Some(description.clone())));
        sets.push(format!(r#""description" = ${}"#, n));
    }
    if let Some(price) = changes.price {
        let n = q.push_param(PgBindValue::F64(price));
        sets.push(format!(r#""price" = ${}"#, n));
    }
    if let Some(duration) = changes.duration {
        let n = q.push_param(PgBindValue::I32(duration));
        sets.push(format!(r#""duration" = ${}"#, n));
    }
    if sets.is_empty() {
        return None;
    }
    let id_param = q.push_param(PgBindValue::I64(id));
    q.sql = format!(
        r#"UPDATE {} SET {} WHERE "id" = ${}"#,
        table,
        sets.join(", "),
        id_param
    );
    Some(q)
}

pub fn average_price(table: &str) -> String {
    format!(r#"SELECT AVG("price") FROM {}"#, table)
}

/// Longest duration with the name of the lowest-id drink that has it.
pub fn max_duration(table: &str) -> String {
    format!(
        r#"SELECT "duration", "name" FROM {} ORDER BY "duration" DESC, "id" ASC LIMIT 1"#,
        table
    )
}

pub fn min_duration(table: &str) -> String {
    format!(r#"SELECT MIN("duration") FROM {}"#, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: &str = r#""public"."drinks""#;

    #[test]
    fn qualified_table_quotes_both_parts() {
        assert_eq!(qualified_table("public", "drinks"), T);
        assert_eq!(quoted(r#"we"ird"#), r#""we""ird""#);
    }

    #[test]
    fn select_without_filters_orders_by_id() {
        let q = select_list(T, &DrinkFilter::default());
        assert_eq!(
            q.sql,
            r#"SELECT "id", "name", "description", "price", "duration" FROM "public"."drinks" ORDER BY "id""#
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn select_numbers_placeholders_in_filter_order() {
        let filter = DrinkFilter {
            name: Some("co".into()),
            min_price: Some(5.0),
            max_duration: Some(10),
            ..Default::default()
        };
        let q = select_list(T, &filter);
        assert!(q.sql.ends_with(
            r#"WHERE "name" ILIKE $1 AND "price" >= $2 AND "duration" <= $3 ORDER BY "id""#
        ));
        assert_eq!(
            q.params,
            vec![
                PgBindValue::Text("%co%".into()),
                PgBindValue::F64(5.0),
                PgBindValue::I32(10),
            ]
        );
    }

    #[test]
    fn name_filter_escapes_like_wildcards() {
        let filter = DrinkFilter {
            name: Some("50%_off".into()),
            ..Default::default()
        };
        let q = select_list(T, &filter);
        assert_eq!(q.params, vec![PgBindValue::Text(r"%50\%\_off%".into())]);
    }

    #[test]
    fn update_sets_only_present_fields() {
        let changes = DrinkChanges {
            description: Some("strong".into()),
            duration: Some(7),
            ..Default::default()
        };
        let q = update(T, 42, &changes).unwrap();
        assert_eq!(
            q.sql,
            r#"UPDATE "public"."drinks" SET "description" = $1, "duration" = $2 WHERE "id" = $3"#
        );
        assert_eq!(q.params[2], PgBindValue::I64(42));
    }

    #[test]
    fn update_without_changes_builds_nothing() {
        assert!(update(T, 1, &DrinkChanges::default()).is_none());
    }

    #[test]
    fn insert_binds_all_columns() {
        let drink = NewDrink {
            name: "Tea".into(),
            description: None,
            price: 2.5,
            duration: 3,
        };
        let q = insert(T, &drink);
        assert!(q.sql.starts_with(r#"INSERT INTO "public"."drinks""#));
        assert_eq!(q.params.len(), 4);
        assert_eq!(q.params[1], PgBindValue::NullableText(None));
    }
}
