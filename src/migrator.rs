//! Applies a [`Schema`] to the database.
//!
//! Tables are created one statement at a time, in declaration order. The
//! first failing statement aborts the run; tables created before it are left
//! in place.

use sqlx::PgPool;

use crate::schema::ddl::{create_table_sql, drop_table_sql};
use crate::schema::{Schema, SchemaError};

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),
    #[error("failed to create table `{table}`: {source}")]
    Create {
        table: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to drop table `{table}`: {source}")]
    Drop {
        table: String,
        #[source]
        source: sqlx::Error,
    },
}

/// Returns the `CREATE TABLE` statements for `schema`, in execution order.
pub fn create_statements(schema: &Schema) -> Result<Vec<(String, String)>, MigrationError> {
    schema.validate()?;

    Ok(schema
        .tables()
        .map(|(name, table)| (name.to_string(), create_table_sql(name, table)))
        .collect())
}

/// Creates every table of `schema`, sequentially.
///
/// Returns the names of the created tables.
///
/// # Errors
///
/// Returns [`MigrationError::Schema`] before touching the database if the
/// schema does not validate, and [`MigrationError::Create`] for the first
/// statement the database rejects.
pub async fn create_tables(pool: &PgPool, schema: &Schema) -> Result<Vec<String>, MigrationError> {
    let statements = create_statements(schema)?;
    let mut created = Vec::with_capacity(statements.len());

    for (table, sql) in statements {
        tracing::debug!(%table, %sql, "creating table");

        sqlx::query(&sql)
            .execute(pool)
            .await
            .map_err(|source| MigrationError::Create {
                table: table.clone(),
                source,
            })?;

        tracing::info!(%table, "table created");
        created.push(table);
    }

    Ok(created)
}

/// Drops every table of `schema` in reverse declaration order.
pub async fn drop_tables(pool: &PgPool, schema: &Schema) -> Result<Vec<String>, MigrationError> {
    schema.validate()?;

    let mut dropped = Vec::new();

    for (table, _) in schema.tables().rev() {
        sqlx::query(&drop_table_sql(table))
            .execute(pool)
            .await
            .map_err(|source| MigrationError::Drop {
                table: table.to_string(),
                source,
            })?;

        tracing::info!(%table, "table dropped");
        dropped.push(table.to_string());
    }

    Ok(dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_statements_follow_declaration_order() {
        let statements = create_statements(&Schema::blog()).unwrap();
        let tables: Vec<&str> = statements.iter().map(|(t, _)| t.as_str()).collect();

        assert_eq!(
            tables,
            vec!["users", "categories", "tags", "posts", "posts_tags"]
        );
        assert!(statements[0].1.starts_with("CREATE TABLE \"users\""));
    }

    #[test]
    fn test_create_statements_reject_invalid_schema() {
        let result = create_statements(&Schema::new());

        assert!(matches!(result, Err(MigrationError::Schema(_))));
    }
}
