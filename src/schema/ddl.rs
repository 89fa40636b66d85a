//! PostgreSQL DDL rendering for schema declarations.
//!
//! Each column is rendered by picking a base type from its `type`, then
//! appending modifiers in a fixed order: nullability, primary key, unique,
//! unsigned check, foreign key, default.

use super::{ColumnSpec, ColumnType, DefaultValue, SqlFn, TableSpec};
use serde_json::Value;

/// Length used for `string` columns without `maxlength`.
const DEFAULT_VARCHAR: u32 = 255;

/// Wraps an identifier in double quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn base_type(spec: &ColumnSpec) -> String {
    match spec.kind {
        ColumnType::Increments => "SERIAL".to_string(),
        ColumnType::BigIncrements => "BIGSERIAL".to_string(),
        ColumnType::Integer => "INTEGER".to_string(),
        ColumnType::BigInteger => "BIGINT".to_string(),
        ColumnType::String => format!("VARCHAR({})", spec.maxlength.unwrap_or(DEFAULT_VARCHAR)),
        // All text sizes collapse to TEXT on PostgreSQL.
        ColumnType::Text => "TEXT".to_string(),
        ColumnType::Boolean => "BOOLEAN".to_string(),
        ColumnType::DateTime | ColumnType::Timestamp => "TIMESTAMPTZ".to_string(),
        ColumnType::Float => "REAL".to_string(),
        ColumnType::Decimal => "DECIMAL(8, 2)".to_string(),
    }
}

fn default_sql(value: &DefaultValue) -> String {
    match value {
        DefaultValue::Fn { func: SqlFn::Now } => "CURRENT_TIMESTAMP".to_string(),
        DefaultValue::Literal(Value::Null) => "NULL".to_string(),
        DefaultValue::Literal(Value::Bool(b)) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        DefaultValue::Literal(Value::Number(n)) => n.to_string(),
        DefaultValue::Literal(Value::String(s)) => quote_literal(s),
        DefaultValue::Literal(other) => quote_literal(&other.to_string()),
    }
}

/// Renders one column definition.
pub fn column_sql(name: &str, spec: &ColumnSpec) -> String {
    let ident = quote_ident(name);
    let mut parts = vec![ident.clone(), base_type(spec)];

    parts.push(if spec.nullable { "NULL" } else { "NOT NULL" }.to_string());

    if spec.primary || spec.kind.is_increments() {
        parts.push("PRIMARY KEY".to_string());
    }

    if spec.unique {
        parts.push("UNIQUE".to_string());
    }

    if spec.unsigned && !spec.kind.is_increments() {
        parts.push(format!("CHECK ({ident} >= 0)"));
    }

    if let Some((table, column)) = spec.reference_target() {
        parts.push(format!(
            "REFERENCES {} ({})",
            quote_ident(table),
            quote_ident(column)
        ));
    }

    if let Some(default) = &spec.default_to {
        parts.push(format!("DEFAULT {}", default_sql(default)));
    }

    parts.join(" ")
}

/// Renders the `CREATE TABLE` statement for one table.
pub fn create_table_sql(name: &str, table: &TableSpec) -> String {
    let columns: Vec<String> = table
        .columns()
        .map(|(column, spec)| format!("    {}", column_sql(column, spec)))
        .collect();

    format!(
        "CREATE TABLE {} (\n{}\n)",
        quote_ident(name),
        columns.join(",\n")
    )
}

pub fn drop_table_sql(name: &str) -> String {
    format!("DROP TABLE IF EXISTS {}", quote_ident(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Schema, TextKind};
    use serde_json::json;

    #[test]
    fn test_not_null_unless_nullable() {
        let sql = column_sql("title", &ColumnSpec::new(ColumnType::String).maxlength(150));
        assert_eq!(sql, r#""title" VARCHAR(150) NOT NULL"#);

        let sql = column_sql(
            "title",
            &ColumnSpec::new(ColumnType::String).maxlength(150).nullable(),
        );
        assert_eq!(sql, r#""title" VARCHAR(150) NULL"#);
    }

    #[test]
    fn test_string_without_maxlength_uses_default() {
        let sql = column_sql("slug", &ColumnSpec::new(ColumnType::String));
        assert_eq!(sql, r#""slug" VARCHAR(255) NOT NULL"#);
    }

    #[test]
    fn test_increments_is_primary_key_once() {
        let sql = column_sql("id", &ColumnSpec::new(ColumnType::Increments).primary());
        assert_eq!(sql, r#""id" SERIAL NOT NULL PRIMARY KEY"#);
    }

    #[test]
    fn test_text_fieldtype_renders_text() {
        let sql = column_sql(
            "body",
            &ColumnSpec::new(ColumnType::Text).fieldtype(TextKind::Longtext),
        );
        assert_eq!(sql, r#""body" TEXT NOT NULL"#);
    }

    #[test]
    fn test_modifier_order() {
        let spec = ColumnSpec::new(ColumnType::Integer)
            .unique()
            .unsigned()
            .references("users.id")
            .default_to(DefaultValue::Literal(json!(1)));

        assert_eq!(
            column_sql("author_id", &spec),
            r#""author_id" INTEGER NOT NULL UNIQUE CHECK ("author_id" >= 0) REFERENCES "users" ("id") DEFAULT 1"#
        );
    }

    #[test]
    fn test_default_literals() {
        assert_eq!(
            default_sql(&DefaultValue::Literal(json!("it's"))),
            "'it''s'"
        );
        assert_eq!(default_sql(&DefaultValue::Literal(json!(false))), "FALSE");
        assert_eq!(default_sql(&DefaultValue::Literal(json!(null))), "NULL");
        assert_eq!(default_sql(&DefaultValue::Literal(json!(2.5))), "2.5");
        assert_eq!(
            default_sql(&DefaultValue::Fn { func: SqlFn::Now }),
            "CURRENT_TIMESTAMP"
        );
    }

    #[test]
    fn test_create_table_for_blog_posts() {
        let schema = Schema::blog();
        let sql = create_table_sql("posts", schema.get("posts").unwrap());

        assert!(sql.starts_with("CREATE TABLE \"posts\" (\n"));
        assert!(sql.contains(r#""title" VARCHAR(150) NULL"#));
        assert!(sql.contains(r#""body" TEXT NULL"#));
        assert!(sql.contains(r#"REFERENCES "categories" ("id")"#));
        assert!(sql.contains(r#"REFERENCES "users" ("id")"#));
        assert!(sql.contains(r#""created_at" TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP"#));
        assert!(sql.ends_with("\n)"));
    }

    #[test]
    fn test_drop_table() {
        assert_eq!(drop_table_sql("posts"), r#"DROP TABLE IF EXISTS "posts""#);
    }
}
