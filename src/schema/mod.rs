//! Declarative table schema.
//!
//! A [`Schema`] is an ordered map of table name → column name →
//! [`ColumnSpec`]. It is either the built-in [`Schema::blog`] declaration or
//! loaded from JSON of the same shape:
//!
//! ```json
//! {
//!   "users": {
//!     "id":    { "type": "increments" },
//!     "email": { "type": "string", "maxlength": 254, "unique": true }
//!   }
//! }
//! ```
//!
//! Declaration order is significant: tables are created in that order, so a
//! table may only reference tables declared before it.

mod blog;
pub mod column;
pub mod ddl;

pub use column::{ColumnSpec, ColumnType, DefaultValue, SqlFn, TextKind};

use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// Unquoted identifiers accepted for tables and columns.
static IDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]{0,62}$").expect("valid identifier regex"));

/// Largest `VARCHAR` length PostgreSQL accepts.
const MAX_VARCHAR: u32 = 10_485_760;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("schema declares no tables")]
    Empty,
    #[error("table `{0}` declares no columns")]
    EmptyTable(String),
    #[error("invalid identifier `{0}`")]
    InvalidIdentifier(String),
    #[error("duplicate table `{0}`")]
    DuplicateTable(String),
    #[error("duplicate column `{table}.{column}`")]
    DuplicateColumn { table: String, column: String },
    #[error("`{table}.{column}`: {reason}")]
    InvalidColumn {
        table: String,
        column: String,
        reason: String,
    },
    #[error("`{table}.{column}` references unknown `{target}`")]
    UnknownReference {
        table: String,
        column: String,
        target: String,
    },
    #[error("failed to read schema file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse schema: {0}")]
    Json(#[from] serde_json::Error),
}

/// Columns of one table, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TableSpec {
    #[serde(deserialize_with = "ordered::deserialize")]
    columns: Vec<(String, ColumnSpec)>,
}

impl TableSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column.
    pub fn column(mut self, name: impl Into<String>, spec: ColumnSpec) -> Self {
        self.columns.push((name.into(), spec));
        self
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnSpec)> {
        self.columns.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Ordered table declarations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    #[serde(deserialize_with = "ordered::deserialize")]
    tables: Vec<(String, TableSpec)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a table.
    pub fn table(mut self, name: impl Into<String>, spec: TableSpec) -> Self {
        self.tables.push((name.into(), spec));
        self
    }

    pub fn tables(&self) -> impl DoubleEndedIterator<Item = (&str, &TableSpec)> {
        self.tables.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&TableSpec> {
        self.tables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    /// Parses a schema from its JSON declaration.
    pub fn from_json(input: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Reads and parses a JSON schema file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Checks identifiers, column descriptors and foreign key targets.
    ///
    /// A reference must name a table declared earlier in the schema and one
    /// of its columns.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.tables.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen_tables: HashSet<&str> = HashSet::new();

        for (table, spec) in &self.tables {
            check_ident(table)?;
            if !seen_tables.insert(table.as_str()) {
                return Err(SchemaError::DuplicateTable(table.clone()));
            }
            if spec.is_empty() {
                return Err(SchemaError::EmptyTable(table.clone()));
            }

            let mut seen_columns: HashSet<&str> = HashSet::new();
            for (column, col) in &spec.columns {
                check_ident(column)?;
                if !seen_columns.insert(column.as_str()) {
                    return Err(SchemaError::DuplicateColumn {
                        table: table.clone(),
                        column: column.clone(),
                    });
                }
                self.check_column(table, column, col, &seen_tables)?;
            }
        }

        Ok(())
    }

    fn check_column(
        &self,
        table: &str,
        column: &str,
        col: &ColumnSpec,
        declared: &HashSet<&str>,
    ) -> Result<(), SchemaError> {
        let invalid = |reason: &str| SchemaError::InvalidColumn {
            table: table.to_string(),
            column: column.to_string(),
            reason: reason.to_string(),
        };

        if col.maxlength.is_some() && col.kind != ColumnType::String {
            return Err(invalid("`maxlength` applies to string columns only"));
        }
        if let Some(len) = col.maxlength
            && (len == 0 || len > MAX_VARCHAR)
        {
            return Err(invalid("`maxlength` out of range"));
        }
        if col.fieldtype.is_some() && col.kind != ColumnType::Text {
            return Err(invalid("`fieldtype` applies to text columns only"));
        }
        if col.unsigned && !col.kind.is_numeric() {
            return Err(invalid("`unsigned` applies to numeric columns only"));
        }
        if col.kind.is_increments() && col.nullable {
            return Err(invalid("auto-increment columns cannot be nullable"));
        }
        if let Some(DefaultValue::Literal(value)) = &col.default_to
            && (value.is_array() || value.is_object())
        {
            return Err(invalid("`defaultTo` must be a scalar"));
        }

        if let Some(target) = &col.references {
            let unknown = || SchemaError::UnknownReference {
                table: table.to_string(),
                column: column.to_string(),
                target: target.clone(),
            };

            let (ref_table, ref_column) = col.reference_target().ok_or_else(unknown)?;
            // `declared` already holds the current table, so self references pass.
            if !declared.contains(ref_table) {
                return Err(unknown());
            }
            if self
                .get(ref_table)
                .and_then(|spec| spec.get(ref_column))
                .is_none()
            {
                return Err(unknown());
            }
        }

        Ok(())
    }
}

fn check_ident(name: &str) -> Result<(), SchemaError> {
    if IDENT_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(SchemaError::InvalidIdentifier(name.to_string()))
    }
}

/// Deserializes a JSON object into a vector, keeping key order.
mod ordered {
    use serde::de::{Deserialize, Deserializer, Error, MapAccess, Visitor};
    use std::fmt;
    use std::marker::PhantomData;

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = Vec<(String, V)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, V)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    if entries.iter().any(|(k, _)| *k == key) {
                        return Err(A::Error::custom(format!("duplicate key `{key}`")));
                    }
                    entries.push((key, value));
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keeps_declaration_order() {
        let schema = Schema::from_json(
            r#"{
                "zebras": { "id": { "type": "increments" } },
                "apples": { "id": { "type": "increments" }, "name": { "type": "string" } }
            }"#,
        )
        .unwrap();

        assert_eq!(schema.table_names(), vec!["zebras", "apples"]);
        let apples = schema.get("apples").unwrap();
        let columns: Vec<&str> = apples.columns().map(|(n, _)| n).collect();
        assert_eq!(columns, vec!["id", "name"]);
    }

    #[test]
    fn test_json_duplicate_table_is_rejected() {
        let result = Schema::from_json(
            r#"{ "a": { "id": { "type": "increments" } }, "a": { "id": { "type": "increments" } } }"#,
        );

        assert!(matches!(result, Err(SchemaError::Json(_))));
    }

    #[test]
    fn test_blog_schema_is_valid() {
        assert!(Schema::blog().validate().is_ok());
    }

    #[test]
    fn test_empty_schema_is_invalid() {
        assert!(matches!(Schema::new().validate(), Err(SchemaError::Empty)));
    }

    #[test]
    fn test_forward_reference_is_rejected() {
        let schema = Schema::new()
            .table(
                "posts",
                TableSpec::new()
                    .column("id", ColumnSpec::new(ColumnType::Increments))
                    .column(
                        "author_id",
                        ColumnSpec::new(ColumnType::Integer).references("users.id"),
                    ),
            )
            .table(
                "users",
                TableSpec::new().column("id", ColumnSpec::new(ColumnType::Increments)),
            );

        assert!(matches!(
            schema.validate(),
            Err(SchemaError::UnknownReference { .. })
        ));
    }

    #[test]
    fn test_reference_to_missing_column_is_rejected() {
        let schema = Schema::new()
            .table(
                "users",
                TableSpec::new().column("id", ColumnSpec::new(ColumnType::Increments)),
            )
            .table(
                "posts",
                TableSpec::new().column(
                    "author_id",
                    ColumnSpec::new(ColumnType::Integer).references("users.uuid"),
                ),
            );

        assert!(matches!(
            schema.validate(),
            Err(SchemaError::UnknownReference { .. })
        ));
    }

    #[test]
    fn test_self_reference_is_allowed() {
        let schema = Schema::new().table(
            "categories",
            TableSpec::new()
                .column("id", ColumnSpec::new(ColumnType::Increments))
                .column(
                    "parent_id",
                    ColumnSpec::new(ColumnType::Integer)
                        .nullable()
                        .references("categories.id"),
                ),
        );

        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_bad_identifier_is_rejected() {
        let schema = Schema::new().table(
            "Users; DROP",
            TableSpec::new().column("id", ColumnSpec::new(ColumnType::Increments)),
        );

        assert!(matches!(
            schema.validate(),
            Err(SchemaError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_maxlength_on_integer_is_rejected() {
        let schema = Schema::new().table(
            "t",
            TableSpec::new().column("n", ColumnSpec::new(ColumnType::Integer).maxlength(10)),
        );

        assert!(matches!(
            schema.validate(),
            Err(SchemaError::InvalidColumn { .. })
        ));
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let schema = Schema::new().table("t", TableSpec::new());

        assert!(matches!(schema.validate(), Err(SchemaError::EmptyTable(_))));
    }
}
