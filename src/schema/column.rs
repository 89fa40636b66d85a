//! Column descriptors of the declarative schema.

use serde::Deserialize;
use serde_json::Value;

/// Column builder selected by a descriptor's `type`.
///
/// Names follow the declaration format (`"increments"`, `"bigIncrements"`,
/// `"dateTime"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnType {
    Increments,
    BigIncrements,
    Integer,
    BigInteger,
    String,
    Text,
    Boolean,
    DateTime,
    Timestamp,
    Float,
    Decimal,
}

impl ColumnType {
    /// Auto-incrementing key types carry their own `PRIMARY KEY`.
    pub fn is_increments(self) -> bool {
        matches!(self, ColumnType::Increments | ColumnType::BigIncrements)
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ColumnType::Increments
                | ColumnType::BigIncrements
                | ColumnType::Integer
                | ColumnType::BigInteger
                | ColumnType::Float
                | ColumnType::Decimal
        )
    }
}

/// Size hint for `text` columns.
///
/// PostgreSQL has a single unbounded `TEXT` type, so every variant renders
/// the same; the hint is kept so declarations stay portable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Text,
    Mediumtext,
    Longtext,
}

/// SQL functions allowed as column defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlFn {
    Now,
}

/// Value of a `defaultTo` modifier.
///
/// Either a JSON scalar (`true`, `0`, `"draft"`) or `{"fn": "now"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Fn {
        #[serde(rename = "fn")]
        func: SqlFn,
    },
    Literal(Value),
}

/// Descriptor of a single column.
///
/// Absent flags are `false`: a column is `NOT NULL` unless it is declared
/// `nullable: true`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColumnSpec {
    #[serde(rename = "type")]
    pub kind: ColumnType,
    #[serde(default)]
    pub maxlength: Option<u32>,
    #[serde(default)]
    pub fieldtype: Option<TextKind>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub unsigned: bool,
    /// Foreign key target as `"table.column"`.
    #[serde(default)]
    pub references: Option<String>,
    #[serde(default)]
    pub default_to: Option<DefaultValue>,
}

impl ColumnSpec {
    pub fn new(kind: ColumnType) -> Self {
        Self {
            kind,
            maxlength: None,
            fieldtype: None,
            nullable: false,
            primary: false,
            unique: false,
            unsigned: false,
            references: None,
            default_to: None,
        }
    }

    pub fn maxlength(mut self, len: u32) -> Self {
        self.maxlength = Some(len);
        self
    }

    pub fn fieldtype(mut self, kind: TextKind) -> Self {
        self.fieldtype = Some(kind);
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    pub fn references(mut self, target: impl Into<String>) -> Self {
        self.references = Some(target.into());
        self
    }

    pub fn default_to(mut self, value: DefaultValue) -> Self {
        self.default_to = Some(value);
        self
    }

    /// Splits `references` into `(table, column)`.
    pub fn reference_target(&self) -> Option<(&str, &str)> {
        self.references.as_deref().and_then(|r| r.split_once('.'))
    }
}
