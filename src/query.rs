use crate::types::SqlValue;

/// An immutable SQL statement with its positional parameter bindings.
///
/// The SQL text uses PostgreSQL-style placeholders (`$1`, `$2`, ...) and the
/// bindings are substituted by the driver at execution time, never
/// string-interpolated.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    sql: String,
    bindings: Vec<SqlValue>,
}

impl Query {
    pub fn new(sql: impl Into<String>, bindings: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            bindings,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn bindings(&self) -> &[SqlValue] {
        &self.bindings
    }
}
