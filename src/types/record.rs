use std::collections::HashMap;

use crate::types::SqlValue;

/// Driver-native raw result from a database query.
/// Rows hold positional values in the same order as `columns`.
#[derive(Debug, Clone)]
pub struct RawQueryResult {
    /// Column names in order
    pub columns: Vec<String>,
    /// Rows, where each row is a vector of values in column order
    pub rows: Vec<Vec<SqlValue>>,
}

impl RawQueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<SqlValue>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }
}

/// A single normalized row: a mapping from column name to value.
/// This is the public output shape of query execution.
#[derive(Debug, Clone)]
pub struct Record {
    values: HashMap<String, SqlValue>,
}

impl Record {
    /// Creates a Record by zipping column names with positional values.
    /// Large integers are coerced to their decimal text representation so
    /// callers without native 64-bit support do not lose precision.
    pub(crate) fn new(columns: &[String], values: Vec<SqlValue>) -> Self {
        let values = columns
            .iter()
            .zip(values.into_iter())
            .map(|(col, val)| (col.clone(), coerce_big_int(val)))
            .collect();
        Self { values }
    }

    /// Gets a value by column name.
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.values.get(column)
    }

    /// Gets a value by column name as an integer, defaulting to 0 when the
    /// column is absent or does not hold an integer.
    pub fn get_i64_or_zero(&self, column: &str) -> i64 {
        self.get(column).and_then(SqlValue::as_i64).unwrap_or(0)
    }

    /// Returns all column names in this record.
    pub fn columns(&self) -> Vec<&str> {
        self.values.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the number of columns in this record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this record has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Convert a raw, column-oriented result into a sequence of records.
/// Total and side-effect-free; a result with no rows yields an empty vector.
pub fn normalize(raw: RawQueryResult) -> Vec<Record> {
    raw.rows
        .into_iter()
        .map(|values| Record::new(&raw.columns, values))
        .collect()
}

fn coerce_big_int(value: SqlValue) -> SqlValue {
    match value {
        SqlValue::Int64(i) => SqlValue::Text(i.to_string()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_get() {
        let columns = vec!["id".to_string(), "name".to_string()];
        let values = vec![SqlValue::Int32(1), SqlValue::from("John")];
        let record = Record::new(&columns, values);

        assert_eq!(record.get("id"), Some(&SqlValue::Int32(1)));
        assert_eq!(record.get("name"), Some(&SqlValue::from("John")));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_normalize_empty_result() {
        let records = normalize(RawQueryResult::empty());
        assert!(records.is_empty());
    }

    #[test]
    fn test_normalize_zero_rows_with_columns() {
        let raw = RawQueryResult::new(vec!["count".to_string()], vec![]);
        assert!(normalize(raw).is_empty());
    }

    #[test]
    fn test_big_int_coerced_to_decimal_text() {
        let raw = RawQueryResult::new(
            vec!["count".to_string()],
            vec![vec![SqlValue::Int64(i64::MAX)]],
        );
        let records = normalize(raw);
        assert_eq!(
            records[0].get("count"),
            Some(&SqlValue::Text("9223372036854775807".to_string()))
        );
        // round trip: text -> integer -> text is identity
        assert_eq!(records[0].get_i64_or_zero("count"), i64::MAX);
    }

    #[test]
    fn test_other_values_pass_through_unchanged() {
        let columns = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let raw = RawQueryResult::new(
            columns,
            vec![vec![SqlValue::Int32(7), SqlValue::Bool(true), SqlValue::Null]],
        );
        let records = normalize(raw);
        assert_eq!(records[0].get("a"), Some(&SqlValue::Int32(7)));
        assert_eq!(records[0].get("b"), Some(&SqlValue::Bool(true)));
        assert_eq!(records[0].get("c"), Some(&SqlValue::Null));
    }

    #[test]
    fn test_get_i64_defaults_to_zero() {
        let record = Record::new(&["count".to_string()], vec![SqlValue::Null]);
        assert_eq!(record.get_i64_or_zero("count"), 0);
        assert_eq!(record.get_i64_or_zero("absent"), 0);
    }
}
