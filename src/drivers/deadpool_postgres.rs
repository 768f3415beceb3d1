use async_trait::async_trait;
use deadpool_postgres::{Manager, ManagerConfig, Object, Pool, RecyclingMethod};
use tokio_postgres::{types::ToSql, NoTls};

use crate::error::{PgqError, Result};
use crate::traits::{PoolConnection, PoolDriver};
use crate::types::{RawQueryResult, SqlValue};

/// Connection-pool driver backed by deadpool-postgres.
///
/// Connections are established lazily as callers acquire them, up to the
/// configured maximum. TLS negotiation is disabled.
pub struct DeadpoolDriver {
    pool: Pool,
}

impl DeadpoolDriver {
    /// Build a pool for the given connection string.
    ///
    /// # Example
    /// ```ignore
    /// let driver = DeadpoolDriver::connect("postgres://user:@localhost:5432/mydb", 10)?;
    /// ```
    pub fn connect(connection_string: &str, max_size: usize) -> Result<Self> {
        let config: tokio_postgres::Config = connection_string
            .parse()
            .map_err(|e: tokio_postgres::Error| PgqError::ConnectionFailed(e.to_string()))?;

        let manager = Manager::from_config(
            config,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );

        let pool = Pool::builder(manager)
            .max_size(max_size)
            .build()
            .map_err(|e| PgqError::ConnectionFailed(e.to_string()))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl PoolDriver for DeadpoolDriver {
    async fn acquire(&self) -> Result<Box<dyn PoolConnection>> {
        // A partially constructed pool object is dropped back into the pool
        // before the error surfaces.
        let client = self
            .pool
            .get()
            .await
            .map_err(|e| PgqError::ConnectionFailed(e.to_string()))?;

        Ok(Box::new(DeadpoolConnection { client }))
    }
}

/// A single pooled connection, exclusively owned until released.
struct DeadpoolConnection {
    client: Object,
}

#[async_trait]
impl PoolConnection for DeadpoolConnection {
    async fn begin(&mut self, _name: &str) -> Result<()> {
        // The transaction name is a client-side label; the server sees a
        // plain BEGIN.
        self.client
            .batch_execute("BEGIN")
            .await
            .map_err(|e| PgqError::QueryFailed(e.to_string()))
    }

    async fn query(&mut self, sql: &str, bindings: &[SqlValue]) -> Result<Option<RawQueryResult>> {
        // Convert SqlValue bindings to tokio-postgres compatible types
        let converted: Vec<Box<dyn ToSql + Sync + Send>> =
            bindings.iter().map(sql_value_to_tosql).collect();

        let param_refs: Vec<&(dyn ToSql + Sync)> = converted
            .iter()
            .map(|b| b.as_ref() as &(dyn ToSql + Sync))
            .collect();

        let rows = self
            .client
            .query(sql, &param_refs)
            .await
            .map_err(|e| PgqError::QueryFailed(e.to_string()))?;

        let columns: Vec<String> = if rows.is_empty() {
            Vec::new()
        } else {
            rows[0]
                .columns()
                .iter()
                .map(|c| c.name().to_string())
                .collect()
        };

        let result_rows: Vec<Vec<SqlValue>> = rows
            .iter()
            .map(|row| (0..row.len()).map(|i| row_value(row, i)).collect())
            .collect();

        Ok(Some(RawQueryResult::new(columns, result_rows)))
    }

    async fn commit(&mut self) -> Result<()> {
        self.client
            .batch_execute("COMMIT")
            .await
            .map_err(|e| PgqError::QueryFailed(e.to_string()))
    }

    async fn rollback(&mut self) -> Result<()> {
        self.client
            .batch_execute("ROLLBACK")
            .await
            .map_err(|e| PgqError::QueryFailed(e.to_string()))
    }

    fn release(self: Box<Self>) {
        // Dropping the pool object returns it to the pool.
        drop(self);
    }
}

/// Convert a SqlValue to a boxed ToSql trait object.
fn sql_value_to_tosql(value: &SqlValue) -> Box<dyn ToSql + Sync + Send> {
    match value {
        SqlValue::Null => Box::new(None::<String>),
        SqlValue::Text(s) => Box::new(s.clone()),
        SqlValue::Int32(i) => Box::new(*i),
        SqlValue::Int64(i) => Box::new(*i),
        SqlValue::Bool(b) => Box::new(*b),
    }
}

/// Convert a row value at a given index to a SqlValue.
fn row_value(row: &tokio_postgres::Row, index: usize) -> SqlValue {
    // Try common types in order of likelihood for catalog queries.

    if let Ok(val) = row.try_get::<_, Option<i64>>(index) {
        return val.map(SqlValue::Int64).unwrap_or(SqlValue::Null);
    }

    if let Ok(val) = row.try_get::<_, Option<i32>>(index) {
        return val.map(SqlValue::Int32).unwrap_or(SqlValue::Null);
    }

    if let Ok(val) = row.try_get::<_, Option<bool>>(index) {
        return val.map(SqlValue::Bool).unwrap_or(SqlValue::Null);
    }

    if let Ok(val) = row.try_get::<_, Option<String>>(index) {
        return val.map(SqlValue::Text).unwrap_or(SqlValue::Null);
    }

    // Fallback for types this helper does not model
    SqlValue::Null
}
