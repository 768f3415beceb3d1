use async_trait::async_trait;

use crate::error::Result;
use crate::types::{RawQueryResult, SqlValue};

/// Trait for connection-pool driver implementations.
/// Drivers are responsible for:
/// - Managing a set of reusable physical connections
/// - Handing out exclusive connection handles on acquire
/// - Converting SqlValue parameters to native types
#[async_trait]
pub trait PoolDriver: Send + Sync {
    /// Acquire a connection from the pool.
    /// Fails with `ConnectionFailed` when the pool cannot produce one within
    /// its own configured limits; no retries are attempted here.
    async fn acquire(&self) -> Result<Box<dyn PoolConnection>>;
}

/// An exclusively owned connection handle between acquisition and release.
///
/// Every acquired connection must be released exactly once, on every code
/// path. Each method suspends at a network round trip.
#[async_trait]
pub trait PoolConnection: Send {
    /// Begin a transaction under the given client-side name.
    /// The name identifies the logical transaction in diagnostics; it is not
    /// sent to the server.
    async fn begin(&mut self, name: &str) -> Result<()>;

    /// Execute a SQL statement with positional parameter substitution.
    /// Parameters use PostgreSQL-style placeholders ($1, $2, etc.)
    ///
    /// `Ok(None)` means the driver produced no result object at all, which is
    /// distinct from a result with zero rows.
    async fn query(&mut self, sql: &str, bindings: &[SqlValue]) -> Result<Option<RawQueryResult>>;

    /// Commit the current transaction.
    async fn commit(&mut self) -> Result<()>;

    /// Roll back the current transaction.
    async fn rollback(&mut self) -> Result<()>;

    /// Return the connection to the pool.
    fn release(self: Box<Self>);
}
