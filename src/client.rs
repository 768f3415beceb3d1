use std::sync::Arc;

use crate::drivers::DeadpoolDriver;
use crate::error::Result;
use crate::executor::Executor;
use crate::traits::PoolDriver;

/// Main entry point for pgq.
/// Holds a connection-pool driver and hands out query executors.
pub struct Client {
    pool: Arc<dyn PoolDriver>,
}

impl Client {
    /// Build a client with a pooled connection to the given database.
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::connect("postgres://user:@localhost:5432/mydb", 10)?;
    /// ```
    pub fn connect(connection_string: &str, max_size: usize) -> Result<Self> {
        let pool = DeadpoolDriver::connect(connection_string, max_size)?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Create a new client with a custom pool driver.
    /// Useful for testing or alternative pool implementations.
    pub fn with_driver(pool: Arc<dyn PoolDriver>) -> Self {
        Self { pool }
    }

    /// Create an Executor for running queries.
    pub fn executor(&self) -> Executor {
        Executor::new(Arc::clone(&self.pool))
    }
}
