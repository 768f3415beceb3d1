//! pgq - a minimal pooled-PostgreSQL query helper
//!
//! Runs one parameterized query per call inside its own transaction, on a
//! connection borrowed from a pool, and normalizes the result rows into
//! name -> value records.
//!
//! # Example
//! ```ignore
//! use pgq::{Client, Query, SqlValue};
//!
//! // Connect to database (pool of 10, lazily established)
//! let client = Client::connect("postgres://localhost/mydb", 10)?;
//! let executor = client.executor();
//!
//! // Run a parameterized query
//! let records = executor
//!     .execute(
//!         &Query::new("select id, name from users where id = $1", vec![SqlValue::Int32(1)]),
//!         true,
//!     )
//!     .await?;
//!
//! // Or use the composed schema check
//! let exists = executor.schema_exists("public").await?;
//! ```

pub mod drivers;
pub mod error;
pub mod executor;
pub mod query;
pub mod traits;
pub mod types;

mod client;

// Re-export main types for convenient access
pub use client::Client;
pub use error::{PgqError, Result};
pub use executor::Executor;
pub use query::Query;
pub use traits::{PoolConnection, PoolDriver};
pub use types::{normalize, RawQueryResult, Record, SqlValue};
