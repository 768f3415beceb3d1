use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::{PgqError, Result};
use crate::query::Query;
use crate::traits::{PoolConnection, PoolDriver};
use crate::types::{normalize, RawQueryResult, Record, SqlValue};

/// Monotonic sequence for transaction names. A counter cannot collide, unlike
/// a random numeric suffix.
static TRANSACTION_SEQ: AtomicU64 = AtomicU64::new(0);

fn next_transaction_name() -> String {
    format!("query_{}", TRANSACTION_SEQ.fetch_add(1, Ordering::Relaxed))
}

/// Executes queries against a pool, one connection and one transaction per
/// call. Created from a Client.
pub struct Executor {
    pool: Arc<dyn PoolDriver>,
}

impl Executor {
    pub(crate) fn new(pool: Arc<dyn PoolDriver>) -> Self {
        Self { pool }
    }

    /// Run a single query inside its own transaction and return the
    /// normalized records.
    ///
    /// When `silent` is false, the SQL text and bindings are printed to the
    /// console before the query runs.
    ///
    /// The connection acquired for the call is released exactly once on every
    /// exit path. Zero matching rows is a valid result (an empty vector); a
    /// driver that reports no result object at all fails with `EmptyResult`.
    pub async fn execute(&self, query: &Query, silent: bool) -> Result<Vec<Record>> {
        let mut conn = self.pool.acquire().await?;
        let name = next_transaction_name();

        let outcome = run_transaction(conn.as_mut(), &name, query, silent).await;
        conn.release();

        let raw = outcome?.ok_or(PgqError::EmptyResult)?;
        Ok(normalize(raw))
    }

    /// Check whether a schema with the given name exists in the catalog.
    ///
    /// Matches both the bare name and its quoted variant, so case-sensitive
    /// and case-folded identifiers are both found.
    pub async fn schema_exists(&self, name: &str) -> Result<bool> {
        let query = Query::new(
            "select count(*) from information_schema.schemata where schema_name in ($1, $2)",
            vec![
                SqlValue::from(name),
                SqlValue::Text(format!("\"{}\"", name)),
            ],
        );

        let records = self
            .execute(&query, true)
            .await
            .map_err(|e| PgqError::schema_check(name, e))?;

        let count = records
            .first()
            .map(|record| record.get_i64_or_zero("count"))
            .unwrap_or(0);
        Ok(count > 0)
    }
}

/// begin -> execute -> commit, strictly sequential. On failure after begin, a
/// best-effort rollback is issued so the transaction is not left open on the
/// server; the original error wins.
async fn run_transaction(
    conn: &mut dyn PoolConnection,
    name: &str,
    query: &Query,
    silent: bool,
) -> Result<Option<RawQueryResult>> {
    conn.begin(name).await?;

    if !silent {
        println!("{} {:?}", query.sql(), query.bindings());
    }

    let raw = match conn.query(query.sql(), query.bindings()).await {
        Ok(raw) => raw,
        Err(err) => {
            let _ = conn.rollback().await;
            return Err(err);
        }
    };

    if let Err(err) = conn.commit().await {
        let _ = conn.rollback().await;
        return Err(err);
    }

    Ok(raw)
}
