use thiserror::Error;

/// Error type for pgq operations
#[derive(Debug, Error)]
pub enum PgqError {
    #[error("Getting pool connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Empty query result")]
    EmptyResult,

    #[error("Error checking if schema exists ({schema}): {source}")]
    SchemaCheckFailed {
        schema: String,
        #[source]
        source: Box<PgqError>,
    },
}

impl PgqError {
    /// Wrap any execution error into a schema-check failure for the given schema.
    pub(crate) fn schema_check(schema: &str, source: PgqError) -> Self {
        PgqError::SchemaCheckFailed {
            schema: schema.to_string(),
            source: Box::new(source),
        }
    }
}

/// Result type alias for pgq operations
pub type Result<T> = std::result::Result<T, PgqError>;
