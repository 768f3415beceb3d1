mod deadpool_postgres;

pub use self::deadpool_postgres::DeadpoolDriver;
pub use self::in_memory_test::{InMemoryTestPool, RecordedQuery, TestResponseBuilder};
