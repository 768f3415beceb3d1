mod pool;

pub use pool::{PoolConnection, PoolDriver};
