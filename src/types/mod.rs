mod record;
mod sql_value;

pub use record::{normalize, RawQueryResult, Record};
pub use sql_value::SqlValue;
