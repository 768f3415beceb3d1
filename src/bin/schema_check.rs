//! Demonstration binary: checks one hardcoded schema name and prints the
//! result. Not a reusable entry point; errors terminate the process.

use pgq::{Client, Result};

const CONNECTION_STRING: &str =
    "postgres://benwhittle:@localhost:5432/live-object-testing?sslmode=disable";
const POOL_SIZE: usize = 10;

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::connect(CONNECTION_STRING, POOL_SIZE)?;
    let exists = client.executor().schema_exists("allov2").await?;
    println!("EXISTS: {}", exists);
    Ok(())
}
