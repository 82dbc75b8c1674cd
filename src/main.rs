mod cmd;
pub mod conf;
pub mod pkg;
mod prelude;

use crate::prelude::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    cmd::run().await
}
