pub mod handlers;
pub mod middlewares;
pub mod router;
pub mod state;
pub mod uispec;

use crate::{conf::settings, prelude::Result};
use router::routes;
use state::AppState;

pub async fn listen() -> Result<()> {
    let state = AppState::new().await?;
    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", settings.listen_port)).await?;
    tracing::info!(
        "{} serving {} listed and {} recommended jobs at {}",
        settings.service_name,
        state.listing.len(),
        state.recommended.len(),
        settings.base_url
    );
    tokio::select! {
        r = axum::serve(listener, routes(state)) => {
            tracing::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}
