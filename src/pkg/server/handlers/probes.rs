use axum::extract::State;

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    tracing::debug!(
        "service is healthy, {} jobs listed",
        state.listing.len() + state.recommended.len()
    );
    Ok(())
}
