use std::sync::Arc;

use crate::{
    conf::settings,
    pkg::internal::{adaptors::jobs::spec::Job, seed, session::SessionStore},
    prelude::Result,
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub listing: Arc<Vec<Job>>,
    pub recommended: Arc<Vec<Job>>,
    pub sessions: SessionStore,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let (listing, recommended) = if settings.seed_mock_jobs {
            (seed::listing(), seed::recommended())
        } else {
            (Vec::new(), Vec::new())
        };
        tracing::debug!("seeded {} listed jobs", listing.len());
        Ok(Self::with_jobs(listing, recommended))
    }

    pub fn with_jobs(listing: Vec<Job>, recommended: Vec<Job>) -> AppState {
        AppState {
            listing: Arc::new(listing),
            recommended: Arc::new(recommended),
            sessions: SessionStore::new(),
        }
    }

    /// Looks a job up in the public listing, then in the recommendations.
    pub fn find_job(&self, id: &str) -> Option<&Job> {
        self.listing
            .iter()
            .chain(self.recommended.iter())
            .find(|j| j.id == id)
    }
}
