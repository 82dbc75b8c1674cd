use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::{
    conf::settings,
    pkg::{internal::auth::User, server::state::AppState},
};

/// Who is making the request. Anonymous viewers have neither token nor user.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    pub token: Option<Uuid>,
    pub user: Option<User>,
}

impl Viewer {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// Resolves the session cookie into a `Viewer` extension. Never rejects: access
/// decisions belong to the handlers.
pub async fn identify(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let token = jar
        .get(&settings.session_cookie)
        .filter(|c| !c.value().is_empty())
        .and_then(|c| c.value().parse::<Uuid>().ok());
    let mut viewer = Viewer::default();
    if let Some(token) = token {
        match state.sessions.get(&token).await {
            Some(session) => {
                viewer = Viewer {
                    token: Some(token),
                    user: Some(session.user),
                };
            }
            None => tracing::debug!("ignoring stale session token {}", token),
        }
    }
    request.extensions_mut().insert(viewer);
    next.run(request).await
}
