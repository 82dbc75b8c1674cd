pub mod auth;
pub mod employer;
pub mod jobs;
pub mod probes;
pub mod seeker;
pub mod ui;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use uuid::Uuid;

use crate::{
    pkg::{
        internal::{
            auth::Role,
            policy::{can_view_dashboard, denial_message, Action, DenyReason},
            session::Session,
        },
        server::{
            middlewares::authn::Viewer,
            state::AppState,
            uispec::{AccessDenied, Layout},
        },
    },
    prelude::Result,
};

pub fn render<T: Template>(page: T) -> Result<Html<String>> {
    Ok(Html(page.render()?))
}

pub fn render_with(code: StatusCode, page: impl Template) -> Result<Response> {
    Ok((code, render(page)?).into_response())
}

/// Opens the viewer's session for a role-gated dashboard, or `None` when the gate is closed.
pub async fn dashboard_session(
    state: &AppState,
    viewer: &Viewer,
    role: Role,
) -> Option<(Uuid, Session)> {
    let decision = can_view_dashboard(viewer.user(), role);
    if !decision.allowed {
        tracing::warn!(
            "{} dashboard denied: {}",
            role,
            decision.reason.unwrap_or(DenyReason::LoginRequired)
        );
        return None;
    }
    let token = viewer.token?;
    state.sessions.get(&token).await.map(|s| (token, s))
}

/// The blocking view shown instead of a dashboard, pointing at the right login.
pub fn access_denied(viewer: &Viewer, role: Role) -> Result<Response> {
    let reason = match viewer.user() {
        None => DenyReason::LoginRequired,
        Some(_) => DenyReason::RoleMismatch,
    };
    let page = AccessDenied {
        layout: Layout::new(viewer),
        message: denial_message(Action::ViewDashboard(role), reason),
        login_href: format!("/login?role={}", role),
        login_label: format!("Login as {}", role.label()),
    };
    render_with(StatusCode::FORBIDDEN, page)
}
