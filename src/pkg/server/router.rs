use axum::middleware::from_fn_with_state;
use axum::routing::post;
use axum::{routing::get, Router};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::ui::home))
        .route("/about", get(handlers::ui::about))
        .route(
            "/contact",
            get(handlers::ui::contact_page).post(handlers::ui::contact_submit),
        )
        .route(
            "/login",
            get(handlers::auth::login_page).post(handlers::auth::login),
        )
        .route(
            "/register",
            get(handlers::auth::register_page).post(handlers::auth::register),
        )
        .route("/logout", post(handlers::auth::logout))
        .route("/jobs", get(handlers::jobs::list))
        .route("/jobs/:id/apply", post(handlers::jobs::apply))
        .route("/api/jobs", get(handlers::jobs::api_list))
        .route("/employer/dashboard", get(handlers::employer::dashboard))
        .route("/employer/jobs", post(handlers::employer::create))
        .route("/employer/jobs/new", post(handlers::employer::open_form))
        .route("/employer/jobs/cancel", post(handlers::employer::cancel_form))
        .route("/employer/jobs/:id/delete", post(handlers::employer::delete))
        .route("/jobseeker/dashboard", get(handlers::seeker::dashboard))
        .route("/jobseeker/profile", post(handlers::seeker::save_profile))
        .route("/jobseeker/skills", post(handlers::seeker::add))
        .route("/jobseeker/skills/remove", post(handlers::seeker::remove))
        .route("/jobseeker/jobs/:id/apply", post(handlers::seeker::apply))
        .fallback(handlers::ui::not_found)
        .layer(from_fn_with_state(state.clone(), authn::identify))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}
