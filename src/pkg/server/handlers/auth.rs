use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use axum_extra::extract::{cookie::Cookie, CookieJar};
use serde::Deserialize;

use crate::{
    conf::settings,
    pkg::{
        internal::auth::{self, LoginInput, RegisterInput, User},
        server::{
            handlers::{render, render_with},
            middlewares::authn::Viewer,
            state::AppState,
            uispec::{Layout, Login, Register, SelectOption},
        },
    },
    prelude::Result,
};

#[derive(Deserialize, Default)]
pub struct RoleQuery {
    #[serde(default)]
    pub role: String,
}

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build((settings.session_cookie.clone(), value))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .build()
}

/// Replaces whatever session the viewer already holds with a fresh one for `user`.
async fn sign_in(state: &AppState, viewer: &Viewer, jar: CookieJar, user: User) -> Response {
    if let Some(previous) = viewer.token {
        state.sessions.close(&previous).await;
    }
    let dashboard = user.role.dashboard();
    let token = state.sessions.open(user).await;
    (jar.add(session_cookie(token.to_string())), Redirect::to(dashboard)).into_response()
}

pub async fn login_page(
    Extension(viewer): Extension<Viewer>,
    Query(query): Query<RoleQuery>,
) -> Result<Html<String>> {
    render(Login {
        layout: Layout::new(&viewer),
        email: String::new(),
        roles: SelectOption::roles(&query.role),
        errors: Vec::new(),
    })
}

pub async fn login(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    jar: CookieJar,
    Form(input): Form<LoginInput>,
) -> Result<Response> {
    match auth::login(&input) {
        Ok(user) => Ok(sign_in(&state, &viewer, jar, user).await),
        Err(e) if e.is_validation() => render_with(
            StatusCode::UNPROCESSABLE_ENTITY,
            Login {
                layout: Layout::new(&viewer).alert("Please fill in all fields"),
                email: input.email,
                roles: SelectOption::roles(&input.role),
                errors: e.messages(),
            },
        ),
        Err(e) => Err(e),
    }
}

pub async fn register_page(
    Extension(viewer): Extension<Viewer>,
    Query(query): Query<RoleQuery>,
) -> Result<Html<String>> {
    render(Register {
        layout: Layout::new(&viewer),
        name: String::new(),
        email: String::new(),
        roles: SelectOption::roles(&query.role),
        errors: Vec::new(),
    })
}

pub async fn register(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    jar: CookieJar,
    Form(input): Form<RegisterInput>,
) -> Result<Response> {
    match auth::register(&input) {
        Ok(user) => Ok(sign_in(&state, &viewer, jar, user).await),
        Err(e) if e.is_validation() => render_with(
            StatusCode::UNPROCESSABLE_ENTITY,
            Register {
                layout: Layout::new(&viewer).alert("Please check the highlighted fields"),
                name: input.name,
                email: input.email,
                roles: SelectOption::roles(&input.role),
                errors: e.messages(),
            },
        ),
        Err(e) => Err(e),
    }
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    jar: CookieJar,
) -> Result<Response> {
    if let Some(token) = viewer.token {
        state.sessions.close(&token).await;
    }
    if let Some(user) = viewer.user() {
        tracing::info!("User {} logged out successfully", &user.email);
    }
    Ok((jar.remove(session_cookie(String::new())), Redirect::to("/")).into_response())
}
