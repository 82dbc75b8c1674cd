use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, Response},
    Extension, Form,
};

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::selectors::JobSelector,
            contact::{self, ContactInput},
        },
        server::{
            handlers::{render, render_with},
            middlewares::authn::Viewer,
            state::AppState,
            uispec::{About, Contact, Home, Layout, NotFound},
        },
    },
    prelude::Result,
};

pub async fn home(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
) -> Result<Html<String>> {
    render(Home {
        layout: Layout::new(&viewer),
        open_jobs: JobSelector::new(&state.listing).get_all().len(),
    })
}

pub async fn about(Extension(viewer): Extension<Viewer>) -> Result<Html<String>> {
    render(About {
        layout: Layout::new(&viewer),
    })
}

pub async fn contact_page(Extension(viewer): Extension<Viewer>) -> Result<Html<String>> {
    render(Contact {
        layout: Layout::new(&viewer),
        name: String::new(),
        email: String::new(),
        subject: String::new(),
        message: String::new(),
        errors: Vec::new(),
    })
}

pub async fn contact_submit(
    Extension(viewer): Extension<Viewer>,
    Form(input): Form<ContactInput>,
) -> Result<Response> {
    match contact::submit(&input) {
        Ok(()) => render_with(
            StatusCode::OK,
            Contact {
                layout: Layout::new(&viewer)
                    .notice("Message sent! We'll get back to you as soon as possible."),
                name: String::new(),
                email: String::new(),
                subject: String::new(),
                message: String::new(),
                errors: Vec::new(),
            },
        ),
        Err(e) if e.is_validation() => render_with(
            StatusCode::UNPROCESSABLE_ENTITY,
            Contact {
                layout: Layout::new(&viewer).alert("Please fill in all fields"),
                errors: e.messages(),
                name: input.name,
                email: input.email,
                subject: input.subject,
                message: input.message,
            },
        ),
        Err(e) => Err(e),
    }
}

pub async fn not_found(viewer: Option<Extension<Viewer>>, uri: Uri) -> Result<Response> {
    let viewer = viewer.map(|Extension(v)| v).unwrap_or_default();
    tracing::warn!("no route for {}", uri.path());
    render_with(
        StatusCode::NOT_FOUND,
        NotFound {
            layout: Layout::new(&viewer),
            path: uri.path().to_string(),
        },
    )
}
