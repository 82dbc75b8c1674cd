use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Extension, Form,
};

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::{mutators::JobMutator, selectors::JobSelector, spec::CreateJobInput},
            auth::Role,
            session::Session,
        },
        server::{
            handlers::{access_denied, dashboard_session, render_with},
            middlewares::authn::Viewer,
            state::AppState,
            uispec::{EmployerDashboard, JobCard, Layout, SelectOption},
        },
    },
    prelude::{Error, Result},
};

fn dashboard_page(session: &Session, layout: Layout) -> EmployerDashboard {
    let form = session.job_form.fields().clone();
    EmployerDashboard {
        layout,
        email: session.user.email.clone(),
        active_jobs: session.jobs.len(),
        jobs: JobSelector::new(&session.jobs)
            .get_by_employer(&session.user.id)
            .into_iter()
            .map(|j| JobCard::new(j).with_action(format!("/employer/jobs/{}/delete", j.id), "Delete"))
            .collect(),
        form_visible: session.job_form.is_visible(),
        form_errors: session.job_form.errors().to_vec(),
        types: SelectOption::job_types(&form.kind, false),
        form,
    }
}

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
) -> Result<Response> {
    let Some((_, session)) = dashboard_session(&state, &viewer, Role::Employer).await else {
        return access_denied(&viewer, Role::Employer);
    };
    render_with(StatusCode::OK, dashboard_page(&session, Layout::new(&viewer)))
}

/// Applies `f` to the employer's session and renders the dashboard with the notice it returns.
async fn with_session<F>(state: &AppState, viewer: &Viewer, f: F) -> Result<Response>
where
    F: FnOnce(&mut Session) -> (StatusCode, Layout),
{
    let Some((token, _)) = dashboard_session(state, viewer, Role::Employer).await else {
        return access_denied(viewer, Role::Employer);
    };
    let (code, page) = state
        .sessions
        .update(&token, |s| {
            let (code, layout) = f(s);
            (code, dashboard_page(s, layout))
        })
        .await
        .ok_or_else(|| Error::NotFound("session".into()))?;
    render_with(code, page)
}

pub async fn open_form(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
) -> Result<Response> {
    let layout = Layout::new(&viewer);
    with_session(&state, &viewer, |s| {
        s.job_form.open();
        (StatusCode::OK, layout)
    })
    .await
}

pub async fn cancel_form(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
) -> Result<Response> {
    let layout = Layout::new(&viewer);
    with_session(&state, &viewer, |s| {
        s.job_form.cancel();
        (StatusCode::OK, layout)
    })
    .await
}

pub async fn create(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Form(input): Form<CreateJobInput>,
) -> Result<Response> {
    let layout = Layout::new(&viewer);
    with_session(&state, &viewer, |s| {
        let owner = s.user.clone();
        let jobs = &mut s.jobs;
        match s
            .job_form
            .submit(input, |fields| JobMutator::new(jobs).create(fields, &owner))
        {
            Ok(_) => (
                StatusCode::OK,
                layout.notice("Job Posted! Your job listing has been published successfully"),
            ),
            Err(e) if e.is_validation() => (
                StatusCode::UNPROCESSABLE_ENTITY,
                layout.alert("Please fill in all required fields"),
            ),
            Err(e) => {
                tracing::warn!("job posting failed: {}", e);
                (StatusCode::FORBIDDEN, layout.alert(e.to_string()))
            }
        }
    })
    .await
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Path(id): Path<String>,
) -> Result<Response> {
    let layout = Layout::new(&viewer);
    with_session(&state, &viewer, |s| {
        JobMutator::new(&mut s.jobs).delete(&id);
        (
            StatusCode::OK,
            layout.notice("Job Deleted. Job listing has been removed"),
        )
    })
    .await
}
