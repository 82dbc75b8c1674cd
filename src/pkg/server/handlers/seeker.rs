use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Extension, Form,
};

use crate::{
    pkg::{
        internal::{
            adaptors::{
                applications::selectors::ApplicationSelector,
                profiles::{
                    mutators::{add_skill, remove_skill, update_profile},
                    spec::{ProfileInput, SkillInput},
                },
            },
            auth::Role,
            error::Error,
            session::Session,
        },
        server::{
            handlers::{access_denied, dashboard_session, jobs::submit_application, render_with},
            middlewares::authn::Viewer,
            state::AppState,
            uispec::{ApplicationRow, JobCard, Layout, SeekerDashboard},
        },
    },
    prelude::Result,
};

fn dashboard_page(state: &AppState, session: &Session, layout: Layout) -> SeekerDashboard {
    let profile = session.profile.clone();
    SeekerDashboard {
        layout,
        email: session.user.email.clone(),
        phone: profile.phone.clone().unwrap_or_default(),
        qualifications: profile.qualifications.clone().unwrap_or_default(),
        resume: profile.resume.clone().unwrap_or_default(),
        profile,
        profile_errors: session.profile_errors.clone(),
        recommended: state
            .recommended
            .iter()
            .map(|j| JobCard::new(j).with_action(format!("/jobseeker/jobs/{}/apply", j.id), "Apply"))
            .collect(),
        applications: ApplicationSelector::new(&session.applications)
            .by_applicant(&session.user.email)
            .into_iter()
            .map(|a| ApplicationRow::new(a, state.find_job(&a.job_id)))
            .collect(),
    }
}

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
) -> Result<Response> {
    let Some((_, session)) = dashboard_session(&state, &viewer, Role::JobSeeker).await else {
        return access_denied(&viewer, Role::JobSeeker);
    };
    render_with(StatusCode::OK, dashboard_page(&state, &session, Layout::new(&viewer)))
}

async fn with_session<F>(state: &AppState, viewer: &Viewer, f: F) -> Result<Response>
where
    F: FnOnce(&mut Session) -> (StatusCode, Layout),
{
    let Some((token, _)) = dashboard_session(state, viewer, Role::JobSeeker).await else {
        return access_denied(viewer, Role::JobSeeker);
    };
    let (code, page) = state
        .sessions
        .update(&token, |s| {
            let (code, layout) = f(s);
            (code, dashboard_page(state, s, layout))
        })
        .await
        .ok_or_else(|| Error::NotFound("session".into()))?;
    render_with(code, page)
}

pub async fn save_profile(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Form(input): Form<ProfileInput>,
) -> Result<Response> {
    let layout = Layout::new(&viewer);
    with_session(&state, &viewer, |s| match update_profile(&mut s.profile, &input) {
        Ok(()) => {
            s.profile_errors.clear();
            (
                StatusCode::OK,
                layout.notice("Profile Updated! Your profile has been saved successfully"),
            )
        }
        Err(e) => {
            s.profile_errors = e.messages();
            (StatusCode::UNPROCESSABLE_ENTITY, layout.alert("Name is required"))
        }
    })
    .await
}

pub async fn add(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Form(input): Form<SkillInput>,
) -> Result<Response> {
    let layout = Layout::new(&viewer);
    with_session(&state, &viewer, |s| {
        if add_skill(&mut s.profile, &input.skill) {
            tracing::debug!("{} added skill {}", &s.user.email, input.skill.trim());
        }
        (StatusCode::OK, layout)
    })
    .await
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Form(input): Form<SkillInput>,
) -> Result<Response> {
    let layout = Layout::new(&viewer);
    with_session(&state, &viewer, |s| {
        remove_skill(&mut s.profile, &input.skill);
        (StatusCode::OK, layout)
    })
    .await
}

pub async fn apply(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Path(id): Path<String>,
) -> Result<Response> {
    let Some((token, _)) = dashboard_session(&state, &viewer, Role::JobSeeker).await else {
        return access_denied(&viewer, Role::JobSeeker);
    };
    let job = state
        .find_job(&id)
        .ok_or_else(|| Error::NotFound(format!("job {}", id)))?;
    let layout = match submit_application(&state, &viewer, job).await? {
        Ok(()) => Layout::new(&viewer)
            .notice("Application Submitted! Your application has been sent to the employer"),
        Err(msg) => Layout::new(&viewer).alert(msg),
    };
    let session = state
        .sessions
        .get(&token)
        .await
        .ok_or_else(|| Error::NotFound("session".into()))?;
    render_with(StatusCode::OK, dashboard_page(&state, &session, layout))
}
