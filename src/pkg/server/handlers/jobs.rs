use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Response},
    Extension, Form, Json,
};

use crate::{
    pkg::{
        internal::{
            adaptors::{
                applications::mutators::ApplicationMutator,
                jobs::{
                    selectors::{filter_jobs, JobSelector},
                    spec::{Criteria, Job},
                },
            },
            error::Error,
            policy::{decide, denial_message, Action, DenyReason},
            seed::LOCATIONS,
        },
        server::{
            handlers::{render, render_with},
            middlewares::authn::Viewer,
            state::AppState,
            uispec::{JobCard, Jobs, Layout, SelectOption},
        },
    },
    prelude::Result,
};

fn listing_page(state: &AppState, layout: Layout, criteria: &Criteria) -> Jobs {
    let visible = filter_jobs(&state.listing, criteria);
    let heading = format!(
        "{} Job{} Found",
        visible.len(),
        if visible.len() == 1 { "" } else { "s" }
    );
    Jobs {
        layout,
        text: criteria.text.clone(),
        locations: SelectOption::list(LOCATIONS, &criteria.location),
        types: SelectOption::job_types(&criteria.kind, true),
        heading,
        jobs: visible
            .into_iter()
            .map(|job| {
                JobCard::new(job)
                    .with_action(format!("/jobs/{}/apply", job.id), "Apply Now")
                    .keep_criteria(criteria)
            })
            .collect(),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Query(criteria): Query<Criteria>,
) -> Result<Html<String>> {
    render(listing_page(&state, Layout::new(&viewer), &criteria))
}

pub async fn api_list(
    State(state): State<AppState>,
    Query(criteria): Query<Criteria>,
) -> Result<Json<Vec<Job>>> {
    let jobs = filter_jobs(&state.listing, &criteria)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(jobs))
}

/// Applies to a listed job and re-renders the listing with the same filter.
pub async fn apply(
    State(state): State<AppState>,
    Extension(viewer): Extension<Viewer>,
    Path(id): Path<String>,
    Form(criteria): Form<Criteria>,
) -> Result<Response> {
    let layout = Layout::new(&viewer);
    if let Some(reason) = decide(viewer.user(), Action::Apply).reason {
        tracing::warn!("apply to {} denied: {}", &id, reason);
        return render_with(
            StatusCode::FORBIDDEN,
            listing_page(
                &state,
                layout.alert(denial_message(Action::Apply, reason)),
                &criteria,
            ),
        );
    }
    let job = JobSelector::new(&state.listing)
        .get_by_id(&id)
        .ok_or_else(|| Error::NotFound(format!("job {}", id)))?;
    let layout = match submit_application(&state, &viewer, job).await? {
        Ok(()) => layout.notice("Application Submitted! Your application has been sent to the employer"),
        Err(msg) => layout.alert(msg),
    };
    render_with(StatusCode::OK, listing_page(&state, layout, &criteria))
}

/// Records the application in the viewer's session. The inner `Err` carries a message
/// for the viewer when the application is refused.
pub async fn submit_application(
    state: &AppState,
    viewer: &Viewer,
    job: &Job,
) -> Result<std::result::Result<(), String>> {
    let (Some(token), Some(user)) = (viewer.token, viewer.user()) else {
        return Ok(Err(denial_message(Action::Apply, DenyReason::LoginRequired)));
    };
    let outcome = state
        .sessions
        .update(&token, |s| ApplicationMutator::new(&mut s.applications).apply(job, user))
        .await
        .ok_or_else(|| Error::NotFound("session".into()))?;
    match outcome {
        Ok(_) => Ok(Ok(())),
        Err(e) if e.is_validation() => Ok(Err("You have already applied to this job".into())),
        Err(Error::AccessDenied(reason)) => Ok(Err(denial_message(Action::Apply, reason))),
        Err(e) => Err(e),
    }
}
