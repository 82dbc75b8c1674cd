use askama::Template;

use crate::{
    conf::settings,
    pkg::{
        internal::{
            adaptors::{
                applications::spec::Application,
                jobs::spec::{CreateJobInput, Criteria, Job, JobType},
                profiles::spec::UserProfile,
            },
            auth::Role,
        },
        server::middlewares::authn::Viewer,
    },
};

/// Header, footer and notice banner shared by every page.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub service_name: String,
    pub signed_in: bool,
    pub email: String,
    pub dashboard: String,
    pub notice: String,
    pub notice_kind: &'static str,
}

impl Layout {
    pub fn new(viewer: &Viewer) -> Self {
        let mut layout = Layout {
            service_name: settings.service_name.clone(),
            ..Default::default()
        };
        if let Some(user) = viewer.user() {
            layout.signed_in = true;
            layout.email = user.email.clone();
            layout.dashboard = user.role.dashboard().to_string();
        }
        layout
    }

    pub fn notice(mut self, msg: impl Into<String>) -> Self {
        self.notice = msg.into();
        self.notice_kind = "success";
        self
    }

    pub fn alert(mut self, msg: impl Into<String>) -> Self {
        self.notice = msg.into();
        self.notice_kind = "error";
        self
    }
}

#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn list<'a, I>(items: I, current: &str) -> Vec<SelectOption>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        items
            .into_iter()
            .map(|(value, label)| SelectOption {
                value: value.to_string(),
                label: label.to_string(),
                selected: value == current,
            })
            .collect()
    }

    pub fn job_types(current: &str, include_all: bool) -> Vec<SelectOption> {
        let all = include_all.then_some(("all", "All Types"));
        Self::list(
            all.into_iter()
                .chain(JobType::ALL.iter().map(|t| (t.as_str(), t.label()))),
            current,
        )
    }

    pub fn roles(current: &str) -> Vec<SelectOption> {
        Self::list(
            [Role::JobSeeker, Role::Employer]
                .iter()
                .map(|r| (r.as_str(), r.label())),
            current,
        )
    }
}

#[derive(Debug, Clone)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

/// A job rendered as a card, with an optional single action button.
#[derive(Debug, Clone)]
pub struct JobCard {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted: String,
    pub kind: String,
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub action: String,
    pub action_label: String,
    pub hidden: Vec<HiddenField>,
}

impl JobCard {
    pub fn new(job: &Job) -> Self {
        JobCard {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            posted: job.posted_date.format("%b %-d, %Y").to_string(),
            kind: job.kind.to_string(),
            salary: job.salary.clone().unwrap_or_default(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            action: String::new(),
            action_label: String::new(),
            hidden: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: String, label: &str) -> Self {
        self.action = action;
        self.action_label = label.to_string();
        self
    }

    /// Carries the current listing filter through the action form.
    pub fn keep_criteria(mut self, criteria: &Criteria) -> Self {
        self.hidden = [
            ("text", &criteria.text),
            ("location", &criteria.location),
            ("type", &criteria.kind),
        ]
        .into_iter()
        .map(|(name, value)| HiddenField {
            name: name.to_string(),
            value: value.clone(),
        })
        .collect();
        self
    }
}

#[derive(Debug, Clone)]
pub struct ApplicationRow {
    pub job_title: String,
    pub company: String,
    pub applied: String,
    pub status: String,
}

impl ApplicationRow {
    pub fn new(app: &Application, job: Option<&Job>) -> Self {
        ApplicationRow {
            job_title: job.map(|j| j.title.clone()).unwrap_or_else(|| app.job_id.clone()),
            company: job.map(|j| j.company.clone()).unwrap_or_default(),
            applied: app.applied_date.format("%b %-d, %Y").to_string(),
            status: app.status.as_str().to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home {
    pub layout: Layout,
    pub open_jobs: usize,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct Login {
    pub layout: Layout,
    pub email: String,
    pub roles: Vec<SelectOption>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct Register {
    pub layout: Layout,
    pub name: String,
    pub email: String,
    pub roles: Vec<SelectOption>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct Jobs {
    pub layout: Layout,
    pub text: String,
    pub locations: Vec<SelectOption>,
    pub types: Vec<SelectOption>,
    pub heading: String,
    pub jobs: Vec<JobCard>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct About {
    pub layout: Layout,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct Contact {
    pub layout: Layout,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "employer_dashboard.html")]
pub struct EmployerDashboard {
    pub layout: Layout,
    pub email: String,
    pub active_jobs: usize,
    pub jobs: Vec<JobCard>,
    pub form_visible: bool,
    pub form: CreateJobInput,
    pub form_errors: Vec<String>,
    pub types: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "seeker_dashboard.html")]
pub struct SeekerDashboard {
    pub layout: Layout,
    pub email: String,
    pub profile: UserProfile,
    pub phone: String,
    pub qualifications: String,
    pub resume: String,
    pub profile_errors: Vec<String>,
    pub recommended: Vec<JobCard>,
    pub applications: Vec<ApplicationRow>,
}

#[derive(Template)]
#[template(path = "access_denied.html")]
pub struct AccessDenied {
    pub layout: Layout,
    pub message: String,
    pub login_href: String,
    pub login_label: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFound {
    pub layout: Layout,
    pub path: String,
}
