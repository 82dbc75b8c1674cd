use chrono::Local;

use crate::{
    pkg::internal::{
        adaptors::{
            applications::{
                selectors::ApplicationSelector,
                spec::{Application, ApplicationStatus},
            },
            jobs::spec::Job,
        },
        auth::{generate_id, User},
        error::Error,
        policy::can_apply,
    },
    prelude::Result,
};

pub struct ApplicationMutator<'a> {
    applications: &'a mut Vec<Application>,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(applications: &'a mut Vec<Application>) -> Self {
        ApplicationMutator { applications }
    }

    /// Records a pending application. One application per job and applicant.
    pub fn apply(&mut self, job: &Job, applicant: &User) -> Result<Application> {
        can_apply(Some(applicant)).require()?;
        if ApplicationSelector::new(self.applications.as_slice()).has_applied(&job.id, &applicant.email) {
            return Err(Error::invalid("job", "already applied"));
        }
        let application = Application {
            id: generate_id(),
            job_id: job.id.clone(),
            job_seeker_email: applicant.email.clone(),
            applied_date: Local::now().date_naive(),
            status: ApplicationStatus::Pending,
        };
        tracing::info!("{} applied to {}", &applicant.email, &job.id);
        self.applications.push(application.clone());
        Ok(application)
    }
}
