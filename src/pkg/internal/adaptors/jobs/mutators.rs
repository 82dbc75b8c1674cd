use chrono::Local;
use validator::Validate;

use crate::{
    pkg::internal::{
        adaptors::jobs::spec::{split_requirements, CreateJobInput, Job, JobType},
        auth::{generate_id, User},
        error::Error,
        policy::can_post_job,
    },
    prelude::Result,
};

/// Builds a job from the posting form. Fails with the missing fields listed in form order.
pub fn create_job(input: &CreateJobInput, owner: &User) -> Result<Job> {
    can_post_job(Some(owner)).require()?;
    let input = input.trimmed();
    if let Err(errs) = input.validate() {
        return Err(Error::from_validation(
            &errs,
            &[
                ("title", "title"),
                ("company", "company"),
                ("description", "description"),
                ("kind", "type"),
            ],
        ));
    }
    let kind = input.kind.parse::<JobType>()?;
    Ok(Job {
        id: generate_id(),
        title: input.title,
        company: input.company,
        location: input.location,
        description: input.description,
        requirements: split_requirements(&input.requirements),
        salary: Some(input.salary).filter(|s| !s.is_empty()),
        kind,
        posted_date: Local::now().date_naive(),
        employer_id: owner.id.clone(),
    })
}

/// Removes the job with `id`. Returns whether anything was removed.
pub fn delete_job(jobs: &mut Vec<Job>, id: &str) -> bool {
    let before = jobs.len();
    jobs.retain(|j| j.id != id);
    jobs.len() != before
}

pub struct JobMutator<'a> {
    jobs: &'a mut Vec<Job>,
}

impl<'a> JobMutator<'a> {
    pub fn new(jobs: &'a mut Vec<Job>) -> Self {
        JobMutator { jobs }
    }

    /// Validates and publishes a posting ahead of the existing ones.
    pub fn create(&mut self, input: &CreateJobInput, owner: &User) -> Result<Job> {
        let job = create_job(input, owner)?;
        tracing::info!("{} posted job {} ({})", &owner.email, &job.id, &job.title);
        self.jobs.insert(0, job.clone());
        Ok(job)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let removed = delete_job(self.jobs, id);
        if removed {
            tracing::info!("deleted job {}", id);
        } else {
            tracing::debug!("job {} already gone", id);
        }
        removed
    }
}
