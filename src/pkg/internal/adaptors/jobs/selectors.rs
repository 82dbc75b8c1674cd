use crate::pkg::internal::adaptors::jobs::spec::{Criteria, Job, ALL};

/// Returns the jobs matching every criterion, in their original order.
pub fn filter_jobs<'a>(jobs: &'a [Job], criteria: &Criteria) -> Vec<&'a Job> {
    let text = criteria.text.to_lowercase();
    let location = criteria.location.to_lowercase();
    jobs.iter()
        .filter(|job| {
            matches_text(job, &text)
                && matches_location(job, &location)
                && matches_type(job, &criteria.kind)
        })
        .collect()
}

fn matches_text(job: &Job, needle: &str) -> bool {
    job.title.to_lowercase().contains(needle) || job.company.to_lowercase().contains(needle)
}

fn matches_location(job: &Job, needle: &str) -> bool {
    needle == ALL || job.location.to_lowercase().contains(needle)
}

fn matches_type(job: &Job, kind: &str) -> bool {
    kind == ALL || job.kind.as_str() == kind
}

pub struct JobSelector<'a> {
    jobs: &'a [Job],
}

impl<'a> JobSelector<'a> {
    pub fn new(jobs: &'a [Job]) -> Self {
        JobSelector { jobs }
    }

    pub fn get_all(&self) -> &'a [Job] {
        self.jobs
    }

    pub fn get_by_id(&self, id: &str) -> Option<&'a Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn get_by_employer(&self, employer_id: &str) -> Vec<&'a Job> {
        self.jobs
            .iter()
            .filter(|j| j.employer_id == employer_id)
            .collect()
    }

    pub fn filter(&self, criteria: &Criteria) -> Vec<&'a Job> {
        filter_jobs(self.jobs, criteria)
    }
}
