use crate::pkg::internal::adaptors::applications::spec::Application;

pub struct ApplicationSelector<'a> {
    applications: &'a [Application],
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(applications: &'a [Application]) -> Self {
        ApplicationSelector { applications }
    }

    pub fn by_job(&self, job_id: &str) -> Vec<&'a Application> {
        self.applications
            .iter()
            .filter(|a| a.job_id == job_id)
            .collect()
    }

    pub fn by_applicant(&self, email: &str) -> Vec<&'a Application> {
        self.applications
            .iter()
            .filter(|a| a.job_seeker_email == email)
            .collect()
    }

    pub fn has_applied(&self, job_id: &str, email: &str) -> bool {
        self.by_job(job_id)
            .iter()
            .any(|a| a.job_seeker_email == email)
    }
}
