use chrono::NaiveDate;

use crate::pkg::internal::adaptors::jobs::spec::{Job, JobType};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    description: &str,
    requirements: &[&str],
    salary: &str,
    kind: JobType,
    posted: NaiveDate,
    employer_id: &str,
) -> Job {
    Job {
        id: id.into(),
        title: title.into(),
        company: company.into(),
        location: location.into(),
        description: description.into(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        salary: Some(salary.to_string()),
        kind,
        posted_date: posted,
        employer_id: employer_id.into(),
    }
}

/// The public listing shown on `/jobs`.
pub fn listing() -> Vec<Job> {
    vec![
        job(
            "1",
            "Senior Frontend Developer",
            "TechCorp Inc.",
            "San Francisco, CA",
            "We are looking for a senior frontend developer to join our growing team...",
            &["React", "TypeScript", "5+ years experience"],
            "$120k - $150k",
            JobType::FullTime,
            date(2024, 1, 15),
            "emp1",
        ),
        job(
            "2",
            "Product Manager",
            "Startup Labs",
            "New York, NY",
            "Join us as a Product Manager to drive product strategy and growth...",
            &["Product Management", "Agile", "3+ years experience"],
            "$100k - $130k",
            JobType::FullTime,
            date(2024, 1, 14),
            "emp2",
        ),
        job(
            "3",
            "UX Designer",
            "Design Studio",
            "Remote",
            "Creative UX designer needed for innovative projects...",
            &["Figma", "User Research", "2+ years experience"],
            "$80k - $100k",
            JobType::Contract,
            date(2024, 1, 13),
            "emp3",
        ),
    ]
}

/// Jobs suggested on the job seeker dashboard.
pub fn recommended() -> Vec<Job> {
    vec![
        job(
            "rec1",
            "Frontend Developer",
            "TechStart",
            "Remote",
            "Join our team as a Frontend Developer working on cutting-edge React applications...",
            &["React", "JavaScript", "CSS"],
            "$70k - $90k",
            JobType::FullTime,
            date(2024, 1, 15),
            "emp1",
        ),
        job(
            "rec2",
            "Junior UX Designer",
            "Creative Agency",
            "Austin, TX",
            "We're looking for a creative UX Designer to help shape user experiences...",
            &["Figma", "User Research", "Prototyping"],
            "$60k - $75k",
            JobType::FullTime,
            date(2024, 1, 14),
            "emp2",
        ),
    ]
}

/// Locations offered by the listing filter, as `(value, label)`.
pub const LOCATIONS: [(&str, &str); 4] = [
    ("all", "All Locations"),
    ("san francisco", "San Francisco"),
    ("new york", "New York"),
    ("remote", "Remote"),
];
