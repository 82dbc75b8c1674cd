use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{pkg::internal::error::Error, prelude::Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid("type", "unknown job type"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary: Option<String>,
    #[serde(rename = "type")]
    pub kind: JobType,
    pub posted_date: NaiveDate,
    pub employer_id: String,
}

/// Visible-listing criteria. `location` and `type` use `"all"` as the match-everything sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub text: String,
    #[serde(default = "all")]
    pub location: String,
    #[serde(rename = "type", default = "all")]
    pub kind: String,
}

pub const ALL: &str = "all";

fn all() -> String {
    ALL.to_string()
}

impl Default for Criteria {
    fn default() -> Self {
        Criteria {
            text: String::new(),
            location: all(),
            kind: all(),
        }
    }
}

/// Raw "post a job" form. Requirements arrive as one comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct CreateJobInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub salary: String,
    #[serde(rename = "type", default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub kind: String,
}

impl CreateJobInput {
    pub fn trimmed(&self) -> Self {
        CreateJobInput {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            requirements: self.requirements.trim().to_string(),
            salary: self.salary.trim().to_string(),
            kind: self.kind.trim().to_string(),
        }
    }
}

/// Splits a comma-separated requirements field, dropping blank entries.
pub fn split_requirements(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            split_requirements(" React, ,TypeScript ,, 5+ years "),
            vec!["React", "TypeScript", "5+ years"]
        );
        assert!(split_requirements("").is_empty());
    }

    #[test]
    fn job_type_uses_wire_names() {
        assert_eq!("part-time".parse::<JobType>().unwrap(), JobType::PartTime);
        assert!("freelance".parse::<JobType>().is_err());
        assert_eq!(
            serde_json::to_string(&JobType::FullTime).unwrap(),
            "\"full-time\""
        );
    }

    #[test]
    fn criteria_default_to_match_everything() {
        let c: Criteria = serde_json::from_str("{}").unwrap();
        assert_eq!(c, Criteria::default());
        assert_eq!(c.location, "all");
        assert_eq!(c.kind, "all");
    }
}
