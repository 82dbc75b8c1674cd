use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub phone: Option<String>,
    pub qualifications: Option<String>,
    /// Unique, in insertion order.
    pub skills: Vec<String>,
    pub resume: Option<String>,
}

impl UserProfile {
    pub fn named(name: &str) -> Self {
        UserProfile {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub qualifications: String,
    #[serde(default)]
    pub resume: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillInput {
    #[serde(default)]
    pub skill: String,
}
