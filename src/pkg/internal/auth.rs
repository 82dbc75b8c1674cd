use std::{fmt, str::FromStr};

use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    pkg::internal::{adaptors::profiles::spec::UserProfile, error::Error},
    prelude::Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employer,
    JobSeeker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employer => "employer",
            Role::JobSeeker => "job_seeker",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Employer => "Employer",
            Role::JobSeeker => "Job Seeker",
        }
    }

    pub fn dashboard(&self) -> &'static str {
        match self {
            Role::Employer => "/employer/dashboard",
            Role::JobSeeker => "/jobseeker/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "employer" => Ok(Role::Employer),
            "job_seeker" => Ok(Role::JobSeeker),
            _ => Err(Error::invalid("role", "must be employer or job_seeker")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub profile: Option<UserProfile>,
}

impl User {
    pub fn new(email: &str, role: Role) -> Self {
        User {
            id: generate_id(),
            email: email.to_string(),
            role,
            profile: None,
        }
    }

    pub fn display_name(&self) -> &str {
        match &self.profile {
            Some(p) if !p.name.is_empty() => &p.name,
            _ => &self.email,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub role: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct RegisterInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub confirm_password: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub role: String,
}

/// Signs a viewer in under the role they picked. Credentials are not checked.
pub fn login(input: &LoginInput) -> Result<User> {
    let input = LoginInput {
        email: input.email.trim().to_string(),
        password: input.password.clone(),
        role: input.role.trim().to_string(),
    };
    if let Err(errs) = input.validate() {
        return Err(Error::from_validation(
            &errs,
            &[("email", "email"), ("password", "password"), ("role", "role")],
        ));
    }
    let role = input.role.parse::<Role>()?;
    let user = User::new(&input.email, role);
    tracing::info!("{} signed in as {}", &user.email, role);
    Ok(user)
}

pub fn register(input: &RegisterInput) -> Result<User> {
    let input = RegisterInput {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        password: input.password.clone(),
        confirm_password: input.confirm_password.clone(),
        role: input.role.trim().to_string(),
    };
    if let Err(errs) = input.validate() {
        return Err(Error::from_validation(
            &errs,
            &[
                ("name", "name"),
                ("email", "email"),
                ("password", "password"),
                ("confirm_password", "confirm_password"),
                ("role", "role"),
            ],
        ));
    }
    if input.password != input.confirm_password {
        return Err(Error::invalid("confirm_password", "passwords do not match"));
    }
    let role = input.role.parse::<Role>()?;
    let mut user = User::new(&input.email, role);
    user.profile = Some(UserProfile::named(&input.name));
    tracing::info!("registered {} as {}", &user.email, role);
    Ok(user)
}

/// Short lowercase alphanumeric identifier for jobs, applications and users.
pub fn generate_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_every_field() {
        let err = login(&LoginInput {
            email: "  ".into(),
            password: String::new(),
            role: "employer".into(),
        })
        .unwrap_err();
        assert_eq!(err.fields(), vec!["email", "password"]);
    }

    #[test]
    fn login_assigns_the_chosen_role() {
        let user = login(&LoginInput {
            email: "hr@techcorp.io".into(),
            password: "secret".into(),
            role: "employer".into(),
        })
        .unwrap();
        assert_eq!(user.role, Role::Employer);
        assert_eq!(user.email, "hr@techcorp.io");
        assert_eq!(user.id.len(), 9);
    }

    #[test]
    fn unknown_roles_are_rejected() {
        let err = login(&LoginInput {
            email: "a@b.c".into(),
            password: "x".into(),
            role: "admin".into(),
        })
        .unwrap_err();
        assert_eq!(err.fields(), vec!["role"]);
    }

    #[test]
    fn register_checks_password_confirmation() {
        let err = register(&RegisterInput {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "one".into(),
            confirm_password: "two".into(),
            role: "job_seeker".into(),
        })
        .unwrap_err();
        assert_eq!(err.fields(), vec!["confirm_password"]);
    }

    #[test]
    fn register_seeds_the_profile_name() {
        let user = register(&RegisterInput {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
            role: "job_seeker".into(),
        })
        .unwrap();
        assert_eq!(user.display_name(), "Ada");
        assert_eq!(user.role, Role::JobSeeker);
    }

    #[test]
    fn role_wire_names_round_trip() {
        assert_eq!(serde_json::to_string(&Role::JobSeeker).unwrap(), "\"job_seeker\"");
        assert_eq!("employer".parse::<Role>().unwrap(), Role::Employer);
    }

    #[test]
    fn ids_are_lowercase_alphanumeric() {
        let id = generate_id();
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
