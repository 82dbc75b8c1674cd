//! Who may do what.
//!
//! Every check is a pure function of the viewer and the action. Callers decide how to
//! surface a denial: the page shell renders an access-denied view for dashboards and an
//! inline notice for actions.

use std::fmt;

use serde::Serialize;

use crate::pkg::internal::auth::{Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    LoginRequired,
    RoleMismatch,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::LoginRequired => f.write_str("login required"),
            DenyReason::RoleMismatch => f.write_str("role mismatch"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Apply,
    PostJob,
    ViewDashboard(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub allowed: bool,
    pub reason: Option<DenyReason>,
}

impl Decision {
    fn allow() -> Self {
        Decision {
            allowed: true,
            reason: None,
        }
    }

    fn deny(reason: DenyReason) -> Self {
        Decision {
            allowed: false,
            reason: Some(reason),
        }
    }

    /// Turns a denial into an `AccessDenied` error so callers can use `?`.
    pub fn require(self) -> crate::prelude::Result<()> {
        match self.reason {
            None => Ok(()),
            Some(reason) => Err(crate::prelude::Error::AccessDenied(reason)),
        }
    }
}

fn require_role(user: Option<&User>, role: Role) -> Decision {
    match user {
        None => Decision::deny(DenyReason::LoginRequired),
        Some(u) if u.role != role => Decision::deny(DenyReason::RoleMismatch),
        Some(_) => Decision::allow(),
    }
}

pub fn can_apply(user: Option<&User>) -> Decision {
    require_role(user, Role::JobSeeker)
}

pub fn can_post_job(user: Option<&User>) -> Decision {
    require_role(user, Role::Employer)
}

pub fn can_view_dashboard(user: Option<&User>, role: Role) -> Decision {
    require_role(user, role)
}

pub fn decide(user: Option<&User>, action: Action) -> Decision {
    match action {
        Action::Apply => can_apply(user),
        Action::PostJob => can_post_job(user),
        Action::ViewDashboard(role) => can_view_dashboard(user, role),
    }
}

/// Text shown to the viewer when `action` is denied for `reason`.
pub fn denial_message(action: Action, reason: DenyReason) -> String {
    match (action, reason) {
        (Action::Apply, DenyReason::LoginRequired) => {
            "Please login as a job seeker to apply for jobs".into()
        }
        (Action::Apply, DenyReason::RoleMismatch) => "Only job seekers can apply for jobs".into(),
        (Action::PostJob, DenyReason::LoginRequired) => {
            "Please login as an employer to post jobs".into()
        }
        (Action::PostJob, DenyReason::RoleMismatch) => "Only employers can post jobs".into(),
        (Action::ViewDashboard(role), _) => match role {
            Role::Employer => "This page is only accessible to employers.".into(),
            Role::JobSeeker => "This page is only accessible to job seekers.".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User::new("someone@example.com", role)
    }

    #[test]
    fn apply_requires_a_signed_in_job_seeker() {
        assert!(!can_apply(None).allowed);
        assert_eq!(can_apply(None).reason, Some(DenyReason::LoginRequired));

        let employer = user(Role::Employer);
        assert!(!can_apply(Some(&employer)).allowed);
        assert_eq!(
            can_apply(Some(&employer)).reason,
            Some(DenyReason::RoleMismatch)
        );

        let seeker = user(Role::JobSeeker);
        assert!(can_apply(Some(&seeker)).allowed);
        assert_eq!(can_apply(Some(&seeker)).reason, None);
    }

    #[test]
    fn posting_requires_an_employer() {
        assert_eq!(can_post_job(None).reason, Some(DenyReason::LoginRequired));
        assert_eq!(
            can_post_job(Some(&user(Role::JobSeeker))).reason,
            Some(DenyReason::RoleMismatch)
        );
        assert!(can_post_job(Some(&user(Role::Employer))).allowed);
    }

    #[test]
    fn dashboards_are_all_or_nothing() {
        let seeker = user(Role::JobSeeker);
        assert!(can_view_dashboard(Some(&seeker), Role::JobSeeker).allowed);
        assert!(!can_view_dashboard(Some(&seeker), Role::Employer).allowed);
        assert!(!can_view_dashboard(None, Role::JobSeeker).allowed);
    }

    #[test]
    fn checks_are_idempotent() {
        let employer = user(Role::Employer);
        let first = decide(Some(&employer), Action::Apply);
        let second = decide(Some(&employer), Action::Apply);
        assert_eq!(first, second);
    }

    #[test]
    fn require_maps_denials_to_errors() {
        assert!(can_apply(Some(&user(Role::JobSeeker))).require().is_ok());
        let err = can_apply(None).require().unwrap_err();
        assert_eq!(err.to_string(), "access denied: login required");
    }

    #[test]
    fn denial_messages_name_the_expected_role() {
        assert_eq!(
            denial_message(Action::Apply, DenyReason::RoleMismatch),
            "Only job seekers can apply for jobs"
        );
        assert!(denial_message(
            Action::ViewDashboard(Role::Employer),
            DenyReason::LoginRequired
        )
        .contains("employers"));
    }
}
