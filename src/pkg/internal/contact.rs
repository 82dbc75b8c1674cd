use serde::Deserialize;
use validator::Validate;

use crate::{pkg::internal::error::Error, prelude::Result};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub message: String,
}

/// Accepts a contact message. Messages are logged, not stored or forwarded.
pub fn submit(input: &ContactInput) -> Result<()> {
    let input = ContactInput {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        subject: input.subject.trim().to_string(),
        message: input.message.trim().to_string(),
    };
    if let Err(errs) = input.validate() {
        return Err(Error::from_validation(
            &errs,
            &[
                ("name", "name"),
                ("email", "email"),
                ("subject", "subject"),
                ("message", "message"),
            ],
        ));
    }
    tracing::info!("contact message from {}: {}", &input.email, &input.subject);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_required() {
        let err = submit(&ContactInput {
            name: "Ada".into(),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.fields(), vec!["email", "subject", "message"]);
    }

    #[test]
    fn complete_messages_are_accepted() {
        submit(&ContactInput {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Is the UX role still open?".into(),
        })
        .unwrap();
    }
}
