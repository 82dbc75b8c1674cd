use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::pkg::internal::policy::DenyReason;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", join_fields(.0))]
    Validation(Vec<FieldError>),
    #[error("access denied: {0}")]
    AccessDenied(DenyReason),
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Template(#[from] askama::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A single form field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Missing(String),
    Invalid(String, String),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Missing(field) => write!(f, "{} is required", field),
            FieldError::Invalid(field, why) => write!(f, "{} is invalid: {}", field, why),
        }
    }
}

impl FieldError {
    pub fn field(&self) -> &str {
        match self {
            FieldError::Missing(field) | FieldError::Invalid(field, _) => field,
        }
    }
}

impl Error {
    pub fn missing<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::Validation(
            fields
                .into_iter()
                .map(|f| FieldError::Missing(f.into()))
                .collect(),
        )
    }

    /// Collects `validator` failures for the given `(struct field, reported name)` pairs,
    /// reported in the order the pairs are listed.
    pub fn from_validation(errs: &validator::ValidationErrors, fields: &[(&str, &str)]) -> Self {
        let failed = errs.field_errors();
        Error::missing(
            fields
                .iter()
                .filter(|(field, name)| failed.contains_key(*field) || failed.contains_key(*name))
                .map(|(_, name)| *name),
        )
    }

    pub fn invalid(field: &str, why: &str) -> Self {
        Error::Validation(vec![FieldError::Invalid(field.into(), why.into())])
    }

    /// Field names named by a validation failure, in reporting order.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Error::Validation(errs) => errs.iter().map(FieldError::field).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Messages suitable for showing next to a form.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Error::Validation(errs) => errs.iter().map(ToString::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let code = match &self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::AccessDenied(_) => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => {
                tracing::error!("request failed: {}", &self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = match code {
            StatusCode::INTERNAL_SERVER_ERROR => "something went wrong".to_string(),
            _ => self.to_string(),
        };
        (code, Html(format!("<p class=\"error\">{}</p>", escape(&body)))).into_response()
    }
}

fn join_fields(errs: &[FieldError]) -> String {
    errs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_keep_their_order() {
        let err = Error::missing(["title", "type"]);
        assert_eq!(err.fields(), vec!["title", "type"]);
        assert_eq!(err.to_string(), "title is required, type is required");
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"));
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn access_denied_maps_to_forbidden() {
        let res = Error::AccessDenied(DenyReason::RoleMismatch).into_response();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }
}
