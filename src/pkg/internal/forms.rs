//! Lifecycle of a dashboard form.
//!
//! ```text
//! Idle -> Editing -> Committed -> Idle
//!            ^   \
//!            |    -> Invalid
//!            +-------/
//! ```
//!
//! A committed form immediately resets to `Idle` with cleared fields.

use crate::prelude::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Editing,
    Invalid,
    Committed,
}

#[derive(Debug, Clone, Default)]
pub struct DraftForm<T> {
    phase: FormPhase,
    fields: T,
    errors: Vec<String>,
}

impl<T: Default> DraftForm<T> {
    pub fn new() -> Self {
        DraftForm {
            phase: FormPhase::Idle,
            fields: T::default(),
            errors: Vec::new(),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn fields(&self) -> &T {
        &self.fields
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, FormPhase::Editing | FormPhase::Invalid)
    }

    pub fn open(&mut self) {
        if self.phase != FormPhase::Editing {
            self.phase = FormPhase::Editing;
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::new();
    }

    /// Runs `validate` over the submitted fields. Validation failures keep the fields for
    /// another attempt; any other error leaves the form as it was.
    pub fn submit<R, F>(&mut self, fields: T, validate: F) -> Result<R>
    where
        F: FnOnce(&T) -> Result<R>,
    {
        let previous = self.phase;
        self.phase = FormPhase::Editing;
        match validate(&fields) {
            Ok(value) => {
                self.phase = FormPhase::Committed;
                tracing::debug!("form committed");
                self.cancel();
                Ok(value)
            }
            Err(e) if e.is_validation() => {
                self.fields = fields;
                self.errors = e.messages();
                self.phase = FormPhase::Invalid;
                Err(e)
            }
            Err(e) => {
                self.phase = previous;
                Err(e)
            }
        }
    }
}
