//! Failure families raised while validating, sampling and writing artefacts.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and diagnostic context carried by a [`GergError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case code such as `sigma-non-positive` or `trail-full`.
    pub code: String,
    /// One-line description of the failure.
    pub message: String,
    /// Offending values keyed by name: cell row/column, sigma, iteration, capacity.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested parameter change, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with no context or hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records a named value, rendered with `ToString`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attaches a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Every error the sampler, its configuration and the CLI can report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum GergError {
    /// Malformed run parameters or chain inputs.
    #[error("invalid argument: {0}")]
    InvalidArgument(ErrorInfo),
    /// The sample trail would be written past its declared capacity.
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(ErrorInfo),
    /// A proposal density or truncation window became numerically unusable.
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(ErrorInfo),
    /// Serialization, parsing and artefact I/O errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " {{{}}}", pairs.join(", "))?;
        }
        match &self.hint {
            Some(hint) => write!(f, "; hint: {hint}"),
            None => Ok(()),
        }
    }
}

impl GergError {
    /// Payload regardless of family.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            GergError::InvalidArgument(info)
            | GergError::CapacityExceeded(info)
            | GergError::NumericDegeneracy(info)
            | GergError::Serde(info) => info,
        }
    }
}
