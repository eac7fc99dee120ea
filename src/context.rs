//! Diagnostic records and the accumulator threaded through validation.

use serde::{Deserialize, Serialize};

/// Severity tier of a finding.
///
/// `Validation` findings block deployment; `BestPractice` findings are
/// advisory and the caller may deploy anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    #[serde(rename = "validation")]
    Validation,
    #[serde(rename = "best-practice")]
    BestPractice,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::Validation => write!(f, "validation"),
            DiagnosticKind::BestPractice => write!(f, "best-practice"),
        }
    }
}

/// A single finding produced by the deployment validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(rename = "type")]
    pub kind: DiagnosticKind,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Append-only sink for validation findings.
///
/// Created fresh per validation run. Entries keep insertion order and are
/// never deduplicated, so running the validator twice into the same
/// context reports everything twice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizationContext {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl NormalizationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(Diagnostic {
            kind: DiagnosticKind::Validation,
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(Diagnostic {
            kind: DiagnosticKind::BestPractice,
            message: message.into(),
        });
    }

    /// A document with no blocking errors may be deployed.
    pub fn is_deployable(&self) -> bool {
        self.errors.is_empty()
    }
}
