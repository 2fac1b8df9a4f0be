//! API error types
//!
//! One error type for every phase, plus a structured report for hosts.

use serde::Serialize;
use slate_core::runtime::ProgramError;
use slate_core::Diagnostic;
use thiserror::Error;

/// Slate error type
#[derive(Error, Debug)]
pub enum SlateError {
    /// The program text is not a valid serialized program
    #[error("Load error: {0}")]
    Load(#[from] serde_json::Error),

    /// The program is well-formed but structurally invalid
    #[error("Invalid program: {0}")]
    InvalidProgram(#[from] ProgramError),

    /// The run stopped at a diagnostic
    #[error("Runtime error: {0}")]
    Runtime(#[from] Diagnostic),
}

impl SlateError {
    /// Error line (1-based, if known)
    pub fn line(&self) -> Option<usize> {
        match self {
            SlateError::Load(e) => Some(e.line()).filter(|&line| line > 0),
            SlateError::InvalidProgram(_) => None,
            SlateError::Runtime(d) => Some(d.range.start.line),
        }
    }

    /// Error column (1-based, if known)
    pub fn column(&self) -> Option<usize> {
        match self {
            SlateError::Load(e) => Some(e.column()).filter(|&column| column > 0),
            SlateError::InvalidProgram(_) => None,
            SlateError::Runtime(d) => Some(d.range.start.column),
        }
    }

    pub fn phase(&self) -> &'static str {
        match self {
            SlateError::Load(_) => "load",
            SlateError::InvalidProgram(_) => "validate",
            SlateError::Runtime(_) => "runtime",
        }
    }

    /// The runtime diagnostic, if the run got that far
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            SlateError::Runtime(d) => Some(d),
            _ => None,
        }
    }

    /// Convert to a structured error report
    ///
    /// Hosts can print it directly or serialize it.
    pub fn to_report(&self) -> ErrorReport {
        let (error_kind, category, message, arguments) = match self {
            SlateError::Load(e) => (
                format!("{:?}", e.classify()),
                None,
                e.to_string(),
                Vec::new(),
            ),
            SlateError::InvalidProgram(e) => {
                ("InvalidProgram".to_string(), None, e.to_string(), Vec::new())
            }
            SlateError::Runtime(d) => (
                format!("{:?}", d.kind),
                Some(d.category().as_str()),
                d.message(),
                d.arguments.clone(),
            ),
        };
        ErrorReport {
            phase: self.phase(),
            line: self.line(),
            column: self.column(),
            error_kind,
            category,
            message,
            arguments,
        }
    }
}

/// Structured error report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// Failing phase: load, validate, runtime
    pub phase: &'static str,
    pub line: Option<usize>,
    pub column: Option<usize>,
    /// Error kind (for programmatic handling)
    pub error_kind: String,
    /// Error category, for runtime diagnostics
    pub category: Option<&'static str>,
    /// Human-readable message
    pub message: String,
    pub arguments: Vec<String>,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => {
                write!(f, "[{}:{}] {} error: {}", line, col, self.phase, self.message)
            }
            _ => write!(f, "{} error: {}", self.phase, self.message),
        }
    }
}

impl ErrorReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
