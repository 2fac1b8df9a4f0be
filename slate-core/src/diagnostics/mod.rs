//! Runtime diagnostics
//!
//! A [`Diagnostic`] is plain data: an [`ErrorKind`], the [`SourceRange`] of the
//! offending instruction, and the formatted arguments that fill the kind's
//! message template. Producing one never unwinds; the execution engine decides
//! when a diagnostic ends a run.

use crate::syntax::{SourceRange, TokenKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of runtime errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// An operator applied to a kind that does not support it
    OperatorMisuse,
    /// A value could not be converted to the kind an operation requires
    TypeCoercion,
    /// A configured engine limit was exceeded
    ResourceLimit,
    /// The instruction stream broke an invariant the front end guarantees
    InternalConsistency,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::OperatorMisuse => "operator-misuse",
            ErrorCategory::TypeCoercion => "type-coercion",
            ErrorCategory::ResourceLimit => "resource-limit",
            ErrorCategory::InternalConsistency => "internal-consistency",
        }
    }
}

/// Every runtime error the core can report.
///
/// Variants are stable: hosts key localized messages on them, so existing
/// variants must not be renamed or repurposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    // ===== Operator misuse =====
    CannotUseOperatorWithAnArray,
    CannotUseOperatorWithABoolean,
    CannotUseAnArrayAsAnIndexToAnotherArray,

    // ===== Type coercion =====
    CannotUseOperatorWithAString,
    LibraryCallFailed,

    // ===== Resource limits =====
    OperandStackOverflow,
    CallStackOverflow,

    // ===== Internal consistency =====
    OperandStackUnderflow,
    ReturnWithoutCall,
    InvalidJumpTarget,
    UnknownLibraryMethod,
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::CannotUseOperatorWithAnArray
            | ErrorKind::CannotUseOperatorWithABoolean
            | ErrorKind::CannotUseAnArrayAsAnIndexToAnotherArray => ErrorCategory::OperatorMisuse,
            ErrorKind::CannotUseOperatorWithAString | ErrorKind::LibraryCallFailed => {
                ErrorCategory::TypeCoercion
            }
            ErrorKind::OperandStackOverflow | ErrorKind::CallStackOverflow => {
                ErrorCategory::ResourceLimit
            }
            ErrorKind::OperandStackUnderflow
            | ErrorKind::ReturnWithoutCall
            | ErrorKind::InvalidJumpTarget
            | ErrorKind::UnknownLibraryMethod => ErrorCategory::InternalConsistency,
        }
    }

    /// Message template; `{n}` is replaced by the n-th diagnostic argument
    pub fn template(&self) -> &'static str {
        match self {
            ErrorKind::CannotUseOperatorWithAnArray => {
                "Cannot use the operator '{0}' with an array value"
            }
            ErrorKind::CannotUseOperatorWithABoolean => {
                "Cannot use the operator '{0}' with a boolean value"
            }
            ErrorKind::CannotUseAnArrayAsAnIndexToAnotherArray => {
                "Cannot use an array as an index to access another array"
            }
            ErrorKind::CannotUseOperatorWithAString => {
                "Cannot use the operator '{0}' with a string value that is not a number"
            }
            ErrorKind::LibraryCallFailed => "Call to '{0}' failed: {1}",
            ErrorKind::OperandStackOverflow => "Operand stack exceeded its limit of {0} values",
            ErrorKind::CallStackOverflow => "Subroutine calls nested deeper than the limit of {0}",
            ErrorKind::OperandStackUnderflow => {
                "Instruction '{0}' found too few values on the operand stack"
            }
            ErrorKind::ReturnWithoutCall => "Return executed with no subroutine call in progress",
            ErrorKind::InvalidJumpTarget => {
                "Control transfer to instruction {0}, which is outside the program"
            }
            ErrorKind::UnknownLibraryMethod => "Library method '{0}' does not exist",
        }
    }
}

/// A structured, user-facing description of a runtime error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub range: SourceRange,
    pub arguments: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, range: SourceRange, arguments: Vec<String>) -> Self {
        Self {
            kind,
            range,
            arguments,
        }
    }

    /// Diagnostic whose single argument is an operator's display symbol
    pub fn for_operator(kind: ErrorKind, range: SourceRange, operator: TokenKind) -> Self {
        Self::new(kind, range, vec![operator.display_string().to_string()])
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Render the kind's template with this diagnostic's arguments
    pub fn message(&self) -> String {
        let template = self.kind.template();
        let mut out = String::with_capacity(template.len());
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '{' {
                out.push(c);
                continue;
            }
            let mut digits = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    digits.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            if chars.peek() == Some(&'}') && !digits.is_empty() {
                chars.next();
                let argument = digits
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| self.arguments.get(i));
                match argument {
                    Some(a) => out.push_str(a),
                    None => out.push('?'),
                }
            } else {
                out.push('{');
                out.push_str(&digits);
            }
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.range.start, self.message())
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Position;

    #[test]
    fn test_operator_message() {
        let d = Diagnostic::for_operator(
            ErrorKind::CannotUseOperatorWithAnArray,
            SourceRange::on_line(3, 5, 10),
            TokenKind::Divide,
        );
        assert_eq!(d.arguments, vec!["/".to_string()]);
        assert_eq!(d.message(), "Cannot use the operator '/' with an array value");
        assert_eq!(
            d.to_string(),
            "[3:5] Cannot use the operator '/' with an array value"
        );
    }

    #[test]
    fn test_missing_argument_renders_placeholder() {
        let d = Diagnostic::new(
            ErrorKind::LibraryCallFailed,
            SourceRange::at(Position::default()),
            vec!["Math.Abs".to_string()],
        );
        assert_eq!(d.message(), "Call to 'Math.Abs' failed: ?");
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            ErrorKind::CannotUseOperatorWithAnArray.category(),
            ErrorCategory::OperatorMisuse
        );
        assert_eq!(
            ErrorKind::CannotUseOperatorWithAString.category(),
            ErrorCategory::TypeCoercion
        );
        assert_eq!(
            ErrorKind::CallStackOverflow.category(),
            ErrorCategory::ResourceLimit
        );
        assert_eq!(
            ErrorKind::OperandStackUnderflow.category(),
            ErrorCategory::InternalConsistency
        );
    }

    #[test]
    fn test_serialized_shape() {
        let d = Diagnostic::for_operator(
            ErrorKind::CannotUseOperatorWithAnArray,
            SourceRange::on_line(1, 1, 6),
            TokenKind::Plus,
        );
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["kind"], "CannotUseOperatorWithAnArray");
        assert_eq!(json["range"]["start"]["line"], 1);
        assert_eq!(json["range"]["end"]["column"], 6);
        assert_eq!(json["arguments"][0], "+");

        let back: Diagnostic = serde_json::from_value(json).unwrap();
        assert_eq!(back, d);
    }
}
