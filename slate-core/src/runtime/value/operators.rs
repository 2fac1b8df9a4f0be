//! Arithmetic on values
//!
//! Each operator returns `Err(Diagnostic)` instead of a value when the
//! operands cannot take part in it; the caller decides what happens next.

use super::{string, Value};
use crate::diagnostics::{Diagnostic, ErrorKind};
use crate::syntax::{SourceRange, TokenKind};

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Token this operator is written with
    pub fn token(&self) -> TokenKind {
        match self {
            BinaryOperator::Add => TokenKind::Plus,
            BinaryOperator::Subtract => TokenKind::Minus,
            BinaryOperator::Multiply => TokenKind::Multiply,
            BinaryOperator::Divide => TokenKind::Divide,
        }
    }
}

/// Comparison operators; every comparison yields a boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
}

impl Value {
    /// Compare with `self` on the left. The `OrEqual` forms are the
    /// disjunction of the strict ordering and equality.
    pub fn compare(&self, operator: ComparisonOperator, other: &Value) -> bool {
        match operator {
            ComparisonOperator::Equal => self.is_equal_to(other),
            ComparisonOperator::NotEqual => !self.is_equal_to(other),
            ComparisonOperator::LessThan => self.is_less_than(other),
            ComparisonOperator::GreaterThan => self.is_greater_than(other),
            ComparisonOperator::LessThanOrEqual => {
                self.is_less_than(other) || self.is_equal_to(other)
            }
            ComparisonOperator::GreaterThanOrEqual => {
                self.is_greater_than(other) || self.is_equal_to(other)
            }
        }
    }

    /// Apply a binary operator with `self` on the left
    pub fn apply(
        &self,
        operator: BinaryOperator,
        other: &Value,
        range: SourceRange,
    ) -> Result<Value, Diagnostic> {
        match operator {
            BinaryOperator::Add => self.add(other, range),
            BinaryOperator::Subtract => self.subtract(other, range),
            BinaryOperator::Multiply => self.multiply(other, range),
            BinaryOperator::Divide => self.divide(other, range),
        }
    }

    /// Numeric sum when both sides read as numbers, otherwise the
    /// concatenation of both value strings
    pub fn add(&self, other: &Value, range: SourceRange) -> Result<Value, Diagnostic> {
        reject_arrays(self, other, range, TokenKind::Plus)?;
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => Ok(Value::Number(a + b)),
            _ => Ok(Value::String(format!(
                "{}{}",
                self.to_value_string(),
                other.to_value_string()
            ))),
        }
    }

    pub fn subtract(&self, other: &Value, range: SourceRange) -> Result<Value, Diagnostic> {
        let (a, b) = numeric_operands(self, other, range, TokenKind::Minus)?;
        Ok(Value::Number(a - b))
    }

    pub fn multiply(&self, other: &Value, range: SourceRange) -> Result<Value, Diagnostic> {
        let (a, b) = numeric_operands(self, other, range, TokenKind::Multiply)?;
        Ok(Value::Number(a * b))
    }

    /// IEEE division: a zero divisor yields an infinity or NaN
    pub fn divide(&self, other: &Value, range: SourceRange) -> Result<Value, Diagnostic> {
        let (a, b) = numeric_operands(self, other, range, TokenKind::Divide)?;
        Ok(Value::Number(a / b))
    }

    pub fn negate(&self, range: SourceRange) -> Result<Value, Diagnostic> {
        let n = numeric_operand(self, range, TokenKind::Minus)?;
        Ok(Value::Number(-n))
    }
}

fn reject_arrays(
    lhs: &Value,
    rhs: &Value,
    range: SourceRange,
    operator: TokenKind,
) -> Result<(), Diagnostic> {
    match (lhs, rhs) {
        (Value::Array(_), _) | (_, Value::Array(_)) => Err(Diagnostic::for_operator(
            ErrorKind::CannotUseOperatorWithAnArray,
            range,
            operator,
        )),
        _ => Ok(()),
    }
}

fn numeric_operands(
    lhs: &Value,
    rhs: &Value,
    range: SourceRange,
    operator: TokenKind,
) -> Result<(f64, f64), Diagnostic> {
    reject_arrays(lhs, rhs, range, operator)?;
    let a = numeric_operand(lhs, range, operator)?;
    let b = numeric_operand(rhs, range, operator)?;
    Ok((a, b))
}

fn numeric_operand(value: &Value, range: SourceRange, operator: TokenKind) -> Result<f64, Diagnostic> {
    let kind = match value {
        Value::Number(n) => return Ok(*n),
        Value::String(s) => match string::parse_number(s) {
            Some(n) => return Ok(n),
            None => ErrorKind::CannotUseOperatorWithAString,
        },
        Value::Boolean(_) => ErrorKind::CannotUseOperatorWithABoolean,
        Value::Array(_) => ErrorKind::CannotUseOperatorWithAnArray,
    };
    Err(Diagnostic::for_operator(kind, range, operator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::value::ArrayValue;

    fn range() -> SourceRange {
        SourceRange::on_line(4, 2, 9)
    }

    fn array() -> Value {
        Value::Array(ArrayValue::from_iter([("0", Value::Number(1.0))]))
    }

    #[test]
    fn test_or_equal_comparisons() {
        let two = Value::Number(2.0);
        let text = Value::string("abc");
        assert!(two.compare(ComparisonOperator::LessThanOrEqual, &Value::string("2")));
        assert!(two.compare(ComparisonOperator::GreaterThanOrEqual, &Value::Number(1.0)));
        assert!(text.compare(ComparisonOperator::LessThanOrEqual, &text));
        assert!(!text.compare(ComparisonOperator::LessThan, &text));
        assert!(two.compare(ComparisonOperator::NotEqual, &text));
        assert!(!array().compare(ComparisonOperator::GreaterThanOrEqual, &two));
    }

    #[test]
    fn test_number_arithmetic() {
        let a = Value::Number(6.0);
        let b = Value::Number(4.0);
        assert_eq!(a.add(&b, range()), Ok(Value::Number(10.0)));
        assert_eq!(a.subtract(&b, range()), Ok(Value::Number(2.0)));
        assert_eq!(a.multiply(&b, range()), Ok(Value::Number(24.0)));
        assert_eq!(a.divide(&b, range()), Ok(Value::Number(1.5)));
    }

    #[test]
    fn test_division_by_zero_follows_ieee() {
        let result = Value::Number(1.0).divide(&Value::Number(0.0), range());
        assert_eq!(result, Ok(Value::Number(f64::INFINITY)));
        let result = Value::Number(-1.0).divide(&Value::string("0"), range());
        assert_eq!(result, Ok(Value::Number(f64::NEG_INFINITY)));
    }

    #[test]
    fn test_add_numeric_strings_sums() {
        let result = Value::string("2").add(&Value::Number(3.0), range());
        assert_eq!(result, Ok(Value::Number(5.0)));
    }

    #[test]
    fn test_add_text_concatenates() {
        let result = Value::string("Hello ").add(&Value::string("World"), range());
        assert_eq!(result, Ok(Value::string("Hello World")));
        let result = Value::Number(1.0).add(&Value::string("a"), range());
        assert_eq!(result, Ok(Value::string("1a")));
        let result = Value::Boolean(true).add(&Value::Number(1.0), range());
        assert_eq!(result, Ok(Value::string("True1")));
    }

    #[test]
    fn test_array_operand_reports_each_operator() {
        let cases = [
            (BinaryOperator::Add, "+"),
            (BinaryOperator::Subtract, "-"),
            (BinaryOperator::Multiply, "*"),
            (BinaryOperator::Divide, "/"),
        ];
        for (operator, symbol) in cases {
            for (lhs, rhs) in [(array(), Value::Number(1.0)), (Value::Number(1.0), array())] {
                let err = lhs.apply(operator, &rhs, range()).unwrap_err();
                assert_eq!(err.kind, ErrorKind::CannotUseOperatorWithAnArray);
                assert_eq!(err.arguments, vec![symbol.to_string()]);
                assert_eq!(err.range, range());
            }
        }
    }

    #[test]
    fn test_array_wins_over_bad_string() {
        let err = Value::string("abc").subtract(&array(), range()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::CannotUseOperatorWithAnArray);
    }

    #[test]
    fn test_non_numeric_string() {
        let err = Value::string("abc")
            .multiply(&Value::Number(2.0), range())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::CannotUseOperatorWithAString);
        assert_eq!(err.arguments, vec!["*".to_string()]);
    }

    #[test]
    fn test_boolean_operand() {
        let err = Value::Number(2.0)
            .divide(&Value::Boolean(true), range())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::CannotUseOperatorWithABoolean);
        assert_eq!(err.arguments, vec!["/".to_string()]);
    }

    #[test]
    fn test_negate() {
        assert_eq!(Value::string("3").negate(range()), Ok(Value::Number(-3.0)));
        let err = array().negate(range()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::CannotUseOperatorWithAnArray);
        assert_eq!(err.arguments, vec!["-".to_string()]);
    }
}
