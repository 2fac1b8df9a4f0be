//! Built-in libraries
//!
//! Each method is a plain [`NativeFn`] registered in a [`NativeLibrary`]
//! table. Numeric arguments go through the same coercion as the arithmetic
//! operators; anything that does not read as a number is rejected.

use crate::runtime::library::{Library, LibraryError, NativeFn, NativeLibrary};
use crate::runtime::value::{ArrayValue, Value};

/// Create every built-in library
pub fn create_builtin_libraries() -> Vec<Box<dyn Library>> {
    vec![
        Box::new(create_math_library()),
        Box::new(create_text_library()),
        Box::new(create_array_library()),
    ]
}

fn table(name: &'static str, methods: &[(&'static str, NativeFn)]) -> NativeLibrary {
    methods
        .iter()
        .fold(NativeLibrary::new(name), |library, (method, function)| {
            library.with_method(method, *function)
        })
}

pub fn create_math_library() -> NativeLibrary {
    table(
        "Math",
        &[
            ("Abs", abs_fn),
            ("Ceiling", ceiling_fn),
            ("Floor", floor_fn),
            ("Max", max_fn),
            ("Min", min_fn),
            ("Power", power_fn),
            ("SquareRoot", square_root_fn),
            ("Remainder", remainder_fn),
        ],
    )
}

pub fn create_text_library() -> NativeLibrary {
    table(
        "Text",
        &[
            ("Append", append_fn),
            ("GetLength", get_length_fn),
            ("ConvertToUpperCase", upper_case_fn),
            ("ConvertToLowerCase", lower_case_fn),
        ],
    )
}

pub fn create_array_library() -> NativeLibrary {
    table(
        "Array",
        &[
            ("GetItemCount", get_item_count_fn),
            ("ContainsIndex", contains_index_fn),
            ("GetAllIndices", get_all_indices_fn),
            ("RemoveValue", remove_value_fn),
        ],
    )
}

// ===== Argument helpers =====

fn expect_args(args: &[Value], expected: usize) -> Result<(), LibraryError> {
    if args.len() != expected {
        return Err(LibraryError::ArgumentCount {
            expected,
            given: args.len(),
        });
    }
    Ok(())
}

fn to_f64(value: &Value) -> Result<f64, LibraryError> {
    value.as_number().ok_or_else(|| {
        LibraryError::InvalidArgument(format!(
            "expected a number, got {} {}",
            value.kind(),
            value.to_debugger_string()
        ))
    })
}

fn number(n: f64) -> Result<Option<Value>, LibraryError> {
    Ok(Some(Value::Number(n)))
}

// ===== Math =====

fn abs_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 1)?;
    number(to_f64(&args[0])?.abs())
}

fn ceiling_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 1)?;
    number(to_f64(&args[0])?.ceil())
}

fn floor_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 1)?;
    number(to_f64(&args[0])?.floor())
}

fn max_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 2)?;
    number(to_f64(&args[0])?.max(to_f64(&args[1])?))
}

fn min_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 2)?;
    number(to_f64(&args[0])?.min(to_f64(&args[1])?))
}

fn power_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 2)?;
    number(to_f64(&args[0])?.powf(to_f64(&args[1])?))
}

/// Negative input yields NaN, like division by zero yields an infinity
fn square_root_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 1)?;
    number(to_f64(&args[0])?.sqrt())
}

fn remainder_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 2)?;
    number(to_f64(&args[0])? % to_f64(&args[1])?)
}

// ===== Text =====

fn append_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 2)?;
    let text = format!("{}{}", args[0].to_value_string(), args[1].to_value_string());
    Ok(Some(Value::String(text)))
}

fn get_length_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 1)?;
    number(args[0].to_value_string().chars().count() as f64)
}

fn upper_case_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 1)?;
    Ok(Some(Value::String(args[0].to_value_string().to_uppercase())))
}

fn lower_case_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 1)?;
    Ok(Some(Value::String(args[0].to_value_string().to_lowercase())))
}

// ===== Array =====

/// Entry count; non-arrays count as empty
fn get_item_count_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 1)?;
    let count = args[0].as_array().map_or(0, ArrayValue::len);
    number(count as f64)
}

fn contains_index_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 2)?;
    let key = args[1].to_value_string();
    let found = args[0]
        .as_array()
        .is_some_and(|array| array.contains_key(&key));
    Ok(Some(Value::Boolean(found)))
}

/// Indices of an array as a new array keyed `1..=n`, in entry order
fn get_all_indices_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 1)?;
    let indices: ArrayValue = args[0]
        .as_array()
        .into_iter()
        .flat_map(|array| array.keys())
        .enumerate()
        .map(|(position, key)| ((position + 1).to_string(), Value::string(key)))
        .collect();
    Ok(Some(Value::Array(indices)))
}

/// Copy of an array without one index; later entries keep their order.
/// Non-arrays count as empty.
fn remove_value_fn(args: &[Value]) -> Result<Option<Value>, LibraryError> {
    expect_args(args, 2)?;
    let mut array = args[0].as_array().cloned().unwrap_or_default();
    array.remove(&args[1].to_value_string());
    Ok(Some(Value::Array(array)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(library: &NativeLibrary, method: &str, args: &[Value]) -> Value {
        library.call(method, args).unwrap().unwrap()
    }

    fn sample() -> Value {
        Value::Array(
            [("x", Value::Number(1.0)), ("y", Value::string("two"))]
                .into_iter()
                .collect(),
        )
    }

    #[test]
    fn test_math() {
        let math = create_math_library();
        assert_eq!(call(&math, "Abs", &[Value::Number(-2.5)]), Value::Number(2.5));
        assert_eq!(call(&math, "Ceiling", &[Value::string("1.2")]), Value::Number(2.0));
        assert_eq!(call(&math, "Floor", &[Value::Number(-1.2)]), Value::Number(-2.0));
        assert_eq!(
            call(&math, "Max", &[Value::Number(3.0), Value::Number(7.0)]),
            Value::Number(7.0)
        );
        assert_eq!(
            call(&math, "Min", &[Value::Number(3.0), Value::Number(7.0)]),
            Value::Number(3.0)
        );
        assert_eq!(
            call(&math, "Power", &[Value::Number(2.0), Value::Number(10.0)]),
            Value::Number(1024.0)
        );
        assert_eq!(call(&math, "SquareRoot", &[Value::Number(9.0)]), Value::Number(3.0));
        assert_eq!(
            call(&math, "Remainder", &[Value::Number(7.0), Value::Number(3.0)]),
            Value::Number(1.0)
        );
    }

    #[test]
    fn test_math_rejects_non_numbers() {
        let math = create_math_library();
        let err = math.call("Abs", &[Value::Boolean(true)]).unwrap_err();
        assert!(matches!(err, LibraryError::InvalidArgument(_)));
        let err = math.call("Abs", &[]).unwrap_err();
        assert_eq!(
            err,
            LibraryError::ArgumentCount {
                expected: 1,
                given: 0
            }
        );
    }

    #[test]
    fn test_text() {
        let text = create_text_library();
        assert_eq!(
            call(&text, "Append", &[Value::Number(1.0), Value::Number(2.0)]),
            Value::string("12")
        );
        assert_eq!(call(&text, "GetLength", &[Value::string("héllo")]), Value::Number(5.0));
        assert_eq!(
            call(&text, "ConvertToUpperCase", &[Value::string("Slate")]),
            Value::string("SLATE")
        );
        assert_eq!(
            call(&text, "ConvertToLowerCase", &[Value::Boolean(true)]),
            Value::string("true")
        );
    }

    #[test]
    fn test_array() {
        let array = create_array_library();
        assert_eq!(call(&array, "GetItemCount", &[sample()]), Value::Number(2.0));
        assert_eq!(call(&array, "GetItemCount", &[Value::string("x")]), Value::Number(0.0));
        assert_eq!(
            call(&array, "ContainsIndex", &[sample(), Value::string("y")]),
            Value::Boolean(true)
        );
        assert_eq!(
            call(&array, "ContainsIndex", &[sample(), Value::string("z")]),
            Value::Boolean(false)
        );

        let indices = call(&array, "GetAllIndices", &[sample()]);
        assert_eq!(indices.to_debugger_string(), "[1=\"x\", 2=\"y\"]");

        let removed = call(&array, "RemoveValue", &[sample(), Value::string("x")]);
        assert_eq!(removed.to_debugger_string(), "[y=\"two\"]");
        let unchanged = call(&array, "RemoveValue", &[sample(), Value::string("z")]);
        assert_eq!(unchanged, sample());
        assert_eq!(
            call(&array, "RemoveValue", &[Value::Number(1.0), Value::Number(1.0)]),
            Value::empty_array()
        );
    }
}
