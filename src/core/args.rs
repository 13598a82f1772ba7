//! Borrowed call arguments with typed accessors.

use crate::instance::DispatchError;
use serde_json::Value;

/// Arguments passed to a dispatched operation.
///
/// # Example
///
/// ```rust
/// use statecraft::core::Args;
/// use statecraft::json;
///
/// let values = [json!(2), json!(4)];
/// let args = Args::new("add", &values);
///
/// assert_eq!(args.i64(0).unwrap() + args.i64(1).unwrap(), 6);
/// assert!(args.str(0).is_err());
/// assert!(args.get(2).is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Args<'a> {
    operation: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    /// Wrap the values passed to `operation`.
    pub fn new(operation: &'a str, values: &'a [Value]) -> Self {
        Self { operation, values }
    }

    /// Name of the operation these arguments were passed to.
    pub fn operation(&self) -> &'a str {
        self.operation
    }

    /// Number of arguments passed.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no arguments were passed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the raw argument values.
    pub fn as_slice(&self) -> &'a [Value] {
        self.values
    }

    /// Fail unless exactly `expected` arguments were passed.
    pub fn expect_len(&self, expected: usize) -> Result<(), DispatchError> {
        if self.values.len() == expected {
            Ok(())
        } else {
            Err(DispatchError::ArityMismatch {
                operation: self.operation.to_string(),
                expected,
                got: self.values.len(),
            })
        }
    }

    /// Get argument `index`, failing if it was not passed.
    pub fn get(&self, index: usize) -> Result<&'a Value, DispatchError> {
        self.values
            .get(index)
            .ok_or_else(|| DispatchError::MissingArgument {
                operation: self.operation.to_string(),
                index,
            })
    }

    /// Read argument `index` as an integer.
    pub fn i64(&self, index: usize) -> Result<i64, DispatchError> {
        let value = self.get(index)?;
        value.as_i64().ok_or_else(|| self.type_error(index, "integer", value))
    }

    /// Read argument `index` as a number (integers included).
    pub fn f64(&self, index: usize) -> Result<f64, DispatchError> {
        let value = self.get(index)?;
        value.as_f64().ok_or_else(|| self.type_error(index, "number", value))
    }

    /// Read argument `index` as a boolean.
    pub fn bool(&self, index: usize) -> Result<bool, DispatchError> {
        let value = self.get(index)?;
        value.as_bool().ok_or_else(|| self.type_error(index, "boolean", value))
    }

    /// Read argument `index` as a string.
    pub fn str(&self, index: usize) -> Result<&'a str, DispatchError> {
        let value = self.get(index)?;
        value.as_str().ok_or_else(|| self.type_error(index, "string", value))
    }

    fn type_error(&self, index: usize, expected: &'static str, found: &Value) -> DispatchError {
        DispatchError::ArgumentType {
            operation: self.operation.to_string(),
            index,
            expected,
            found: kind_of(found),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
