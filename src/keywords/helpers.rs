use crate::error::ValidationError;
use num_cmp::NumCmp;
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

/// Deep structural equality over JSON values. Numbers compare across
/// representations: an integer equals a float whose fractional part is
/// exactly zero and whose value matches.
#[inline]
pub(crate) fn json_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => {
            compare_numbers(left, right) == Some(Ordering::Equal)
        }
        (Value::Array(left), Value::Array(right)) => equal_arrays(left, right),
        (Value::Object(left), Value::Object(right)) => equal_objects(left, right),
        (_, _) => left == right,
    }
}

#[inline]
pub(crate) fn equal_arrays(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len() && left.iter().zip(right.iter()).all(|(a, b)| json_equal(a, b))
}

/// Key order is immaterial; only the key set and per-key values count.
#[inline]
pub(crate) fn equal_objects(left: &Map<String, Value>, right: &Map<String, Value>) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|(key, value)| right.get(key).map_or(false, |other| json_equal(value, other)))
}

/// Exact ordering across the u64/i64/f64 views of two JSON numbers.
/// `None` only for NaN operands, which JSON cannot produce.
#[inline]
pub(crate) fn compare_numbers(left: &Number, right: &Number) -> Option<Ordering> {
    if let Some(a) = left.as_u64() {
        compare_with(a, right)
    } else if let Some(a) = left.as_i64() {
        compare_with(a, right)
    } else {
        compare_with(left.as_f64()?, right)
    }
}

#[inline]
fn compare_with<T>(left: T, right: &Number) -> Option<Ordering>
where
    T: NumCmp<u64> + NumCmp<i64> + NumCmp<f64>,
{
    if let Some(b) = right.as_u64() {
        NumCmp::num_cmp(left, b)
    } else if let Some(b) = right.as_i64() {
        NumCmp::num_cmp(left, b)
    } else {
        NumCmp::num_cmp(left, right.as_f64()?)
    }
}

/// Whether `value` divides evenly by `divisor`. Integer arithmetic when both
/// sides have an integer view, otherwise a zero-fraction check on the
/// floating quotient.
pub(crate) fn is_multiple_of(value: &Number, divisor: &Number) -> bool {
    if let (Some(a), Some(b)) = (value.as_i64(), divisor.as_i64()) {
        if b != 0 {
            return a % b == 0;
        }
    }
    if let (Some(a), Some(b)) = (value.as_u64(), divisor.as_u64()) {
        if b != 0 {
            return a % b == 0;
        }
    }
    match (value.as_f64(), divisor.as_f64()) {
        (Some(a), Some(b)) => (a / b).fract() == 0.0,
        _ => false,
    }
}

/// Bounds such as `maxLength` must be non-negative integers; a float with a
/// zero fractional part is accepted.
pub(crate) fn non_negative_integer(value: &Value) -> Result<u64, ValidationError> {
    let Value::Number(number) = value else {
        return Err(ValidationError::InvalidIntegerType);
    };
    if let Some(bound) = number.as_u64() {
        return Ok(bound);
    }
    if let Some(float) = number.as_f64() {
        if float >= 0.0 && float.fract() == 0.0 && float <= u64::MAX as f64 {
            return Ok(float as u64);
        }
    }
    Err(ValidationError::InvalidIntegerType)
}
