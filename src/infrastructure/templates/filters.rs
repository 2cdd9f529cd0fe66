//! Arithmetic template filters.
//!
//! Both filters first try integer arithmetic (integers, integral strings,
//! booleans and truncated floats all count), then fall back to plain value
//! arithmetic, and finally hand the input back untouched. A template never
//! fails because of a non-numeric operand; integer division by zero is the
//! one error that surfaces.

use std::collections::HashMap;

use tera::{Error, Result, Value};

/// `{{ value | math_mult(arg=n) }}`
pub fn math_mult(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let arg = operand("math_mult", args)?;

    if let (Some(a), Some(b)) = (as_int(value), as_int(arg)) {
        return Ok(match a.checked_mul(b) {
            Some(product) => Value::from(product),
            None => Value::from(widen(a) * widen(b)),
        });
    }

    Ok(multiply(value, arg).unwrap_or_else(|| value.clone()))
}

/// `{{ value | math_div(arg=n) }}`
pub fn math_div(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let arg = operand("math_div", args)?;

    if let (Some(a), Some(b)) = (as_int(value), as_int(arg)) {
        if b == 0 {
            return Err(Error::msg("math_div: integer division by zero"));
        }
        return Ok(match floor_div(a, b) {
            Some(quotient) => Value::from(quotient),
            None => Value::from((widen(a) / widen(b)).floor()),
        });
    }

    Ok(divide(value, arg).unwrap_or_else(|| value.clone()))
}

fn operand<'a>(filter: &str, args: &'a HashMap<String, Value>) -> Result<&'a Value> {
    args.get("arg")
        .ok_or_else(|| Error::msg(format!("{filter} requires an `arg` argument")))
}

#[allow(
    clippy::cast_precision_loss,
    reason = "only reached once exact integer arithmetic overflowed"
)]
const fn widen(n: i64) -> f64 {
    n as f64
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "floats truncate toward zero like integer conversion"
)]
fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// Upper bound on the length of a repeated string (bytes) or list (items).
const MAX_REPEAT_LEN: usize = 1 << 20;

/// Operands a sequence can be repeated by.
fn repeat_count(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn multiply(value: &Value, arg: &Value) -> Option<Value> {
    match (value, arg) {
        (Value::Number(a), Value::Number(b)) => Some(Value::from(a.as_f64()? * b.as_f64()?)),
        (Value::String(s), n) | (n, Value::String(s)) => {
            let times = repeat_times(s.len(), n)?;
            Some(Value::String(s.repeat(times)))
        }
        (Value::Array(items), n) | (n, Value::Array(items)) => {
            let times = repeat_times(items.len(), n)?;
            let mut repeated = Vec::with_capacity(items.len() * times);
            for _ in 0..times {
                repeated.extend(items.iter().cloned());
            }
            Some(Value::Array(repeated))
        }
        _ => None,
    }
}

/// How often a sequence of `len` may be repeated by `n`; `None` when `n` is
/// not a count or the result would exceed [`MAX_REPEAT_LEN`].
fn repeat_times(len: usize, n: &Value) -> Option<usize> {
    let times = usize::try_from(repeat_count(n)?.max(0)).ok()?;
    len.checked_mul(times)
        .filter(|total| *total <= MAX_REPEAT_LEN)
        .map(|_| times)
}

fn divide(value: &Value, arg: &Value) -> Option<Value> {
    match (value, arg) {
        (Value::Number(a), Value::Number(b)) => {
            let divisor = b.as_f64()?;
            if divisor == 0.0 {
                return None;
            }
            Some(Value::from(a.as_f64()? / divisor))
        }
        _ => None,
    }
}

fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}
