//! Value coercion.
//!
//! [`FromValue`] converts a resolved [`Value`] into a requested Rust type. Each
//! implementation is one row of the conversion table:
//!
//! | target | bool | int | float | string | map | list |
//! |---|---|---|---|---|---|---|
//! | `bool` | as-is | non-zero | non-zero | `true`/`yes`/`false`/`no` | - | - |
//! | `i64` | 1/0 | as-is | truncate | parse int, else parse float and truncate | - | - |
//! | `f64` | 1.0/0.0 | widen | as-is | parse float | - | - |
//! | `String` | `true`/`false` | decimal | 9 fractional digits | as-is | - | - |
//! | `Map` | - | - | - | - | as-is | - |
//!
//! `-` is a [`CoerceError`]. `Null` never converts to anything.

use crate::constants::{FALSE_WORDS, FLOAT_STRING_PRECISION, TRUE_WORDS};

use super::{
    errors::CoerceError,
    value::{Kind, Map, Value},
};

/// Types a [`Value`] can be coerced into.
pub trait FromValue: Sized {
    /// The representation this type stands for in errors and list checks.
    const KIND: Kind;

    /// Converts `value`, or reports the mismatch.
    fn from_value(value: &Value) -> Result<Self, CoerceError>;
}

fn mismatch<T: FromValue>(value: &Value) -> CoerceError {
    let err = CoerceError::new(value.kind(), T::KIND);
    tracing::trace!(actual = %err.actual, expected = %err.expected, "coercion failed");
    err
}

impl FromValue for bool {
    const KIND: Kind = Kind::Bool;

    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Int(n) => Ok(*n != 0),
            Value::Float(n) => Ok(*n != 0.0),
            Value::Text(s) if TRUE_WORDS.contains(&s.as_str()) => Ok(true),
            Value::Text(s) if FALSE_WORDS.contains(&s.as_str()) => Ok(false),
            Value::Null | Value::Text(_) | Value::Map(_) | Value::List(_) => {
                Err(mismatch::<Self>(value))
            }
        }
    }
}

/// Truncates toward zero, refusing values `i64` cannot hold.
fn truncate(n: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let t = n.trunc();
    (t.is_finite() && t >= -LIMIT && t < LIMIT).then_some(t as i64)
}

impl FromValue for i64 {
    const KIND: Kind = Kind::Int;

    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Bool(b) => Ok(i64::from(*b)),
            Value::Int(n) => Ok(*n),
            Value::Float(n) => truncate(*n).ok_or_else(|| mismatch::<Self>(value)),
            Value::Text(s) => s
                .parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
                .ok_or_else(|| mismatch::<Self>(value)),
            Value::Null | Value::Map(_) | Value::List(_) => Err(mismatch::<Self>(value)),
        }
    }
}

// Narrower integers follow the i64 rules, then must fit.
macro_rules! impl_from_value_narrow_int {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                const KIND: Kind = Kind::Int;

                fn from_value(value: &Value) -> Result<Self, CoerceError> {
                    let wide = i64::from_value(value)?;
                    <$ty>::try_from(wide).map_err(|_| mismatch::<Self>(value))
                }
            }
        )*
    };
}

impl_from_value_narrow_int!(i32, i16, i8, u64, u32, u16, u8, usize);

impl FromValue for f64 {
    const KIND: Kind = Kind::Float;

    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Int(n) => Ok(*n as f64),
            Value::Float(n) => Ok(*n),
            Value::Text(s) => s.parse::<f64>().map_err(|_| mismatch::<Self>(value)),
            Value::Null | Value::Map(_) | Value::List(_) => Err(mismatch::<Self>(value)),
        }
    }
}

impl FromValue for f32 {
    const KIND: Kind = Kind::Float;

    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        f64::from_value(value).map(|n| n as f32)
    }
}

impl FromValue for String {
    const KIND: Kind = Kind::Text;

    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(n) => Ok(n.to_string()),
            Value::Float(n) => Ok(format!("{n:.prec$}", prec = FLOAT_STRING_PRECISION)),
            Value::Text(s) => Ok(s.clone()),
            Value::Null | Value::Map(_) | Value::List(_) => Err(mismatch::<Self>(value)),
        }
    }
}

impl FromValue for Map {
    const KIND: Kind = Kind::Map;

    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Map(map) => Ok(map.clone()),
            _ => Err(mismatch::<Self>(value)),
        }
    }
}

/// The raw sequence, without element conversion.
impl FromValue for Vec<Value> {
    const KIND: Kind = Kind::List;

    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::List(list) => Ok(list.clone()),
            _ => Err(mismatch::<Self>(value)),
        }
    }
}

/// Identity: any value, unconverted.
impl FromValue for Value {
    const KIND: Kind = Kind::Any;

    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        Ok(value.clone())
    }
}
