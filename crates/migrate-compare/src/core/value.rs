//! Cell value types for database-agnostic sample data.
//!
//! Samples are small (bounded by the configured sample size) and fully
//! materialized before comparison, so values are owned rather than borrowed.

use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single nullable cell value from a sampled row.
///
/// Implements `Eq` and `Hash` so whole rows can be used as hash-map keys for
/// duplicate detection. Floats compare and hash by bit pattern, which keeps
/// the `Eq`/`Hash` contract consistent (two cells are duplicates only when
/// their stored representation is identical).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScalarValue {
    /// SQL NULL.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Signed integer (covers smallint through bigint).
    Int(i64),

    /// Floating point (real / double precision).
    Float(f64),

    /// Text/string data.
    Text(String),

    /// Binary data.
    Bytes(Vec<u8>),

    /// UUID/GUID value.
    Uuid(Uuid),

    /// Decimal value with arbitrary precision.
    Decimal(Decimal),

    /// Timestamp without timezone.
    Timestamp(NaiveDateTime),

    /// Date without time component.
    Date(NaiveDate),

    /// Time without date component.
    Time(NaiveTime),
}

impl ScalarValue {
    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }
}

impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ScalarValue::Null, ScalarValue::Null) => true,
            (ScalarValue::Bool(a), ScalarValue::Bool(b)) => a == b,
            (ScalarValue::Int(a), ScalarValue::Int(b)) => a == b,
            (ScalarValue::Float(a), ScalarValue::Float(b)) => a.to_bits() == b.to_bits(),
            (ScalarValue::Text(a), ScalarValue::Text(b)) => a == b,
            (ScalarValue::Bytes(a), ScalarValue::Bytes(b)) => a == b,
            (ScalarValue::Uuid(a), ScalarValue::Uuid(b)) => a == b,
            (ScalarValue::Decimal(a), ScalarValue::Decimal(b)) => a == b,
            (ScalarValue::Timestamp(a), ScalarValue::Timestamp(b)) => a == b,
            (ScalarValue::Date(a), ScalarValue::Date(b)) => a == b,
            (ScalarValue::Time(a), ScalarValue::Time(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ScalarValue {}

impl Hash for ScalarValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Include a type discriminator to distinguish Int(1) from Text("1").
        std::mem::discriminant(self).hash(state);
        match self {
            ScalarValue::Null => {}
            ScalarValue::Bool(v) => v.hash(state),
            ScalarValue::Int(v) => v.hash(state),
            ScalarValue::Float(v) => v.to_bits().hash(state),
            ScalarValue::Text(v) => v.hash(state),
            ScalarValue::Bytes(v) => v.hash(state),
            ScalarValue::Uuid(v) => v.hash(state),
            ScalarValue::Decimal(v) => v.hash(state),
            ScalarValue::Timestamp(v) => v.hash(state),
            ScalarValue::Date(v) => v.hash(state),
            ScalarValue::Time(v) => v.hash(state),
        }
    }
}

// Convenience conversions for building samples
impl From<bool> for ScalarValue {
    fn from(v: bool) -> Self {
        ScalarValue::Bool(v)
    }
}

impl From<i32> for ScalarValue {
    fn from(v: i32) -> Self {
        ScalarValue::Int(v as i64)
    }
}

impl From<i64> for ScalarValue {
    fn from(v: i64) -> Self {
        ScalarValue::Int(v)
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        ScalarValue::Float(v)
    }
}

impl From<String> for ScalarValue {
    fn from(v: String) -> Self {
        ScalarValue::Text(v)
    }
}

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        ScalarValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for ScalarValue {
    fn from(v: Vec<u8>) -> Self {
        ScalarValue::Bytes(v)
    }
}

impl From<Uuid> for ScalarValue {
    fn from(v: Uuid) -> Self {
        ScalarValue::Uuid(v)
    }
}

impl From<Decimal> for ScalarValue {
    fn from(v: Decimal) -> Self {
        ScalarValue::Decimal(v)
    }
}

impl From<NaiveDateTime> for ScalarValue {
    fn from(v: NaiveDateTime) -> Self {
        ScalarValue::Timestamp(v)
    }
}

impl From<NaiveDate> for ScalarValue {
    fn from(v: NaiveDate) -> Self {
        ScalarValue::Date(v)
    }
}

impl From<NaiveTime> for ScalarValue {
    fn from(v: NaiveTime) -> Self {
        ScalarValue::Time(v)
    }
}

impl<T> From<Option<T>> for ScalarValue
where
    T: Into<ScalarValue>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => ScalarValue::Null,
        }
    }
}
