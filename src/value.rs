/// RecordView Field Value Model
///
/// Accessors extract a `FieldValue` from an opaque record. Every accessor
/// declares a `ValueKind`, so each sort key and filter key gets an explicit,
/// per-kind comparator instead of a catch-all fallback.
///
/// Missing or malformed fields degrade to `FieldValue::Null`: null never
/// matches a search term or filter value, and always sorts last.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// The declared kind of a field, driving comparison semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
    Date,
    Bool,
}

/// A single extracted field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Milliseconds since the Unix epoch
    Date(i64),
    Null,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Numeric coercion used by `ValueKind::Number` comparisons.
    /// Non-numeric values coerce to `None` and sort last.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Epoch-millisecond coercion used by `ValueKind::Date` comparisons
    pub fn as_date_millis(&self) -> Option<i64> {
        match self {
            FieldValue::Date(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Canonical string form, used for search matching and exact-match
    /// filtering. `None` for null (null never matches anything).
    pub fn display_string(&self) -> Option<String> {
        match self {
            FieldValue::Text(v) => Some(v.clone()),
            FieldValue::Int(v) => Some(v.to_string()),
            FieldValue::Float(v) => Some(v.to_string()),
            FieldValue::Bool(v) => Some(v.to_string()),
            FieldValue::Date(ms) => DateTime::from_timestamp_millis(*ms)
                .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            FieldValue::Null => None,
        }
    }

    /// Parse a date string into a `FieldValue::Date`.
    ///
    /// Accepts RFC 3339 (`2024-03-01T08:30:00Z`), a bare datetime
    /// (`2024-03-01T08:30:00`), or a bare date (`2024-03-01`). Anything else
    /// degrades to `FieldValue::Null`, which sorts last and matches nothing.
    pub fn parse_date(raw: &str) -> FieldValue {
        let trimmed = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return FieldValue::Date(dt.timestamp_millis());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
            return FieldValue::Date(dt.and_utc().timestamp_millis());
        }
        if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            if let Some(dt) = day.and_hms_opt(0, 0, 0) {
                return FieldValue::Date(dt.and_utc().timestamp_millis());
            }
        }
        FieldValue::Null
    }
}
