/// RecordView Field Accessors
///
/// An `Accessor` pairs a closure that extracts a `FieldValue` from an opaque
/// record with the declared kind of that field. The engine is generic over
/// the record type; callers declare their accessors once per list view
/// instead of re-deriving field access inline per page.
///
/// For records that arrive as decoded JSON (the typical list-endpoint body),
/// `Accessor::json_path` walks a dotted path through nested objects, with
/// missing segments degrading to `FieldValue::Null` rather than panicking.
use crate::value::{FieldValue, ValueKind};
use serde_json::Value as JsonValue;

/// A typed field extractor for records of type `R`
pub struct Accessor<R> {
    kind: ValueKind,
    get: Box<dyn Fn(&R) -> FieldValue>,
}

impl<R> Accessor<R> {
    /// Create an accessor from a raw extraction closure
    pub fn new<F>(kind: ValueKind, get: F) -> Self
    where
        F: Fn(&R) -> FieldValue + 'static,
    {
        Accessor {
            kind,
            get: Box::new(get),
        }
    }

    /// Text field; `None` becomes null
    pub fn text<F>(get: F) -> Self
    where
        F: Fn(&R) -> Option<String> + 'static,
    {
        Accessor::new(ValueKind::Text, move |record| match get(record) {
            Some(v) => FieldValue::Text(v),
            None => FieldValue::Null,
        })
    }

    /// Numeric field; `None` becomes null
    pub fn number<F>(get: F) -> Self
    where
        F: Fn(&R) -> Option<f64> + 'static,
    {
        Accessor::new(ValueKind::Number, move |record| match get(record) {
            Some(v) => FieldValue::Float(v),
            None => FieldValue::Null,
        })
    }

    /// Boolean field; `None` becomes null
    pub fn boolean<F>(get: F) -> Self
    where
        F: Fn(&R) -> Option<bool> + 'static,
    {
        Accessor::new(ValueKind::Bool, move |record| match get(record) {
            Some(v) => FieldValue::Bool(v),
            None => FieldValue::Null,
        })
    }

    /// Date field stored as epoch milliseconds; `None` becomes null
    pub fn date_millis<F>(get: F) -> Self
    where
        F: Fn(&R) -> Option<i64> + 'static,
    {
        Accessor::new(ValueKind::Date, move |record| match get(record) {
            Some(v) => FieldValue::Date(v),
            None => FieldValue::Null,
        })
    }

    /// Date field stored as a string (RFC 3339, bare datetime, or bare date).
    /// Unparsable dates degrade to null.
    pub fn date_str<F>(get: F) -> Self
    where
        F: Fn(&R) -> Option<String> + 'static,
    {
        Accessor::new(ValueKind::Date, move |record| match get(record) {
            Some(v) => FieldValue::parse_date(&v),
            None => FieldValue::Null,
        })
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Extract the field value from a record
    pub fn get(&self, record: &R) -> FieldValue {
        (self.get)(record)
    }
}

impl Accessor<JsonValue> {
    /// Accessor over decoded JSON records, addressing a field by dotted path
    /// (`"patient.firstName"`). Array elements can be addressed by numeric
    /// segment (`"visits.0.date"`). Missing or mistyped segments yield null.
    pub fn json_path(kind: ValueKind, path: impl Into<String>) -> Self {
        let segments: Vec<String> = path.into().split('.').map(str::to_string).collect();
        Accessor::new(kind, move |record: &JsonValue| {
            json_field(lookup_path(record, &segments), kind)
        })
    }
}

fn lookup_path<'a>(record: &'a JsonValue, segments: &[String]) -> Option<&'a JsonValue> {
    let mut current = record;
    for segment in segments {
        current = match current {
            JsonValue::Object(map) => map.get(segment)?,
            JsonValue::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Convert a JSON leaf into a `FieldValue` under the accessor's declared kind
fn json_field(value: Option<&JsonValue>, kind: ValueKind) -> FieldValue {
    let value = match value {
        Some(v) => v,
        None => return FieldValue::Null,
    };
    match kind {
        ValueKind::Text => match value {
            JsonValue::String(s) => FieldValue::Text(s.clone()),
            JsonValue::Number(n) => FieldValue::Text(n.to_string()),
            JsonValue::Bool(b) => FieldValue::Text(b.to_string()),
            _ => FieldValue::Null,
        },
        ValueKind::Number => match value {
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    FieldValue::Float(f)
                } else {
                    FieldValue::Null
                }
            }
            // Admin backends sometimes ship numbers as strings
            JsonValue::String(s) => match s.trim().parse::<f64>() {
                Ok(f) => FieldValue::Float(f),
                Err(_) => FieldValue::Null,
            },
            _ => FieldValue::Null,
        },
        ValueKind::Date => match value {
            JsonValue::String(s) => FieldValue::parse_date(s),
            JsonValue::Number(n) => match n.as_i64() {
                Some(ms) => FieldValue::Date(ms),
                None => FieldValue::Null,
            },
            _ => FieldValue::Null,
        },
        ValueKind::Bool => match value {
            JsonValue::Bool(b) => FieldValue::Bool(*b),
            _ => FieldValue::Null,
        },
    }
}
