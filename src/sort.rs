/// RecordView Sort Stage
///
/// Stable, non-mutating ordering by a single declared sort key. Each key in a
/// `SortSet` maps to an accessor whose `ValueKind` selects an explicit
/// comparator; the kind match is exhaustive, so comparator fallthrough is
/// structurally impossible.
///
/// Direction is applied by negating the ascending comparator, never by
/// reversing the sorted array: reversal would invert tie order, which is
/// observable once pagination slices the result.
///
/// Null values (including unparsable dates and kind-mismatched fields) sort
/// last regardless of direction.
use crate::accessor::Accessor;
use crate::error::ViewError;
use crate::value::ValueKind;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub(crate) fn apply(self, base: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => base,
            SortDirection::Descending => base.reverse(),
        }
    }
}

/// Declared sort keys for a view, each backed by an accessor
pub struct SortSet<R> {
    accessors: HashMap<String, Accessor<R>>,
}

impl<R> SortSet<R> {
    pub fn new() -> Self {
        SortSet {
            accessors: HashMap::new(),
        }
    }

    /// Register a sort key (chainable)
    pub fn with(mut self, key: impl Into<String>, accessor: Accessor<R>) -> Self {
        self.accessors.insert(key.into(), accessor);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Accessor<R>> {
        self.accessors.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }
}

impl<R> Default for SortSet<R> {
    fn default() -> Self {
        SortSet::new()
    }
}

/// Return the records ordered by `sort_key` in the given direction.
///
/// No key (or an empty key) preserves the input order exactly. A key with no
/// registered accessor is a configuration error.
pub fn sort_records<'a, R>(
    records: Vec<&'a R>,
    sort_key: Option<&str>,
    direction: SortDirection,
    sorts: &SortSet<R>,
) -> Result<Vec<&'a R>, ViewError> {
    let key = match sort_key {
        Some(k) if !k.trim().is_empty() => k,
        _ => return Ok(records),
    };
    let accessor = sorts
        .get(key)
        .ok_or_else(|| ViewError::UnknownSortKey(key.to_string()))?;

    let mut ordered = records;
    // Vec::sort_by is stable: ties keep their incoming relative order
    ordered.sort_by(|a, b| compare_records(accessor, a, b, direction));
    Ok(ordered)
}

fn compare_records<R>(
    accessor: &Accessor<R>,
    a: &R,
    b: &R,
    direction: SortDirection,
) -> Ordering {
    let va = accessor.get(a);
    let vb = accessor.get(b);
    match accessor.kind() {
        ValueKind::Number => compare_nulls_last(va.as_number(), vb.as_number(), direction),
        ValueKind::Date => compare_nulls_last(va.as_date_millis(), vb.as_date_millis(), direction),
        ValueKind::Bool => compare_nulls_last(va.as_bool(), vb.as_bool(), direction),
        ValueKind::Text => compare_nulls_last(
            va.display_string().map(|s| s.to_lowercase()),
            vb.display_string().map(|s| s.to_lowercase()),
            direction,
        ),
    }
}

/// Nulls compare last whatever the direction; only the non-null branch is
/// negated for descending order.
fn compare_nulls_last<T: PartialOrd>(
    a: Option<T>,
    b: Option<T>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => direction.apply(x.partial_cmp(&y).unwrap_or(Ordering::Equal)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        k: i64,
        id: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { k: 1, id: "a" },
            Row { k: 1, id: "b" },
            Row { k: 2, id: "c" },
        ]
    }

    fn by_k() -> SortSet<Row> {
        SortSet::new().with("k", Accessor::number(|r: &Row| Some(r.k as f64)))
    }

    fn ids<'a>(rows: &[&'a Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_no_sort_key_preserves_input_order() {
        let rows = rows();
        let out = sort_records(
            rows.iter().rev().collect(),
            None,
            SortDirection::Ascending,
            &by_k(),
        )
        .unwrap();
        assert_eq!(ids(&out), vec!["c", "b", "a"]);

        let out = sort_records(
            rows.iter().collect(),
            Some("  "),
            SortDirection::Ascending,
            &by_k(),
        )
        .unwrap();
        assert_eq!(ids(&out), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_descending_is_comparator_negation_not_reversal() {
        let rows = rows();
        let asc = sort_records(
            rows.iter().collect(),
            Some("k"),
            SortDirection::Ascending,
            &by_k(),
        )
        .unwrap();
        assert_eq!(ids(&asc), vec!["a", "b", "c"]);

        // Reversing the ascending array would give ["c", "b", "a"]; negating
        // the comparator keeps the a/b tie in input order.
        let desc = sort_records(
            rows.iter().collect(),
            Some("k"),
            SortDirection::Descending,
            &by_k(),
        )
        .unwrap();
        assert_eq!(ids(&desc), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_nulls_sort_last_in_both_directions() {
        struct Sparse {
            score: Option<f64>,
            id: &'static str,
        }
        let rows = vec![
            Sparse {
                score: None,
                id: "missing",
            },
            Sparse {
                score: Some(2.0),
                id: "high",
            },
            Sparse {
                score: Some(1.0),
                id: "low",
            },
        ];
        let sorts = SortSet::new().with("score", Accessor::number(|r: &Sparse| r.score));

        let asc = sort_records(
            rows.iter().collect(),
            Some("score"),
            SortDirection::Ascending,
            &sorts,
        )
        .unwrap();
        assert_eq!(
            asc.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec!["low", "high", "missing"]
        );

        let desc = sort_records(
            rows.iter().collect(),
            Some("score"),
            SortDirection::Descending,
            &sorts,
        )
        .unwrap();
        assert_eq!(
            desc.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec!["high", "low", "missing"]
        );
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        struct Named {
            name: &'static str,
        }
        let rows = vec![
            Named { name: "bob" },
            Named { name: "Alice" },
            Named { name: "carol" },
        ];
        let sorts =
            SortSet::new().with("name", Accessor::text(|r: &Named| Some(r.name.to_string())));
        let out = sort_records(
            rows.iter().collect(),
            Some("name"),
            SortDirection::Ascending,
            &sorts,
        )
        .unwrap();
        assert_eq!(
            out.iter().map(|r| r.name).collect::<Vec<_>>(),
            vec!["Alice", "bob", "carol"]
        );
    }

    #[test]
    fn test_date_sort_invalid_dates_last() {
        struct Visit {
            date: &'static str,
            id: &'static str,
        }
        let rows = vec![
            Visit {
                date: "garbage",
                id: "bad",
            },
            Visit {
                date: "2024-03-02",
                id: "later",
            },
            Visit {
                date: "2024-03-01",
                id: "earlier",
            },
        ];
        let sorts = SortSet::new().with(
            "date",
            Accessor::date_str(|v: &Visit| Some(v.date.to_string())),
        );
        let out = sort_records(
            rows.iter().collect(),
            Some("date"),
            SortDirection::Descending,
            &sorts,
        )
        .unwrap();
        assert_eq!(
            out.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec!["later", "earlier", "bad"]
        );
    }

    #[test]
    fn test_unknown_sort_key_is_config_error() {
        let rows = rows();
        let err = sort_records(
            rows.iter().collect(),
            Some("missing"),
            SortDirection::Ascending,
            &by_k(),
        )
        .unwrap_err();
        assert_eq!(err, ViewError::UnknownSortKey("missing".to_string()));
    }

    #[test]
    fn test_sort_does_not_mutate_input_records() {
        let rows = rows();
        let _ = sort_records(
            rows.iter().collect(),
            Some("k"),
            SortDirection::Descending,
            &by_k(),
        )
        .unwrap();
        // Original vector untouched
        assert_eq!(rows[0], Row { k: 1, id: "a" });
        assert_eq!(rows[2], Row { k: 2, id: "c" });
    }
}
