/// RecordView Filter Stage
///
/// Exact-match dropdown filtering. A `FilterSet` declares the filter keys a
/// view supports and the accessor backing each key; the active values map
/// (key -> selected value) arrives with the view-state. Keys that are absent
/// or hold an empty value impose no constraint; multiple active keys combine
/// with logical AND. Clearing every filter is the identity.
use crate::accessor::Accessor;
use crate::error::ViewError;
use std::collections::HashMap;

/// Declared filter keys for a view, each backed by an accessor
pub struct FilterSet<R> {
    accessors: HashMap<String, Accessor<R>>,
}

impl<R> FilterSet<R> {
    pub fn new() -> Self {
        FilterSet {
            accessors: HashMap::new(),
        }
    }

    /// Register a filter key (chainable)
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

impl<R> Default for FilterSet<R> {
    fn default() -> Self {
        FilterSet::new()
    }
}

/// Keep the records whose stringified field value equals the selected value
/// for every active filter key.
///
/// An active key with no registered accessor is a configuration error.
pub fn filter_by_active<'a, R>(
    records: Vec<&'a R>,
    filters: &FilterSet<R>,
    active: &HashMap<String, String>,
) -> Result<Vec<&'a R>, ViewError> {
    let mut constraints: Vec<(&Accessor<R>, &str)> = Vec::new();
    for (key, wanted) in active {
        if wanted.trim().is_empty() {
            continue;
        }
        let accessor = filters
            .get(key)
            .ok_or_else(|| ViewError::UnknownFilterKey(key.clone()))?;
        constraints.push((accessor, wanted.as_str()));
    }

    if constraints.is_empty() {
        return Ok(records);
    }

    Ok(records
        .into_iter()
        .filter(|record| {
            constraints.iter().all(|(accessor, wanted)| {
                accessor
                    .get(record)
                    .display_string()
                    .is_some_and(|value| value == *wanted)
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Admission {
        status: String,
        admission_type: String,
    }

    fn admissions() -> Vec<Admission> {
        vec![
            Admission {
                status: "ADMITTED".to_string(),
                admission_type: "EMERGENCY".to_string(),
            },
            Admission {
                status: "ADMITTED".to_string(),
                admission_type: "MEDICAL".to_string(),
            },
            Admission {
                status: "DISCHARGED".to_string(),
                admission_type: "EMERGENCY".to_string(),
            },
        ]
    }

    fn filters() -> FilterSet<Admission> {
        FilterSet::new()
            .with("status", Accessor::text(|a: &Admission| Some(a.status.clone())))
            .with(
                "type",
                Accessor::text(|a: &Admission| Some(a.admission_type.clone())),
            )
    }

    fn active(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_active_filters_is_identity() {
        let rows = admissions();
        let out = filter_by_active(rows.iter().collect(), &filters(), &HashMap::new()).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_empty_value_imposes_no_constraint() {
        let rows = admissions();
        let out =
            filter_by_active(rows.iter().collect(), &filters(), &active(&[("status", "")]))
                .unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_single_key_exact_match() {
        let rows = admissions();
        let out = filter_by_active(
            rows.iter().collect(),
            &filters(),
            &active(&[("status", "ADMITTED")]),
        )
        .unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_and_semantics_across_keys() {
        let rows = admissions();
        let out = filter_by_active(
            rows.iter().collect(),
            &filters(),
            &active(&[("status", "ADMITTED"), ("type", "EMERGENCY")]),
        )
        .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].admission_type, "EMERGENCY");
        assert_eq!(out[0].status, "ADMITTED");
    }

    #[test]
    fn test_exact_match_is_not_substring() {
        let rows = admissions();
        let out = filter_by_active(
            rows.iter().collect(),
            &filters(),
            &active(&[("status", "ADMIT")]),
        )
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_unknown_active_key_is_config_error() {
        let rows = admissions();
        let err = filter_by_active(
            rows.iter().collect(),
            &filters(),
            &active(&[("ward", "ICU")]),
        )
        .unwrap_err();
        assert_eq!(err, ViewError::UnknownFilterKey("ward".to_string()));
    }

    #[test]
    fn test_null_field_never_matches() {
        struct Sparse {
            status: Option<String>,
        }
        let rows = vec![
            Sparse {
                status: Some("OPEN".to_string()),
            },
            Sparse { status: None },
        ];
        let filters =
            FilterSet::new().with("status", Accessor::text(|s: &Sparse| s.status.clone()));
        let out = filter_by_active(
            rows.iter().collect(),
            &filters,
            &active(&[("status", "OPEN")]),
        )
        .unwrap();
        assert_eq!(out.len(), 1);
    }
}
