/// RecordView Search Stage
///
/// Case-insensitive substring matching across a declared set of accessors.
/// An empty or all-whitespace term is the identity: the stage returns its
/// input unchanged. Null accessor values are non-matching for that accessor,
/// never an error.
///
/// Case folding is locale-naive (`str::to_lowercase`), keeping matching
/// deterministic across environments.
use crate::accessor::Accessor;
use crate::value::FieldValue;

/// Keep the records whose stringified field values contain `term`
/// (case-insensitively) for at least one accessor.
pub fn filter_by_search<'a, R>(
    records: Vec<&'a R>,
    term: &str,
    accessors: &[Accessor<R>],
) -> Vec<&'a R> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            accessors
                .iter()
                .any(|accessor| matches_term(accessor.get(record), &needle))
        })
        .collect()
}

fn matches_term(value: FieldValue, needle: &str) -> bool {
    match value.display_string() {
        Some(text) => text.to_lowercase().contains(needle),
        None => false,
    }
}
