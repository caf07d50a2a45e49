/// RecordView Pipeline
///
/// `CollectionView` bundles the per-view configuration (search accessors,
/// filter set, sort set, page size) declared once per list screen.
/// `ViewState` bundles the per-invocation state (search term, active filters,
/// sort spec, page) as one immutable value.
///
/// `compute` applies the stages in a fixed order -- search, filters, sort,
/// pagination -- and returns a fresh `ViewResult`. The pipeline is a pure
/// function: it holds no state, never mutates its inputs, and identical
/// inputs always produce identical output. There is no I/O anywhere in the
/// pipeline, so it is cheap enough to recompute on every keystroke.
use crate::accessor::Accessor;
use crate::error::ViewError;
use crate::filter::{filter_by_active, FilterSet};
use crate::page::{paginate, ViewResult};
use crate::search::filter_by_search;
use crate::sort::{sort_records, SortDirection, SortSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The per-invocation view state owned by the rendering collaborator.
///
/// Transitions that change the search term, filters, or sort spec reset the
/// page to 1 as a derived computation: a stale page number from a larger
/// result set can never silently persist into a smaller filtered set. Only
/// `on_page` moves the page.
///
/// # Examples
///
/// ```
/// use recordview::ViewState;
///
/// let state = ViewState::new().on_page(5);
/// assert_eq!(state.page, 5);
///
/// // Narrowing the search derives a page reset
/// let state = state.with_search_term("smith");
/// assert_eq!(state.page, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub filters: HashMap<String, String>,
    #[serde(default)]
    pub sort_key: Option<String>,
    #[serde(default = "default_direction")]
    pub sort_direction: SortDirection,
    #[serde(default = "first_page")]
    pub page: usize,
}

fn default_direction() -> SortDirection {
    SortDirection::Ascending
}

fn first_page() -> usize {
    1
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            search_term: String::new(),
            filters: HashMap::new(),
            sort_key: None,
            sort_direction: SortDirection::Ascending,
            page: 1,
        }
    }

    /// Change the search term; resets the page to 1
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self.page = 1;
        self
    }

    /// Set a filter value; resets the page to 1. An empty value is kept in
    /// the map but imposes no constraint.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self.page = 1;
        self
    }

    /// Drop one filter key; resets the page to 1
    pub fn without_filter(mut self, key: &str) -> Self {
        self.filters.remove(key);
        self.page = 1;
        self
    }

    /// Drop every filter; resets the page to 1
    pub fn clear_filters(mut self) -> Self {
        self.filters.clear();
        self.page = 1;
        self
    }

    /// Change the sort key and direction; resets the page to 1
    pub fn with_sort(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_key = Some(key.into());
        self.sort_direction = direction;
        self.page = 1;
        self
    }

    /// Clear the sort spec (preserve input order); resets the page to 1
    pub fn without_sort(mut self) -> Self {
        self.sort_key = None;
        self.sort_direction = SortDirection::Ascending;
        self.page = 1;
        self
    }

    /// Move to another page. The only transition that does not reset the page.
    pub fn on_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new()
    }
}

/// The per-view configuration: which fields are searchable, which filter and
/// sort keys exist, and the fixed page size.
///
/// # Examples
///
/// ```
/// use recordview::{Accessor, CollectionView, SortDirection, ViewState};
///
/// struct Patient {
///     name: String,
///     ward: String,
/// }
///
/// let view = CollectionView::new(10)
///     .unwrap()
///     .search_field(Accessor::text(|p: &Patient| Some(p.name.clone())))
///     .filter("ward", Accessor::text(|p: &Patient| Some(p.ward.clone())))
///     .sort("name", Accessor::text(|p: &Patient| Some(p.name.clone())));
///
/// let patients = vec![
///     Patient { name: "Bob".to_string(), ward: "ICU".to_string() },
///     Patient { name: "Alice".to_string(), ward: "ICU".to_string() },
/// ];
///
/// let state = ViewState::new().with_sort("name", SortDirection::Ascending);
/// let result = view.compute(&patients, &state).unwrap();
/// assert_eq!(result.page_records[0].name, "Alice");
/// assert_eq!(result.total_items, 2);
/// ```
pub struct CollectionView<R> {
    search_fields: Vec<Accessor<R>>,
    filters: FilterSet<R>,
    sorts: SortSet<R>,
    page_size: usize,
}

impl<R> std::fmt::Debug for CollectionView<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionView")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl<R> CollectionView<R> {
    /// Create a view configuration with a fixed page size (at least 1)
    pub fn new(page_size: usize) -> Result<Self, ViewError> {
        if page_size == 0 {
            return Err(ViewError::InvalidPageSize);
        }
        Ok(CollectionView {
            search_fields: Vec::new(),
            filters: FilterSet::new(),
            sorts: SortSet::new(),
            page_size,
        })
    }

    /// Add a field to the searchable set (chainable)
    pub fn search_field(mut self, accessor: Accessor<R>) -> Self {
        self.search_fields.push(accessor);
        self
    }

    /// Register a filter key (chainable)
    pub fn filter(mut self, key: impl Into<String>, accessor: Accessor<R>) -> Self {
        self.filters = self.filters.with(key, accessor);
        self
    }

    /// Register a sort key (chainable)
    pub fn sort(mut self, key: impl Into<String>, accessor: Accessor<R>) -> Self {
        self.sorts = self.sorts.with(key, accessor);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Run the full pipeline: search -> filters -> sort -> pagination.
    ///
    /// Errors only on structurally invalid configuration (an active filter
    /// key or sort key with no registered accessor). Malformed record fields
    /// never error; they degrade to null.
    pub fn compute<'a>(
        &self,
        records: &'a [R],
        state: &ViewState,
    ) -> Result<ViewResult<'a, R>, ViewError> {
        let matched = filter_by_search(
            records.iter().collect(),
            &state.search_term,
            &self.search_fields,
        );
        let matched = filter_by_active(matched, &self.filters, &state.filters)?;
        let ordered = sort_records(
            matched,
            state.sort_key.as_deref(),
            state.sort_direction,
            &self.sorts,
        )?;
        let result = paginate(ordered, state.page, self.page_size)?;

        log::trace!(
            "view recompute: {} records in, {} matched, page {}/{}",
            records.len(),
            result.total_items,
            result.current_page,
            result.total_pages
        );
        Ok(result)
    }
}
