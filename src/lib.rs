/// RecordView - Collection View Engine for List Screens
///
/// A pure, synchronous search/filter/sort/pagination pipeline for record
/// lists. A rendering collaborator holds the view-state (search term, active
/// filters, sort spec, page) and re-invokes the pipeline on every change; a
/// fetch collaborator supplies the raw record array. The engine itself holds
/// no state, performs no I/O, and never mutates its inputs.
pub mod accessor;
pub mod error;
pub mod filter;
pub mod page;
pub mod search;
pub mod sort;
pub mod value;
pub mod view;

pub use accessor::Accessor;
pub use error::ViewError;
pub use filter::{filter_by_active, FilterSet};
pub use page::{paginate, ViewResult};
pub use search::filter_by_search;
pub use sort::{sort_records, SortDirection, SortSet};
pub use value::{FieldValue, ValueKind};
pub use view::{CollectionView, ViewState};
