/// Configuration errors for the collection view engine.
///
/// Data-level problems (missing fields, unparsable dates) never error; they
/// degrade to null per accessor. Errors are reserved for structurally invalid
/// configuration, which callers are expected to validate once at setup.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("page size must be at least 1")]
    InvalidPageSize,

    #[error("no sort accessor registered for key '{0}'")]
    UnknownSortKey(String),

    #[error("no filter accessor registered for key '{0}'")]
    UnknownFilterKey(String),
}
