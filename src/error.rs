use thiserror::Error;

/// Boxed error type reducers return, so adapters can `?` the heterogeneous
/// error types of the wrapped algorithm crates.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Fatal comparison-run failures. There is no retry or partial-result path;
/// every variant aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the method list is empty")]
    NoMethods,

    #[error("label vector has {got} entries but the sample matrix has {expected} rows")]
    LabelLength { expected: usize, got: usize },

    #[error("method `{method}` returned {got} rows for {expected} input rows")]
    RowMismatch {
        method: String,
        expected: usize,
        got: usize,
    },

    #[error("method `{method}` returned {got} columns, expected exactly 2")]
    ColumnCount { method: String, got: usize },

    #[error("method `{name}` failed: {source}")]
    Method {
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("chart rendering failed: {source}")]
    Chart {
        #[source]
        source: BoxError,
    },
}
