//! Error types for grouptable

use thiserror::Error;

/// Errors signaled when a table operation violates its contract.
///
/// All of these are precondition violations detected synchronously at the
/// offending call. Operations are pure (they build a new value or fail
/// before returning one), so no partial state is ever observable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Column data supplied at the dynamic boundary was not a sequence,
    /// or its elements could not form a homogeneous column
    #[error("invalid column data: {0}")]
    InvalidColumn(String),

    /// A column's length disagrees with the table's established row count
    #[error("column {column} has {got} rows, want {want} rows")]
    RowCountMismatch {
        column: String,
        got: usize,
        want: usize,
    },

    /// A merged table lacks a column the receiver declares
    #[error("table missing column: {0}")]
    MissingColumn(String),

    /// A merged table declares a column the receiver lacks
    #[error("table has extra column: {0}")]
    ExtraColumn(String),

    /// Lookup of a column name that does not exist
    #[error("unknown column: {0}")]
    UnknownColumn(String),
}
