//! Error types for the catalog.
//!
//! Only load failures and bad query parameters surface as [`CatalogError`].
//! Problems with individual rows are [`RowIssue`] values: they are counted and
//! logged, and the row is left out of whatever it could not take part in.

use polars::prelude::PolarsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error("dataset has no `{0}` column")]
    MissingColumn(String),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl CatalogError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// A problem with a single row of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowIssue {
    #[error("row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("{show_id}: cannot parse date_added {value:?}")]
    UnparsableDate { show_id: String, value: String },

    #[error("{show_id}: duration {value:?} has no numeric prefix")]
    NonNumericDurationPrefix { show_id: String, value: String },
}

pub(crate) fn require_count(name: &'static str, n: usize) -> Result<()> {
    if n == 0 {
        return Err(CatalogError::invalid(name, "must be at least 1"));
    }
    Ok(())
}

pub(crate) fn require_text(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::invalid(name, "must not be empty"));
    }
    Ok(())
}
