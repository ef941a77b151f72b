pub mod data;
pub mod error;
pub mod report;
pub mod tally;

pub mod q1;
pub mod q10;
pub mod q11;
pub mod q12;
pub mod q13;
pub mod q14;
pub mod q15;
pub mod q2;
pub mod q3;
pub mod q4;
pub mod q5;
pub mod q6;
pub mod q7;
pub mod q8;
pub mod q9;

#[cfg(test)]
pub(crate) mod fixture;

pub use data::{Catalog, Kind, LoadReport, Title, Titles};
pub use error::{CatalogError, Result, RowIssue};
