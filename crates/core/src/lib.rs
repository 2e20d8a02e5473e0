//! Domain building blocks shared by the database and HTTP layers.
//!
//! Nothing in this crate touches I/O: ids, the error taxonomy, the pagination
//! calculator and the integer sequence codec used by array-typed columns.

pub mod error;
pub mod pagination;
pub mod sequence;
pub mod types;
