//! Core - grid geometry, field storage, errors, indexing helpers

#[macro_use]
pub mod utils;
pub mod error;
pub mod grid;
pub mod field;
