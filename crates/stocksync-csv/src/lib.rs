//! CSV ingestion for stocksync
//!
//! Reads a comma-separated product export (first row = header, UTF-8) into an
//! in-memory table with pandas-like scalar inference: each cell becomes a
//! null, boolean, integer, float, or string field.

pub mod reader;
pub mod table;

pub use reader::{load_table, read_table};
pub use table::{Field, Record, Table};
