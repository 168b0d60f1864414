//! Miscellaneous utilities.

/// String parsers for embedded date tables.
pub mod data_parsers;

pub use data_parsers::parse_iso_date;
