//! Data model for tables read from spreadsheets.

mod table;

pub use table::{Row, Table};
