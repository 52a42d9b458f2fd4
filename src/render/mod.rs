//! Output rendering for tables.
//!
//! # Example
//!
//! ```no_run
//! use sheetgrid::{read_file, render::*};
//!
//! let table = read_file("data.xlsx")?;
//!
//! // Tab-separated text
//! let text = to_text(&table);
//!
//! // CSV
//! let csv = to_csv(&table, &sheetgrid::CsvOptions::default())?;
//!
//! // JSON
//! let json = to_json(&table, JsonFormat::Pretty)?;
//! # Ok::<(), sheetgrid::Error>(())
//! ```

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::{to_csv, to_text};
