// src/fetch/mod.rs

/// Downloading CSV documents as text.
pub mod csv;

pub use csv::{fetch_csv_text, DEFAULT_CSV_URL};
