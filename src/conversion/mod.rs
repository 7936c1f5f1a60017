//! CSV to JSON conversion module
//!
//! This module contains the record builder, numeric coercion, size limits, configuration, and statistics.

pub mod coerce;
pub mod config;
pub mod engine;
pub mod limits;
pub mod stats;

pub use config::{parse_delimiter, ConversionConfig, ConversionOptions};

pub use engine::{
    convert_csv_string, csv_to_json, ConversionEngine,
    ConversionMetadata, CsvData, Record,
};

pub use crate::error::ConversionResult;
