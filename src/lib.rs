//! CSV to JSON Converter
//!
//! Turns a CSV document into an ordered list of JSON records: a quote-aware
//! line tokenizer feeds a record builder that maps each data line onto the
//! header keys and coerces numeric values.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use conversion::{
    csv_to_json, ConversionConfig, ConversionEngine, ConversionOptions, CsvData, Record,
};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult};
pub use formatter::{format_records, json_file_name};
pub use parser::{tokenize_line, CsvSource};
pub use validation::{CsvInspector, InspectionReport};

/// Convert CSV text to pretty JSON with default options
pub fn convert_csv(content: &str) -> Result<String, ConversionError> {
    let config = ConversionConfig::default();
    convert_csv_with_config(content, &config)
}

/// Convert CSV text to JSON with custom configuration
pub fn convert_csv_with_config(
    content: &str,
    config: &ConversionConfig,
) -> Result<String, ConversionError> {
    let data = conversion::convert_csv_string(content, config)?;
    format_records(&data.records, config)
}
