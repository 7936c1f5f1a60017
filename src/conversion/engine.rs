//! Core conversion engine: builds ordered records from CSV text

use crate::conversion::coerce::coerce_value;
use crate::conversion::config::{ConversionConfig, ConversionOptions};
use crate::conversion::limits;
use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use crate::parser::{tokenize_line, CsvSource};
use serde_json::{Map, Value};
use std::time::Instant;

/// One data line mapped onto the header keys, in header order
pub type Record = Map<String, Value>;

/// Core conversion result
#[derive(Debug, Clone, PartialEq)]
pub struct CsvData {
    pub records: Vec<Record>,
    pub metadata: ConversionMetadata,
}

impl CsvData {
    /// Create a new conversion result
    pub fn new(records: Vec<Record>, metadata: ConversionMetadata) -> Self {
        Self { records, metadata }
    }

    /// Number of records produced
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no data lines were found
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the result, keeping only the records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionMetadata {
    pub input_size: u64,
    /// Lines left after blank-line filtering, header line included
    pub line_count: usize,
    pub record_count: usize,
    /// Keys shared by every record, header order
    pub keys: Vec<String>,
    pub processing_time_ms: u64,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Create an engine that only needs reading options
    pub fn with_options(options: ConversionOptions) -> Self {
        Self::new(ConversionConfig::default().with_options(options))
    }

    /// Convert CSV text into records
    pub fn convert(&self, content: &str) -> ConversionResult<CsvData> {
        let start_time = Instant::now();
        let options = &self.config.options;

        let lines: Vec<&str> = content
            .split('\n')
            .filter(|line| !options.skip_empty_lines || !line.trim().is_empty())
            .collect();

        let Some(first_line) = lines.first() else {
            return Err(ConversionError::empty_document());
        };

        let (keys, data_lines) = if options.has_header {
            (tokenize_line(first_line, options.delimiter), &lines[1..])
        } else {
            let field_count = tokenize_line(first_line, options.delimiter).len();
            let keys: Vec<String> = (1..=field_count)
                .map(|index| format!("column_{}", index))
                .collect();
            (keys, &lines[..])
        };

        tracing::debug!(
            keys = keys.len(),
            data_lines = data_lines.len(),
            has_header = options.has_header,
            "resolved record keys"
        );

        let records: Vec<Record> = data_lines
            .iter()
            .map(|line| build_record(&keys, line, options.delimiter))
            .collect();

        let metadata = ConversionMetadata {
            input_size: content.len() as u64,
            line_count: lines.len(),
            record_count: records.len(),
            keys,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        Ok(CsvData::new(records, metadata))
    }

    /// Read a source and convert its content
    pub fn convert_from_source(&self, source: &CsvSource) -> ConversionResult<CsvData> {
        // Check source size before reading to avoid loading very large files
        limits::check_source_size_before_read(source, &self.config)?;

        let content = source.read_content()?;
        limits::check_content_size(&content, &self.config)?;

        tracing::debug!(source = %source.description(), bytes = content.len(), "read CSV source");
        self.convert(&content)
    }
}

/// Map one data line onto the keys. Missing trailing fields become empty
/// strings; fields beyond the key count are dropped.
fn build_record(keys: &[String], line: &str, delimiter: char) -> Record {
    let fields = tokenize_line(line, delimiter);
    let mut record = Record::new();

    for (index, key) in keys.iter().enumerate() {
        let value = fields.get(index).map(String::as_str).unwrap_or("");
        record.insert(key.clone(), coerce_value(value));
    }

    record
}

/// High-level conversion functions
/// Convert CSV text into records using the given options
pub fn csv_to_json(content: &str, options: &ConversionOptions) -> ConversionResult<Vec<Record>> {
    let engine = ConversionEngine::with_options(*options);
    engine.convert(content).map(CsvData::into_records)
}

/// Convert CSV text with a full configuration, keeping metadata
pub fn convert_csv_string(content: &str, config: &ConversionConfig) -> ConversionResult<CsvData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert(content)
}
