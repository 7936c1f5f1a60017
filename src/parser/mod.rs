//! CSV input sources and the quote-aware line tokenizer

pub mod directory;
pub mod filter;
pub mod tokenizer;

pub use tokenizer::{tokenize_line, tokenize_line_detailed, TokenizedLine, QUOTE};

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use std::io::Read;
use std::path::PathBuf;

/// Source for CSV documents
#[derive(Debug, Clone, PartialEq)]
pub enum CsvSource {
    /// Raw CSV text
    String(String),
    /// Single CSV file path
    File(PathBuf),
    /// Directory containing CSV files
    Directory(PathBuf),
    /// Standard input stream
    Stdin,
}

impl CsvSource {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            CsvSource::String(_) => "string input".to_string(),
            CsvSource::File(path) => format!("file: {}", path.display()),
            CsvSource::Directory(path) => format!("directory: {}", path.display()),
            CsvSource::Stdin => "standard input".to_string(),
        }
    }

    /// Check if the source exists and is accessible
    pub fn exists(&self) -> bool {
        match self {
            CsvSource::String(_) => true,
            CsvSource::File(path) => path.is_file(),
            CsvSource::Directory(path) => path.is_dir(),
            CsvSource::Stdin => true,
        }
    }

    /// Get the size of the source in bytes, if known before reading
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            CsvSource::String(s) => Some(s.len() as u64),
            CsvSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            CsvSource::Directory(_) => None,
            CsvSource::Stdin => None,
        }
    }

    /// Read the whole document as text
    pub fn read_content(&self) -> ConversionResult<String> {
        match self {
            CsvSource::String(content) => Ok(content.clone()),
            CsvSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
                ConversionError::conversion(ConversionErrorKind::io(
                    e.to_string(),
                    Some(path.clone()),
                ))
            }),
            CsvSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer).map_err(|e| {
                    ConversionError::conversion(ConversionErrorKind::io(
                        format!("Failed to read stdin: {}", e),
                        None,
                    ))
                })?;
                Ok(buffer)
            }
            CsvSource::Directory(path) => Err(ConversionError::conversion(
                ConversionErrorKind::io(
                    "Cannot read directory as a single CSV document".to_string(),
                    Some(path.clone()),
                ),
            )),
        }
    }
}
