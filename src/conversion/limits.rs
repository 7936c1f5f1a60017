use crate::conversion::config::ConversionConfig;
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::CsvSource;

/// Check the source size before attempting to read it.
/// This avoids loading very large files into memory if the user-configured
/// limit is smaller than the file.
pub fn check_source_size_before_read(
    source: &CsvSource,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    if let Some(size) = source.estimated_size() {
        check_size(size, config)?;
    }

    Ok(())
}

/// Check text that was read without a known size up front (stdin).
pub fn check_content_size(content: &str, config: &ConversionConfig) -> ConversionResult<()> {
    check_size(content.len() as u64, config)
}

fn check_size(size: u64, config: &ConversionConfig) -> ConversionResult<()> {
    if size > config.memory_limit as u64 {
        return Err(ConversionError::conversion(
            ConversionErrorKind::InputTooLarge {
                size,
                limit: config.memory_limit,
            },
        ));
    }

    Ok(())
}
