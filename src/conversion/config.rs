//! Configuration options for CSV to JSON conversion

use crate::parser::QUOTE;

/// Parse a delimiter given by name (`comma`, `tab`, `semicolon`, `pipe`),
/// as the escape `\t`, or as a single literal character.
pub fn parse_delimiter(s: &str) -> Result<char, String> {
    match s.to_lowercase().as_str() {
        "comma" => return Ok(','),
        "tab" | "\\t" => return Ok('\t'),
        "semicolon" => return Ok(';'),
        "pipe" => return Ok('|'),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!(
            "Invalid delimiter '{}'. Use a single character or 'comma', 'tab', 'semicolon', 'pipe'",
            s
        )),
    }
}

/// Options controlling how a CSV document is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Field separator
    pub delimiter: char,
    /// First non-skipped line supplies the keys
    pub has_header: bool,
    /// Drop whitespace-only lines before parsing
    pub skip_empty_lines: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            skip_empty_lines: true,
        }
    }
}

impl ConversionOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Treat the first line as a header (or not)
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Skip whitespace-only lines (or keep them as data)
    pub fn with_skip_empty_lines(mut self, skip: bool) -> Self {
        self.skip_empty_lines = skip;
        self
    }

    /// Validate that the delimiter can separate fields at all
    pub fn validate(&self) -> Result<(), String> {
        match self.delimiter {
            QUOTE => Err("Delimiter cannot be the quote character".to_string()),
            '\n' | '\r' => Err("Delimiter cannot be a line break".to_string()),
            _ => Ok(()),
        }
    }
}

/// Conversion configuration: reading options plus output and resource settings
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// How the CSV text is read
    pub options: ConversionOptions,
    /// Spaces per indentation level for pretty output (0-8)
    pub indent_size: u8,
    /// Pretty-print output (vs compact)
    pub pretty: bool,
    /// Maximum input size in bytes
    pub memory_limit: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            options: ConversionOptions::default(),
            indent_size: 2,
            pretty: true,
            memory_limit: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set reading options
    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Result<Self, String> {
        if size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }
        self.indent_size = size;
        Ok(self)
    }

    /// Enable/disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set memory limit
    pub fn with_memory_limit(mut self, limit_bytes: usize) -> Self {
        self.memory_limit = limit_bytes;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        self.options.validate()?;

        if self.indent_size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }

        if self.memory_limit < 1024 {
            return Err("Memory limit must be at least 1KB".to_string());
        }

        Ok(())
    }
}
