//! JSON output for converted records

use crate::conversion::{ConversionConfig, ConversionResult, Record};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serialize records as a JSON array, pretty or compact per configuration
pub fn format_records(records: &[Record], config: &ConversionConfig) -> ConversionResult<String> {
    if !config.pretty {
        return Ok(serde_json::to_string(records)?);
    }

    let indent = vec![b' '; config.indent_size as usize];
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(&indent));
    records.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// File name for the JSON export of a CSV file: a trailing `.csv` (any case)
/// is replaced by `.json`, other names get `.json` appended.
pub fn json_file_name(name: &str) -> String {
    let stem_len = name.len().saturating_sub(4);
    match name.get(stem_len..) {
        Some(ext) if name.len() >= 4 && ext.eq_ignore_ascii_case(".csv") => {
            format!("{}.json", &name[..stem_len])
        }
        _ => format!("{}.json", name),
    }
}
