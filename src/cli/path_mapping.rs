use crate::formatter::json_file_name;
use std::path::{Path, PathBuf};

/// Map an input CSV file into an output JSON file path.
/// This preserves the input directory structure relative to `input_dir`.
pub fn map_input_to_output(input_dir: &Path, input_file: &Path, output_dir: &Path) -> PathBuf {
    let relative = input_file.strip_prefix(input_dir).unwrap_or(input_file);
    let out = output_dir.join(relative);
    json_path_for(&out)
}

/// Same directory, file name with `.csv` replaced by `.json`
pub fn json_path_for(path: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => path.with_file_name(json_file_name(&name.to_string_lossy())),
        None => path.with_extension("json"),
    }
}
