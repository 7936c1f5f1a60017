use std::path::Path;

/// Return true if the path is an existing file with a .csv extension (any case)
pub fn is_csv_file(path: &Path) -> bool {
    path.is_file() && has_csv_extension(path)
}

/// Return true if the path ends in .csv, ignoring case
pub fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
