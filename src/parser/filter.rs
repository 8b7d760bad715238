//! File name filtering for ship documents

use std::ffi::OsStr;

/// Return true if the name ends with `.json`, ignoring case
pub fn has_json_suffix(name: &str) -> bool {
    name.to_lowercase().ends_with(".json")
}

/// Same check on a raw file name; bytes that are not UTF-8 do not hide the suffix
pub fn is_json_name(name: &OsStr) -> bool {
    has_json_suffix(&name.to_string_lossy())
}
