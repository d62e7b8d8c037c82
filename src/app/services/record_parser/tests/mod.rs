//! Test fixtures shared by the record parser tests

use std::io::Write;
use tempfile::NamedTempFile;


/// State-level quarterly content with a header and one unavailable row
pub fn create_state_content() -> String {
    "state\tyear\tqtr\tindex_nsa
AK\t1975\t1\t.
AK\t1975\t2\t64.5
AK\t1975\t3\t66.2
AK\t1976\t1\t67.0
AL\t1975\t1\t61.1
AL\t1975\t2\t61.9
"
    .to_string()
}

/// ZIP-level annual content; the third column is an annual change figure
pub fn create_zip_content() -> String {
    "five_zip year annual_change hpi
14623 1995 . .
14623 1996 -0.7 98.22
14623 1997 1.39 99.59
02138 1996 3.1 120.4
"
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
