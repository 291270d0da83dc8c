// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// Nested document with string and integer leaves.
#[allow(dead_code)]
pub const TEST_YAML: &str = r#"
---
a:
  host: localhost
  port: 5000
x:
  b:
    c:
      d: hello
      e: 100
"#;

/// Document whose indentation is inconsistent.
#[allow(dead_code)]
pub const INVALID_YAML: &str = r#"
---
a:
host: localhost
  port: 5000
b:
  host: localhost
  port: 3001
"#;

/// Writes `contents` to a temporary file that lives as long as the handle.
pub fn write_temp_yaml(contents: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .prefix("dots")
        .suffix(".yml")
        .tempfile()
        .unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
