use std::fs;
use std::path;

use tempfile::TempDir;

/// Writes `contents` to `name` inside a fresh temporary directory. The
/// directory is removed when the returned `TempDir` is dropped.
pub fn document_fixture(name: &str, contents: &[u8]) -> (TempDir, path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join(name);
    fs::write(&file_path, contents).unwrap();

    return (dir, file_path);
}

pub fn pdf_fixture() -> &'static [u8] {
    return b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\ntrailer\n<< /Root 1 0 R >>\n%%EOF\n";
}

pub fn long_answer_fixture() -> &'static str {
    return r#"
The report covers the third quarter. Revenue grew by twelve percent compared to the previous quarter, driven mostly by subscription renewals.

Key points:
- Operating costs stayed flat.
- Two new regional offices opened.

That's the summary!
"#
    .trim();
}
