#[cfg(test)]
#[path = "document_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;

const ACCEPTED_EXTENSIONS: [&str; 1] = ["pdf"];

/// A document picked for upload. Only the picker's type filter applies, the
/// contents are read when the upload happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: path::PathBuf,
    pub name: String,
}

impl SelectedFile {
    pub fn pick(file_path: &str) -> Result<SelectedFile> {
        let trimmed = file_path.trim();
        if trimmed.is_empty() {
            bail!("No file path given. Usage: /file PATH");
        }

        let path = path::PathBuf::from(trimmed);
        if !path.is_file() {
            bail!(format!("{trimmed} does not exist or is not a file."));
        }

        let accepted = path
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                return ACCEPTED_EXTENSIONS.contains(&ext.as_str());
            })
            .unwrap_or(false);
        if !accepted {
            bail!(format!("{trimmed} is not a PDF document."));
        }

        let name = path
            .file_name()
            .map(|name| return name.to_string_lossy().to_string())
            .unwrap_or_else(|| return trimmed.to_string());

        return Ok(SelectedFile { path, name });
    }
}
