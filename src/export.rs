//! Plain-text export of the active tab

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::Result;

/// `<name>-<YYYY-MM-DD>.txt`. Path separators in the name become `_`, so
/// the result is always a single path component.
pub fn export_file_name(name: &str, date: NaiveDate) -> String {
    let stem: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect();
    format!("{}-{}.txt", stem, date.format("%Y-%m-%d"))
}

/// Write `content` into `dir` under the export file name, returning its path.
pub fn export_to_dir(dir: &Path, name: &str, content: &str, date: NaiveDate) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(name, date));
    fs::write(&path, content)?;
    info!(path = %path.display(), "exported tab");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(export_file_name("Untitled", date()), "Untitled-2024-03-09.txt");
        assert_eq!(export_file_name("My notes", date()), "My notes-2024-03-09.txt");
        assert_eq!(export_file_name("a/b\\c", date()), "a_b_c-2024-03-09.txt");
    }

    #[test]
    fn test_export_stays_inside_dir() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("out");
        let path = export_to_dir(&dir, "../escaped", "x", date()).unwrap();
        assert_eq!(path.parent().unwrap(), dir);
        assert_eq!(path.file_name().unwrap(), ".._escaped-2024-03-09.txt");
        assert!(!root.path().join("escaped-2024-03-09.txt").exists());

        let path = export_to_dir(&dir, "..", "y", date()).unwrap();
        assert_eq!(path.parent().unwrap(), dir);
        assert_eq!(fs::read_to_string(path).unwrap(), "y");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_to_dir(dir.path(), "Todo", "milk\neggs", date()).unwrap();
        assert_eq!(path.file_name().unwrap(), "Todo-2024-03-09.txt");
        assert_eq!(fs::read_to_string(path).unwrap(), "milk\neggs");
    }
}
