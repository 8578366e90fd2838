//! Persisting project results so module analysis can be reused by a later
//! `process_results` call.

use crate::core::ProjectResult;
use crate::errors::Result;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write `results` as pretty-printed JSON.
pub fn save_results(path: &Path, results: &ProjectResult) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.flush()?;
    log::debug!(
        "Saved {} module reports to {}",
        results.reports.len(),
        path.display()
    );
    Ok(())
}

/// Read results written by [`save_results`].
///
/// Content that is valid JSON but not a project result fails with
/// `InvalidArgument`.
pub fn load_results(path: &Path) -> Result<ProjectResult> {
    let file = fs::File::open(path)?;
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
    ProjectResult::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ModuleReport;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");
        let results = ProjectResult::new(vec![ModuleReport {
            src_path: "a".into(),
            ..ModuleReport::default()
        }]);

        save_results(&path, &results).unwrap();
        assert_eq!(load_results(&path).unwrap(), results);
    }

    #[test]
    fn test_load_rejects_non_result_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(load_results(&path).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_results(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.category(), "I/O");
    }
}
