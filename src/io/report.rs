use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

use crate::domain::record::ReportEntry;
use crate::io::IoError;

/// Report file name derived from the run instant: `erros-ddMMyyyy-HHmmss.json`.
pub fn report_file_name(instant: DateTime<Utc>) -> String {
    format!("erros-{}.json", instant.format("%d%m%Y-%H%M%S"))
}

/// Persists the error report into `dir` and returns the report path.
///
/// The document is staged in a temporary file and renamed into place, so a
/// run that dies mid-write leaves no partial report behind. An empty entry
/// list still produces a report (`[]`). When the timestamped name is already
/// taken, a numeric suffix keeps the path unique for this run.
pub fn write_report(
    dir: &Path,
    instant: DateTime<Utc>,
    entries: &[ReportEntry],
) -> Result<PathBuf, IoError> {
    let path = unique_report_path(dir, instant);
    let mut staged = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut staged, entries)?;
    staged.write_all(b"\n")?;
    staged.persist(&path).map_err(|error| IoError::Io(error.error))?;
    Ok(path)
}

fn unique_report_path(dir: &Path, instant: DateTime<Utc>) -> PathBuf {
    let path = dir.join(report_file_name(instant));
    if !path.exists() {
        return path;
    }
    let stamp = instant.format("%d%m%Y-%H%M%S");
    let mut attempt = 1u32;
    loop {
        let candidate = dir.join(format!("erros-{stamp}-{attempt}.json"));
        if !candidate.exists() {
            return candidate;
        }
        attempt += 1;
    }
}
