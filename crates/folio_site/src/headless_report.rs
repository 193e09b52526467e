//! Report output model for headless scenario runs.

use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Component, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a scenario run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub steps_run: usize,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
}

impl HeadlessReport {
    pub fn passed(steps_run: usize, elapsed_frames: u64, elapsed_ms: u64) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            steps_run,
            elapsed_frames,
            elapsed_ms,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        elapsed_frames: u64,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            steps_run: failed_step_index + 1,
            elapsed_frames,
            elapsed_ms,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }

    /// Write pretty JSON to a path relative to the working directory,
    /// creating parent directories
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        self.write_to_path_in(Path::new(""), path)
    }

    /// Write pretty JSON to `root.join(path)`; `path` must stay inside `root`
    pub fn write_to_path_in(&self, root: &Path, path: &Path) -> Result<()> {
        let escapes = path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        if path.is_absolute() || path.has_root() || escapes {
            return Err(SiteError::ReportPath {
                path: path.to_path_buf(),
            });
        }
        let payload = serde_json::to_string_pretty(self).map_err(SiteError::Report)?;
        let target = root.join(path);
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
            }
        }
        std::fs::write(&target, payload).map_err(|e| SiteError::io(&target, e))
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self).map_err(SiteError::Report)?;
        writer
            .write_all(payload.as_bytes())
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(|e| SiteError::io("<writer>", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_snake_case_status() {
        let report = HeadlessReport::failed("assert_dark", 3, "dark: expected true".into(), 10, 160);
        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"status\": \"failed\""));
        assert!(text.contains("\"failed_step_index\": 3"));
        assert!(text.contains("\"steps_run\": 4"));
    }

    #[test]
    fn writes_report_under_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let report = HeadlessReport::passed(5, 62, 992);

        report
            .write_to_path_in(tmp.path(), Path::new("reports/smoke/report.json"))
            .unwrap();

        let written = std::fs::read_to_string(tmp.path().join("reports/smoke/report.json")).unwrap();
        let parsed: HeadlessReport = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn rejects_escaping_paths() {
        let report = HeadlessReport::passed(0, 0, 0);
        for bad in ["/tmp/report.json", "../report.json", "out/../../x.json"] {
            assert!(matches!(
                report.write_to_path(Path::new(bad)),
                Err(SiteError::ReportPath { .. })
            ));
        }
    }
}
