//! Output path configuration.
//!
//! All directories are explicit — nothing resolves against ambient process
//! state, so a run is fully determined by its `ExportPaths` + request.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed manifest filename, overwritten on every run.
pub const MANIFEST_FILENAME: &str = "data_upload.yml";

/// Log file, appended across runs.
pub const LOG_FILENAME: &str = "data_download.log";

/// The three output directories of an export run.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    data_dir: PathBuf,
    jobs_dir: PathBuf,
    logs_dir: PathBuf,
}

impl ExportPaths {
    pub fn new(
        data_dir: impl Into<PathBuf>,
        jobs_dir: impl Into<PathBuf>,
        logs_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            jobs_dir: jobs_dir.into(),
            logs_dir: logs_dir.into(),
        }
    }

    /// Create all three directories if absent. Idempotent.
    pub fn ensure(&self) -> Result<()> {
        for dir in [&self.data_dir, &self.jobs_dir, &self.logs_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create directory {}", dir.display()))?;
        }
        Ok(())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn jobs_dir(&self) -> &Path {
        &self.jobs_dir
    }

    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// CSV artifact path for a ticker: `{data_dir}/{ticker}.csv`
    pub fn series_csv(&self, ticker: &str) -> PathBuf {
        self.data_dir.join(format!("{ticker}.csv"))
    }

    /// Manifest path: `{jobs_dir}/data_upload.yml`
    pub fn manifest(&self) -> PathBuf {
        self.jobs_dir.join(MANIFEST_FILENAME)
    }

    /// Log file path: `{logs_dir}/data_download.log`
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir.join(LOG_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_paths_derive_from_dirs() {
        let paths = ExportPaths::new("data", "jobs", "logs");
        assert_eq!(paths.series_csv("WIPRO.NS"), PathBuf::from("data/WIPRO.NS.csv"));
        assert_eq!(paths.manifest(), PathBuf::from("jobs/data_upload.yml"));
        assert_eq!(paths.log_file(), PathBuf::from("logs/data_download.log"));
    }

    #[test]
    fn ensure_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        let paths = ExportPaths::new(root.join("data"), root.join("jobs"), root.join("logs"));

        paths.ensure().unwrap();
        paths.ensure().unwrap();

        assert!(paths.data_dir().is_dir());
        assert!(paths.jobs_dir().is_dir());
        assert!(paths.logs_dir().is_dir());
    }
}
