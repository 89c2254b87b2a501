use std::fmt::Debug;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::{ReportArtifact, ReportError};

/// Shared location for finished reports.
pub trait ReportStore: Debug + Send + Sync {
    fn store(&self, pdf: &[u8]) -> Result<ReportArtifact, ReportError>;
    fn load(&self, file_name: &str) -> Result<Vec<u8>, ReportError>;
}

/// Writes each report under a fresh UUID so concurrent sessions never share a file.
#[derive(Debug, Clone)]
pub struct FsReportStore {
    directory: PathBuf,
    url_prefix: String,
}

impl FsReportStore {
    pub fn new(directory: impl Into<PathBuf>, url_prefix: &str) -> Self {
        Self {
            directory: directory.into(),
            url_prefix: url_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.url_prefix, file_name)
    }
}

impl ReportStore for FsReportStore {
    fn store(&self, pdf: &[u8]) -> Result<ReportArtifact, ReportError> {
        fs::create_dir_all(&self.directory).map_err(|source| ReportError::Directory {
            path: self.directory.clone(),
            source,
        })?;

        let file_name = format!("{}.pdf", Uuid::new_v4().simple());
        let path = self.directory.join(&file_name);
        let write_err = |source| ReportError::Write {
            path: path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(write_err)?;
        file.write_all(pdf).map_err(write_err)?;

        tracing::info!(report = %file_name, bytes = pdf.len(), "report stored");

        Ok(ReportArtifact {
            url: self.url_for(&file_name),
            file_name,
        })
    }

    fn load(&self, file_name: &str) -> Result<Vec<u8>, ReportError> {
        if !is_report_file_name(file_name) {
            return Err(ReportError::InvalidName(file_name.to_string()));
        }

        match fs::read(self.directory.join(file_name)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(ReportError::NotFound(file_name.to_string()))
            }
            Err(source) => Err(ReportError::Read {
                path: self.directory.join(file_name),
                source,
            }),
        }
    }
}

/// Plain `<alphanumeric>.pdf` names only; anything else could escape the directory.
fn is_report_file_name(file_name: &str) -> bool {
    match file_name.strip_suffix(".pdf") {
        Some(stem) => !stem.is_empty() && stem.chars().all(|ch| ch.is_ascii_alphanumeric()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_reports_under_unique_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsReportStore::new(dir.path().join("reports"), "/reports/");

        let first = store.store(b"%PDF-first").expect("first stored");
        let second = store.store(b"%PDF-second").expect("second stored");

        assert_ne!(first.file_name, second.file_name);
        assert_eq!(first.url, format!("/reports/{}", first.file_name));
        assert_eq!(store.load(&first.file_name).expect("loads"), b"%PDF-first");
    }

    #[test]
    fn rejects_path_traversal_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsReportStore::new(dir.path(), "/reports");

        for name in ["../secret.pdf", "a/b.pdf", "report.txt", ".pdf"] {
            assert!(matches!(
                store.load(name),
                Err(ReportError::InvalidName(_))
            ));
        }
        assert!(matches!(
            store.load("deadbeef.pdf"),
            Err(ReportError::NotFound(_))
        ));
    }

    #[test]
    fn directory_failure_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, b"not a directory").expect("blocker written");
        let store = FsReportStore::new(blocker.join("reports"), "/reports");

        assert!(matches!(
            store.store(b"%PDF"),
            Err(ReportError::Directory { .. })
        ));
    }
}
