//! File-reading collaborator producing outcomes
//!
//! Wraps the fallible standard-library read into an [`Outcome`], the typical
//! producer shape: the success variant carries the file contents, the failure
//! variant carries the underlying I/O error with its path.

use outcome_core::{err, ok, Outcome};
use std::fs;
use std::path::{Path, PathBuf};

/// Failure while reading an input file
#[derive(Debug, thiserror::Error)]
#[error("failed to read '{}': {source}", path.display())]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Read a file to a string, capturing either its contents or the I/O
/// failure.
pub fn read_file(path: &Path) -> Outcome<String, ReadError> {
    match fs::read_to_string(path) {
        Ok(contents) => ok(contents),
        Err(source) => err(ReadError {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outcome_core::match_outcome;
    use std::io::Write;

    #[test]
    fn existing_file_yields_its_exact_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello outcome\n").unwrap();

        let outcome = read_file(file.path());
        assert!(outcome.is_ok());
        assert_eq!(outcome.ok_value(), "hello outcome\n");
    }

    #[test]
    fn missing_file_yields_the_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let outcome = read_file(&missing);
        assert!(outcome.is_err());
        let error = outcome.err_value();
        assert_eq!(error.source.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(error.path, missing);
    }

    #[test]
    fn dispatch_routes_both_paths() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"contents").unwrap();

        let on_success = match_outcome(
            read_file(file.path()),
            |contents| contents,
            |e| panic!("unexpected failure: {e}"),
        );
        assert_eq!(on_success, "contents");

        let dir = tempfile::tempdir().unwrap();
        let routed = match_outcome(
            read_file(&dir.path().join("nope.txt")),
            |_| "ok".to_string(),
            |e| e.to_string(),
        );
        assert!(routed.contains("failed to read"));
    }
}
