pub mod html;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
    #[error("no input: provide a filename, URL, or pipe text to stdin")]
    NoInput,
    #[error("failed to fetch URL: {0}")]
    Fetch(String),
    #[error("HTTP error: {0}")]
    HttpStatus(String),
    #[error("failed to extract content from {0}")]
    Extract(String),
    #[error("no words found in input")]
    NoWords,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    File(PathBuf),
    Url(String),
    Stdin,
}

impl SourceKind {
    /// Only local files carry a resumable position.
    pub fn bookmark_path(&self) -> Option<&PathBuf> {
        match self {
            SourceKind::File(path) => Some(path),
            SourceKind::Url(_) | SourceKind::Stdin => None,
        }
    }
}

#[derive(Debug)]
pub struct Source {
    pub kind: SourceKind,
    pub text: String,
}

pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Resolve the positional argument: a URL, a file path, or piped stdin when absent.
pub fn read_source(input: Option<&str>) -> Result<Source, SourceError> {
    match input {
        Some(url) if is_url(url) => Ok(Source {
            kind: SourceKind::Url(url.to_string()),
            text: fetch_readable(url)?,
        }),
        Some(path) => {
            let path = PathBuf::from(path);
            let bytes = fs::read(&path).map_err(|source| SourceError::Open {
                path: path.clone(),
                source,
            })?;
            Ok(Source {
                kind: SourceKind::File(path),
                text: String::from_utf8_lossy(&bytes).into_owned(),
            })
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(SourceError::NoInput);
            }
            let mut bytes = Vec::new();
            stdin.lock().read_to_end(&mut bytes)?;
            Ok(Source {
                kind: SourceKind::Stdin,
                text: String::from_utf8_lossy(&bytes).into_owned(),
            })
        }
    }
}

fn fetch_readable(url: &str) -> Result<String, SourceError> {
    let body = fetch_url(url)?;
    let text = html::extract_readable_text(&body);
    if text.trim().is_empty() {
        return Err(SourceError::Extract(url.to_string()));
    }
    Ok(text)
}

#[cfg(feature = "network")]
fn fetch_url(url: &str) -> Result<String, SourceError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(|e| SourceError::Fetch(e.to_string()))?;
    let response = client
        .get(url)
        .send()
        .map_err(|e| SourceError::Fetch(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::HttpStatus(status.to_string()));
    }
    response.text().map_err(|e| SourceError::Fetch(e.to_string()))
}

#[cfg(not(feature = "network"))]
fn fetch_url(_url: &str) -> Result<String, SourceError> {
    Err(SourceError::Fetch(
        "built without network support".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_url() {
        assert!(is_url("http://example.com"));
        assert!(is_url("https://example.com/a"));
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url("notes/https.txt"));
    }

    #[test]
    fn test_read_file_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.txt");
        fs::write(&path, "call me ishmael").unwrap();

        let source = read_source(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(source.text, "call me ishmael");
        assert_eq!(source.kind, SourceKind::File(path.clone()));
        assert_eq!(source.kind.bookmark_path(), Some(&path));
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");
        let err = read_source(Some(path.to_str().unwrap())).unwrap_err();
        assert!(matches!(err, SourceError::Open { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_non_file_sources_have_no_bookmark() {
        assert!(SourceKind::Stdin.bookmark_path().is_none());
        assert!(
            SourceKind::Url("https://example.com".into())
                .bookmark_path()
                .is_none()
        );
    }
}
