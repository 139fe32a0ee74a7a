//! Sources of new rounds.
//!
//! # Implementations
//! - `HttpLoader`: one blocking GET per round against the question API
//! - `FileLoader`: questions from a local JSON file, handed out in order

use crate::error::{GameError, Result};
use crate::payload::{RawPayload, adapt, parse_payload};
use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CACHE_CONTROL, USER_AGENT};
use serde_json::Value;
use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Public Family 100 question endpoint.
pub const DEFAULT_API_URL: &str = "https://api.siputzx.my.id/api/games/family100";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches the payload for one round.
///
/// Any failure is reported as a single `GameError`; no partial payload is
/// ever returned.
pub trait QuestionLoader {
    fn load(&self) -> Result<RawPayload>;
}

impl<L: QuestionLoader + ?Sized> QuestionLoader for &L {
    fn load(&self) -> Result<RawPayload> {
        (**self).load()
    }
}

impl<L: QuestionLoader + ?Sized> QuestionLoader for Box<L> {
    fn load(&self) -> Result<RawPayload> {
        (**self).load()
    }
}

/// Loader backed by the question HTTP API.
pub struct HttpLoader {
    client: Client,
    url: String,
}

impl HttpLoader {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GameError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl QuestionLoader for HttpLoader {
    fn load(&self) -> Result<RawPayload> {
        debug!("Fetching question from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-store")
            .header(USER_AGENT, concat!("family100/", env!("CARGO_PKG_VERSION")))
            .send()
            .map_err(|e| {
                warn!("Question request failed: {e}");
                GameError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Question API answered HTTP {}", status.as_u16());
            return Err(GameError::Transport(format!("HTTP {}", status.as_u16())));
        }

        let body = response
            .text()
            .map_err(|e| GameError::Transport(format!("failed to read response body: {e}")))?;
        let payload = parse_payload(&body)?;
        info!(
            "Fetched question with {} raw answers",
            payload.answers.len()
        );
        Ok(payload)
    }
}

/// Loader that plays through questions stored in a local JSON file.
///
/// The file holds either one payload object or an array of them, in any
/// shape the HTTP API accepts. Questions are served in order and wrap around.
#[derive(Debug)]
pub struct FileLoader {
    payloads: Vec<Result<RawPayload>>,
    next: Cell<usize>,
}

impl FileLoader {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let body = fs::read_to_string(path).map_err(|e| {
            GameError::Transport(format!("failed to read {}: {e}", path.display()))
        })?;
        let loader = Self::from_json(&body)?;
        info!(
            "Loaded {} questions from {}",
            loader.payloads.len(),
            path.display()
        );
        Ok(loader)
    }

    /// Parses questions from JSON text.
    ///
    /// Individual entries that fail to adapt are kept as errors and reported
    /// when their turn comes, so one bad entry does not sink the whole file.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| GameError::Transport(format!("malformed questions file: {e}")))?;

        let payloads: Vec<Result<RawPayload>> = match &value {
            Value::Array(entries) => entries.iter().map(adapt).collect(),
            other => vec![adapt(other)],
        };
        if payloads.is_empty() {
            return Err(GameError::InvalidPayload(
                "questions file contains no entries".to_string(),
            ));
        }

        Ok(Self {
            payloads,
            next: Cell::new(0),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

impl QuestionLoader for FileLoader {
    fn load(&self) -> Result<RawPayload> {
        let index = self.next.get();
        self.next.set((index + 1) % self.payloads.len());
        debug!("Serving question {} of {}", index + 1, self.payloads.len());
        self.payloads[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_loader_single_object() {
        let loader = FileLoader::from_json(r#"{"soal":"Q","jawaban":["a"]}"#).unwrap();
        assert_eq!(loader.len(), 1);
        let payload = loader.load().unwrap();
        assert_eq!(payload.question, "Q");
        // wraps around
        assert_eq!(loader.load().unwrap(), payload);
    }

    #[test]
    fn test_file_loader_serves_in_order() {
        let body = r#"[
            {"soal":"first","jawaban":["a"]},
            {"data":{"question":"second","answers":["b"]}}
        ]"#;
        let loader = FileLoader::from_json(body).unwrap();
        assert_eq!(loader.load().unwrap().question, "first");
        assert_eq!(loader.load().unwrap().question, "second");
        assert_eq!(loader.load().unwrap().question, "first");
    }

    #[test]
    fn test_file_loader_bad_entry_reported_on_its_turn() {
        let body = r#"[{"soal":"ok","jawaban":["a"]}, {"soal":"bad","jawaban":[1]}]"#;
        let loader = FileLoader::from_json(body).unwrap();
        assert!(loader.load().is_ok());
        assert!(matches!(loader.load(), Err(GameError::Transport(_))));
    }

    #[test]
    fn test_file_loader_empty_array_rejected() {
        assert!(matches!(
            FileLoader::from_json("[]"),
            Err(GameError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_file_loader_missing_file() {
        let path = std::env::temp_dir().join("family100_definitely_missing.json");
        assert!(matches!(
            FileLoader::from_file(&path),
            Err(GameError::Transport(_))
        ));
    }

    #[test]
    fn test_file_loader_from_file() {
        let path = std::env::temp_dir().join("family100_loader_from_file.json");
        fs::write(&path, r#"[{"soal":"Q","jawaban":["a","b"]}]"#).unwrap();
        let loader = FileLoader::from_file(&path).unwrap();
        assert_eq!(loader.load().unwrap().answers, vec!["a", "b"]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_http_loader_unreachable_host_is_transport_error() {
        let loader = HttpLoader::new("http://127.0.0.1:9/family100", Duration::from_millis(500)).unwrap();
        assert_eq!(loader.url(), "http://127.0.0.1:9/family100");
        assert!(matches!(loader.load(), Err(GameError::Transport(_))));
    }

    #[test]
    fn test_loader_through_reference_and_box() {
        let loader = FileLoader::from_json(r#"{"soal":"Q","jawaban":["a"]}"#).unwrap();
        let by_ref: &dyn QuestionLoader = &loader;
        assert!(by_ref.load().is_ok());
        let boxed: Box<dyn QuestionLoader> = Box::new(loader);
        assert!(boxed.load().is_ok());
    }
}
