use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::QuizContent;
use reqwest::Client;
use thiserror::Error;

use crate::document::{ContentDocument, ContentValidationError};

/// Errors surfaced while loading quiz content. None of them are retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetching {url} returned status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("content document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ContentValidationError),
}

fn parse(json: &str) -> Result<QuizContent, ContentError> {
    Ok(ContentDocument::from_json(json)?.into_content()?)
}

/// Where quiz content comes from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Load and validate the content document.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the document cannot be read or is invalid.
    async fn load(&self) -> Result<QuizContent, ContentError>;

    /// Human-readable location for logs.
    fn describe(&self) -> String;
}

/// Reads the document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn load(&self) -> Result<QuizContent, ContentError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ContentError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse(&json)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches the document over HTTP.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: Client,
    url: String,
}

impl HttpContentSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    #[must_use]
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn load(&self) -> Result<QuizContent, ContentError> {
        let http_err = |source| ContentError::Http {
            url: self.url.clone(),
            source,
        };
        let response = self.client.get(&self.url).send().await.map_err(http_err)?;
        if !response.status().is_success() {
            return Err(ContentError::HttpStatus {
                url: self.url.clone(),
                status: response.status(),
            });
        }
        let json = response.text().await.map_err(http_err)?;
        parse(&json)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Document text already in memory, e.g. from `include_str!`.
#[derive(Debug, Clone)]
pub struct StaticContentSource {
    json: String,
}

impl StaticContentSource {
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn load(&self) -> Result<QuizContent, ContentError> {
        parse(&self.json)
    }

    fn describe(&self) -> String {
        "<static>".into()
    }
}

/// Pick a source for `location`: `http(s)://` URLs are fetched, anything else
/// is read as a file path.
#[must_use]
pub fn source_for(location: &str) -> Arc<dyn ContentSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(HttpContentSource::new(location))
    } else {
        Arc::new(FileContentSource::new(location))
    }
}

/// Load content once at startup and share it read-only.
///
/// # Errors
///
/// Propagates the source's `ContentError`.
pub async fn load_content(source: &dyn ContentSource) -> Result<Arc<QuizContent>, ContentError> {
    match source.load().await {
        Ok(content) => {
            tracing::info!(
                source = %source.describe(),
                levels = content.levels().len(),
                "quiz content loaded"
            );
            Ok(Arc::new(content))
        }
        Err(err) => {
            tracing::error!(
                source = %source.describe(),
                error = %err,
                "failed to load quiz content"
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_for_picks_http_for_urls() {
        assert_eq!(
            source_for("https://example.com/questions.json").describe(),
            "https://example.com/questions.json"
        );
        assert_eq!(source_for("questions.json").describe(), "questions.json");
    }

    #[tokio::test]
    async fn static_source_reports_malformed_json() {
        let err = StaticContentSource::new("{ not json").load().await.unwrap_err();
        assert!(matches!(err, ContentError::Malformed(_)));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = FileContentSource::new("/definitely/not/here.json")
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
