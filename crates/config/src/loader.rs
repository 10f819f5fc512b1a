//! Retrieve and parse carousel configuration documents.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::{CarouselConfig, Error, Result};

/// Parse a configuration document. `location` is only used for error reporting.
pub fn load_from_str(text: &str, location: Option<&str>) -> Result<CarouselConfig> {
    let location = location.unwrap_or("<inline>");
    serde_json::from_str(text).map_err(|e| Error::parse(location, text, &e))
}

/// Somewhere a configuration document can be loaded from.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Human-readable location used in logs and errors.
    fn location(&self) -> &str;

    /// Retrieve and parse the document.
    async fn load(&self) -> Result<CarouselConfig>;
}

/// Fetch the document with an HTTP GET. No cookies or credentials are sent.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Use an existing client (connection pool, timeouts) for the request.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl ConfigSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn load(&self) -> Result<CarouselConfig> {
        let fetch_err = |e: reqwest::Error| Error::Fetch {
            location: self.url.clone(),
            message: e.to_string(),
        };
        let resp = self.client.get(&self.url).send().await.map_err(fetch_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                location: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let body = resp.text().await.map_err(fetch_err)?;
        load_from_str(&body, Some(&self.url))
    }
}

/// Read the document from the local filesystem.
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait]
impl ConfigSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn load(&self) -> Result<CarouselConfig> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::Fetch {
                location: self.location.clone(),
                message: e.to_string(),
            })?;
        load_from_str(&text, Some(&self.location))
    }
}

/// A document held in memory, for embedding and tests.
pub struct StaticSource {
    location: String,
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            location: "<static>".to_string(),
            text: text.into(),
        }
    }

    /// Override the location reported in errors.
    pub fn named(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

#[async_trait]
impl ConfigSource for StaticSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn load(&self) -> Result<CarouselConfig> {
        load_from_str(&self.text, Some(&self.location))
    }
}

/// Pick a source for `location`: `http://` and `https://` go over the network,
/// anything else is a filesystem path.
pub fn source_for(location: &str) -> Box<dyn ConfigSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Load from `source`, tracing the outcome.
pub async fn load(source: &dyn ConfigSource) -> Result<CarouselConfig> {
    let cfg = source.load().await?;
    debug!(
        location = source.location(),
        slides = cfg.slide_count(),
        autoplay = cfg.autoplay,
        "config_loaded"
    );
    Ok(cfg)
}
