//! Retrieval of raw text for the primary and reference inputs.

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MetajoinError, Result};
use super::source::Dataset;

/// Something that yields the raw text of a reference table.
pub trait Fetch {
    /// Which dataset this fetch produces, for error reporting.
    fn dataset(&self) -> Dataset;

    /// Retrieve the full text.
    fn fetch(&self) -> impl Future<Output = Result<String>> + Send;
}

/// A reference table at a URL or local path.
#[derive(Debug, Clone)]
pub enum ReferenceSource {
    /// Fetched with an HTTP GET.
    Http {
        dataset: Dataset,
        url: String,
        client: reqwest::Client,
    },
    /// Read from the local filesystem.
    File { dataset: Dataset, path: PathBuf },
}

impl ReferenceSource {
    /// Interpret `location` as a URL when it has an http(s) scheme, else as a
    /// file path.
    pub fn from_location(dataset: Dataset, location: &str) -> Result<Self> {
        let location = location.trim();
        if location.is_empty() {
            return Err(MetajoinError::InputMissing(format!(
                "no location given for {dataset}"
            )));
        }

        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(ReferenceSource::Http {
                dataset,
                url: location.to_string(),
                client: reqwest::Client::new(),
            })
        } else {
            Ok(ReferenceSource::File {
                dataset,
                path: PathBuf::from(location),
            })
        }
    }

    /// Location as given.
    pub fn location(&self) -> String {
        match self {
            ReferenceSource::Http { url, .. } => url.clone(),
            ReferenceSource::File { path, .. } => path.display().to_string(),
        }
    }
}

impl Fetch for ReferenceSource {
    fn dataset(&self) -> Dataset {
        match self {
            ReferenceSource::Http { dataset, .. } | ReferenceSource::File { dataset, .. } => {
                *dataset
            }
        }
    }

    async fn fetch(&self) -> Result<String> {
        let dataset = self.dataset();
        debug!(%dataset, location = %self.location(), "fetching reference table");

        match self {
            ReferenceSource::Http { url, client, .. } => {
                let response = client.get(url).send().await.map_err(|e| {
                    MetajoinError::FetchFailure {
                        dataset,
                        message: e.to_string(),
                    }
                })?;

                let status = response.status();
                if !status.is_success() {
                    return Err(MetajoinError::FetchFailure {
                        dataset,
                        message: format!("HTTP {status}"),
                    });
                }

                response.text().await.map_err(|e| MetajoinError::FetchFailure {
                    dataset,
                    message: e.to_string(),
                })
            }
            ReferenceSource::File { path, .. } => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| MetajoinError::FetchFailure {
                    dataset,
                    message: format!("{}: {}", path.display(), e),
                }),
        }
    }
}

/// Reference text already held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    dataset: Dataset,
    text: String,
}

impl StaticSource {
    pub fn new(dataset: Dataset, text: impl Into<String>) -> Self {
        Self {
            dataset,
            text: text.into(),
        }
    }
}

impl Fetch for StaticSource {
    fn dataset(&self) -> Dataset {
        self.dataset
    }

    async fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Read the user-supplied primary file.
pub fn read_primary(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| MetajoinError::ReadFailure {
        path: path.to_path_buf(),
        source: e,
    })
}
