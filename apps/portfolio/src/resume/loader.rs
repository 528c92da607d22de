use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::resume::model::ResumeDocument;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not contain a JSON object", .path.display())]
    Shape { path: PathBuf },
}

/// Reads the resume document from a fixed path. One read and one parse per
/// call; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ResumeLoader {
    path: PathBuf,
}

impl ResumeLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ResumeLoader { path: path.into() }
    }

    /// Reads and parses the file as untyped JSON, exactly as stored.
    pub async fn load_raw(&self) -> Result<Value, LoadError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Read {
                path: self.path.clone(),
                source,
            })?;

        let value = serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!("Loaded resume data from {}", self.path.display());
        Ok(value)
    }

    /// Reads the file into the typed model. The root must be an object.
    pub async fn load_document(&self) -> Result<ResumeDocument, LoadError> {
        let value = self.load_raw().await?;
        if !value.is_object() {
            return Err(LoadError::Shape {
                path: self.path.clone(),
            });
        }

        serde_json::from_value(value).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Never fails: any load error is logged and replaced by the fallback document.
    pub async fn load_or_fallback(&self) -> ResumeDocument {
        match self.load_document().await {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Using fallback resume: {e}");
                ResumeDocument::fallback()
            }
        }
    }
}
