use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::models::Region;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read region file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse region file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Static list of region codes and display titles, read from a JSON file.
///
/// The file is re-read on every lookup so edits are picked up without a restart.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    path: PathBuf,
}

impl RegionCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the region file
    pub async fn try_load(&self) -> Result<Vec<Region>, CatalogError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the region file, logging and returning an empty list on failure
    pub async fn load(&self) -> Vec<Region> {
        match self.try_load().await {
            Ok(regions) => regions,
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        }
    }

    /// Display title for an exact region code match, empty when unknown
    pub async fn title_for(&self, region_code: &str) -> String {
        find_title(&self.load().await, region_code)
    }
}

pub fn find_title(regions: &[Region], region_code: &str) -> String {
    regions
        .iter()
        .find(|r| r.id == region_code)
        .map(|r| r.title.clone())
        .unwrap_or_default()
}
