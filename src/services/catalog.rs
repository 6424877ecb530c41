use crate::models::Listing;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur when loading the listing catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory listing catalog
///
/// Listings are loaded once and shared read-only; cloning the catalog only
/// bumps a reference count.
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    listings: Arc<Vec<Listing>>,
}

impl ListingCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: Arc::new(listings),
        }
    }

    /// Load a catalog from a JSON array of listings
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_json(&bytes)?;
        tracing::info!("Loaded {} listings from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse a catalog from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_slice(bytes)?;
        Ok(Self::new(listings))
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
