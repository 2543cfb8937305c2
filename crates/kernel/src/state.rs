//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::projection::Projector;
use crate::store::{ContentStore, FileUrlGenerator, MemoryStore};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Content source. Immutable once loaded.
    store: Arc<dyn ContentStore>,

    /// `Cache-Control: max-age` for projection responses.
    cache_max_age: u32,

    /// Bearer token required on projection routes, if any.
    api_token: Option<String>,
}

impl AppState {
    /// Load the content fixtures named by the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let urls = FileUrlGenerator::new(&config.site_url, &config.files_url)
            .context("invalid SITE_URL")?;
        let store = MemoryStore::load(&config.content_fixtures, urls)
            .context("failed to load content fixtures")?;

        info!(
            nodes = store.node_count().unwrap_or_default(),
            "Content store ready"
        );

        Ok(Self::from_store(
            Arc::new(store),
            config.cache_max_age,
            config.api_token.clone(),
        ))
    }

    /// Build state around an existing store.
    pub fn from_store(
        store: Arc<dyn ContentStore>,
        cache_max_age: u32,
        api_token: Option<String>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                cache_max_age,
                api_token,
            }),
        }
    }

    pub fn store(&self) -> &dyn ContentStore {
        self.inner.store.as_ref()
    }

    pub fn projector(&self) -> Projector<'_> {
        Projector::new(self.store())
    }

    pub fn cache_max_age(&self) -> u32 {
        self.inner.cache_max_age
    }

    pub fn api_token(&self) -> Option<&str> {
        self.inner.api_token.as_deref()
    }
}
