use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::a001_catalog_product::cache::CatalogCache;
use crate::domain::a001_catalog_product::{Catalog, DataLoadError};
use crate::projections::p901_keyword_counts::KeywordStore;
use crate::shared::config::{resolve_path, Config};
use crate::usecases::u501_product_search::{InMemorySessionStore, SessionStore};

static APP_CONTEXT: OnceCell<AppContext> = OnceCell::new();

/// Process-wide services shared by all HTTP handlers
pub struct AppContext {
    pub catalog_path: PathBuf,
    pub catalog_cache: CatalogCache,
    pub keywords: KeywordStore,
    pub sessions: Box<dyn SessionStore>,
}

impl AppContext {
    pub fn new(catalog_path: PathBuf, keywords_path: PathBuf) -> Self {
        Self {
            catalog_path,
            catalog_cache: CatalogCache::new(),
            keywords: KeywordStore::open(keywords_path),
            sessions: Box::new(InMemorySessionStore::new()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut context = Self::new(
            resolve_path(&config.catalog.path),
            resolve_path(&config.keywords.path),
        );
        context.sessions = Box::new(InMemorySessionStore::with_idle_timeout(
            chrono::Duration::minutes(config.sessions.idle_timeout_minutes),
        ));
        context
    }

    /// Current catalog; re-read only when the source file changed
    pub fn catalog(&self) -> Result<Arc<Catalog>, DataLoadError> {
        self.catalog_cache.get_or_load(&self.catalog_path)
    }
}

pub fn initialize_context(context: AppContext) -> anyhow::Result<()> {
    tracing::info!(
        "Catalog source: {}, keyword history: {}",
        context.catalog_path.display(),
        context.keywords.path().display()
    );
    APP_CONTEXT
        .set(context)
        .map_err(|_| anyhow::anyhow!("application context is already initialized"))
}

pub fn get_context() -> &'static AppContext {
    APP_CONTEXT
        .get()
        .expect("Application context has not been initialized")
}
