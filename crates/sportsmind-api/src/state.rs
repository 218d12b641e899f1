use std::sync::Arc;

use tokio::sync::RwLock;

use sportsmind_scoring::catalog::Catalog;
use sportsmind_storage::client;
use sportsmind_storage::error::StorageError;
use sportsmind_storage::repository::Repository;
use sportsmind_storage::store::ObjectStore;

use crate::config::Config;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub repo: Repository,
    pub config: Arc<Config>,
    catalog: Arc<RwLock<Arc<Catalog>>>,
}

impl AppState {
    /// Connect the configured store and seed the catalog if asked to.
    pub async fn build(config: Config) -> eyre::Result<Self> {
        let store = match &config.bucket {
            Some(bucket) => {
                let s3 = match &config.region {
                    Some(region) => client::build_client_with_region(region).await,
                    None => client::build_client().await,
                };
                ObjectStore::s3(s3, bucket.clone())
            }
            None => {
                tracing::warn!("SPORTSMIND_BUCKET not set, using the in-memory store");
                ObjectStore::memory()
            }
        };

        let repo = Repository::new(store);
        if config.seed_catalog {
            repo.seed_questions(Catalog::seed().questions()).await?;
        }

        let catalog = Catalog::new(repo.list_questions().await?);
        tracing::info!(questions = catalog.len(), "question catalog loaded");

        Ok(Self {
            repo,
            config: Arc::new(config),
            catalog: Arc::new(RwLock::new(Arc::new(catalog))),
        })
    }

    /// Snapshot of the question catalog held in memory.
    pub async fn catalog(&self) -> Arc<Catalog> {
        self.catalog.read().await.clone()
    }

    /// Reload the catalog from the store. Called after every question write.
    pub async fn refresh_catalog(&self) -> Result<(), StorageError> {
        let catalog = Catalog::new(self.repo.list_questions().await?);
        *self.catalog.write().await = Arc::new(catalog);
        Ok(())
    }
}
