use std::sync::Arc;
use std::time::Duration;

use crate::app::error::Result;
use crate::client::ApodClient;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::query::QueryBuilder;
use crate::store::FsStore;

pub struct AppContext {
    pub config: Config,
    pub client: ApodClient,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::with_timeout(
            Duration::from_secs(config.timeout_secs),
        ));
        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let builder = QueryBuilder::new(config.api_key.clone());
        let client = ApodClient::with_fetcher(builder, fetcher, config.workers);
        Self::with_client(config, client)
    }

    pub fn with_client(config: Config, client: ApodClient) -> Self {
        Self { config, client }
    }

    /// Image store for the configured download directory, or the current directory.
    pub fn image_store(&self) -> Result<FsStore> {
        match &self.config.download_dir {
            Some(dir) => FsStore::new(dir),
            None => FsStore::current_dir(),
        }
    }
}
