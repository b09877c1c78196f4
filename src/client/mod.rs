use std::sync::Arc;

use crate::app::{ApodError, Result};
use crate::domain::{ImageAsset, QueryIntent, Record, ResultSet};
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::parallel::{self, ParallelFetcher, DEFAULT_WORKERS};
use crate::fetcher::Fetcher;
use crate::query::QueryBuilder;
use crate::resolver::ResponseResolver;

/// Builds queries, issues them and decodes the answers.
pub struct ApodClient {
    builder: QueryBuilder,
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    parallel: ParallelFetcher,
    resolver: ResponseResolver,
}

impl ApodClient {
    pub fn new(builder: QueryBuilder) -> Self {
        Self::with_fetcher(builder, Arc::new(HttpFetcher::new()), DEFAULT_WORKERS)
    }

    pub fn with_fetcher(
        builder: QueryBuilder,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        workers: usize,
    ) -> Self {
        let parallel = ParallelFetcher::with_workers(fetcher.clone(), workers);
        Self {
            builder,
            fetcher,
            parallel,
            resolver: ResponseResolver::new(),
        }
    }

    pub async fn fetch(&self, intent: &QueryIntent) -> Result<ResultSet> {
        let request = self.builder.build(intent)?;
        tracing::debug!("{} {}", request.method, request.redacted_url());

        let response = self.fetcher.fetch(request.url.as_str()).await?;
        let decoded = self.resolver.decode(&response.body);

        if response.is_success() {
            return decoded;
        }

        // Error statuses normally carry the API's error object; prefer it.
        match decoded {
            Err(err @ ApodError::Upstream { .. }) => Err(err),
            _ => Err(ApodError::HttpStatus {
                url: request.redacted_url(),
                status: response.status,
            }),
        }
    }

    pub async fn fetch_image(&self, record: &Record, prefer_hd: bool) -> Result<ImageAsset> {
        parallel::fetch_image(self.fetcher.as_ref(), record, prefer_hd).await
    }

    /// Download every record's image; one result per record, in order.
    pub async fn fetch_images(
        &self,
        results: &ResultSet,
        prefer_hd: bool,
    ) -> Vec<Result<ImageAsset>> {
        let records: Vec<Record> = results.iter().cloned().collect();
        self.parallel.fetch_images(records, prefer_hd).await
    }
}
