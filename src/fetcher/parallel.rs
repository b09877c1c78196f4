use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::app::{ApodError, Result};
use crate::domain::{ImageAsset, Record};
use crate::fetcher::Fetcher;

pub const DEFAULT_WORKERS: usize = 4;

/// Downloads the images of many records concurrently, bounded by a semaphore.
pub struct ParallelFetcher {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    semaphore: Arc<Semaphore>,
}

impl ParallelFetcher {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self::with_workers(fetcher, DEFAULT_WORKERS)
    }

    pub fn with_workers(fetcher: Arc<dyn Fetcher + Send + Sync>, workers: usize) -> Self {
        Self {
            fetcher,
            semaphore: Arc::new(Semaphore::new(workers.max(1))),
        }
    }

    /// One result per record, in the same order as `records`.
    pub async fn fetch_images(
        &self,
        records: Vec<Record>,
        prefer_hd: bool,
    ) -> Vec<Result<ImageAsset>> {
        let mut handles = Vec::with_capacity(records.len());

        for record in records {
            let fetcher = self.fetcher.clone();
            let semaphore = self.semaphore.clone();

            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await.expect("Semaphore closed");
                fetch_image(fetcher.as_ref(), &record, prefer_hd).await
            }));
        }

        join_all(handles)
            .await
            .into_iter()
            .map(|joined| match joined {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("Task join error: {}", e);
                    Err(ApodError::Io(std::io::Error::other(e)))
                }
            })
            .collect()
    }
}

/// Resolve the image URL of `record` and download it.
pub async fn fetch_image(
    fetcher: &(dyn Fetcher + Send + Sync),
    record: &Record,
    prefer_hd: bool,
) -> Result<ImageAsset> {
    let source = record.resolve_image_source(prefer_hd)?;
    let bytes = fetcher.fetch(source).await?.into_success_body(source)?;
    Ok(ImageAsset::new(source, bytes))
}
