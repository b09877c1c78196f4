pub mod http_fetcher;
pub mod parallel;

use async_trait::async_trait;

use crate::app::{ApodError, Result};

#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body of a successful response, or [`ApodError::HttpStatus`] for `url`.
    pub fn into_success_body(self, url: &str) -> Result<Vec<u8>> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ApodError::HttpStatus {
                url: url.to_string(),
                status: self.status,
            })
        }
    }
}

/// Issues a GET and hands back status and body.
///
/// Non-success statuses are not errors at this layer: the APOD API puts its
/// error object in 4xx bodies and callers need to read it.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse>;
}
