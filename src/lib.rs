//! # apod
//!
//! A client for NASA's Astronomy Picture of the Day API, and the `afetch`
//! command-line tool built on it.
//!
//! ## Architecture
//!
//! ```text
//! QueryIntent → QueryBuilder → Fetcher → ResponseResolver → ResultSet
//!                                                            ↓
//!                            ImageStore ← ImageAsset ← Record::resolve_image_source
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Today's picture
//! afetch
//!
//! # A given day, saving the HD image
//! afetch -d 2020-01-01 --download --hd
//!
//! # A week, as JSON
//! afetch --start-date 2020-01-01 --end-date 2020-01-07 --json
//!
//! # Five random pictures
//! afetch -c 5
//! ```
//!
//! ## Library
//!
//! ```rust,no_run
//! use apod::client::ApodClient;
//! use apod::domain::QueryIntent;
//! use apod::query::QueryBuilder;
//!
//! # async fn run() -> apod::app::Result<()> {
//! let client = ApodClient::new(QueryBuilder::new("DEMO_KEY"));
//! let results = client.fetch(&QueryIntent::random(3)?).await?;
//! for record in &results {
//!     println!("{}", record.title);
//! }
//! # Ok(())
//! # }
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires configuration, client and
/// image store together for the CLI.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// [`ApodClient`](client::ApodClient): query, decode and image download in one place.
pub mod client;

/// Configuration loaded from `~/.config/apod/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`QueryIntent`](domain::QueryIntent): which entries to ask for
/// - [`Record`](domain::Record): one APOD entry
/// - [`ResultSet`](domain::ResultSet): one record or an ordered list
/// - [`ImageAsset`](domain::ImageAsset): downloaded image bytes
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for GET requests
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`ParallelFetcher`](fetcher::parallel::ParallelFetcher): Concurrent image downloads with semaphore
pub mod fetcher;

/// Request construction for the APOD endpoint.
pub mod query;

/// Decoding of APOD response bodies.
pub mod resolver;

/// Image persistence.
pub mod store;
