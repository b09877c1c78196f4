//! Turns a [`QueryIntent`] into a request against the APOD endpoint.
//!
//! Building is pure: no network I/O happens here. The API key is held by the
//! builder instead of living in process-wide state.

use url::Url;

use crate::app::{ApodError, Result};
use crate::domain::{parse_date, IntentFields, QueryIntent, QueryMode, DATE_FORMAT};

pub const APOD_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

/// Public key accepted by api.nasa.gov with a low rate limit.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// A fully formed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: &'static str,
    pub url: Url,
}

impl RequestDescriptor {
    pub fn query_string(&self) -> &str {
        self.url.query().unwrap_or("")
    }

    /// The URL with the API key masked, for logs and error messages.
    pub fn redacted_url(&self) -> String {
        redact_api_key(&self.url)
    }

    /// Recover the intent this request was built from.
    pub fn parse_intent(&self) -> Result<QueryIntent> {
        let mut fields = IntentFields::default();

        for (key, value) in self.url.query_pairs() {
            match &*key {
                "date" => fields.date = Some(parse_date(&value)?),
                "start_date" => fields.start_date = Some(parse_date(&value)?),
                "end_date" => fields.end_date = Some(parse_date(&value)?),
                "count" => {
                    let count = value.parse().map_err(|_| {
                        ApodError::InvalidIntent(format!("invalid count '{}'", value))
                    })?;
                    fields.count = Some(count);
                }
                "thumbs" => fields.thumbs = value.eq_ignore_ascii_case("true"),
                _ => {}
            }
        }

        fields.into_intent()
    }
}

/// Render `url` with any `api_key` value replaced by `***`.
pub fn redact_api_key(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "api_key") {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    endpoint: Url,
    api_key: String,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(DEMO_API_KEY)
    }
}

impl QueryBuilder {
    /// Builder against the public endpoint. An empty key falls back to [`DEMO_API_KEY`].
    pub fn new(api_key: impl Into<String>) -> Self {
        let endpoint = Url::parse(APOD_ENDPOINT).expect("APOD_ENDPOINT is a valid URL");
        Self::from_parts(endpoint, api_key.into())
    }

    /// Builder against another endpoint, e.g. a local mock server.
    pub fn with_endpoint(endpoint: &str, api_key: impl Into<String>) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        Ok(Self::from_parts(endpoint, api_key.into()))
    }

    fn from_parts(endpoint: Url, api_key: String) -> Self {
        let api_key = if api_key.trim().is_empty() {
            DEMO_API_KEY.to_string()
        } else {
            api_key
        };
        Self { endpoint, api_key }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn build(&self, intent: &QueryIntent) -> Result<RequestDescriptor> {
        let mut url = self.endpoint.clone();

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.api_key);

            match intent.mode {
                QueryMode::Today => {}
                QueryMode::ByDate(date) => {
                    query.append_pair("date", &date.format(DATE_FORMAT).to_string());
                }
                QueryMode::ByRange { start, end } => {
                    if start > end {
                        return Err(ApodError::InvalidIntent(format!(
                            "start date {} is after end date {}",
                            start, end
                        )));
                    }
                    query.append_pair("start_date", &start.format(DATE_FORMAT).to_string());
                    query.append_pair("end_date", &end.format(DATE_FORMAT).to_string());
                }
                QueryMode::ByRandomCount(0) => {
                    return Err(ApodError::InvalidIntent("count must be at least 1".into()));
                }
                QueryMode::ByRandomCount(count) => {
                    query.append_pair("count", &count.to_string());
                }
            }

            // The API only understands the capitalized literal.
            if intent.thumbs {
                query.append_pair("thumbs", "True");
            }
        }

        Ok(RequestDescriptor { method: "GET", url })
    }
}
