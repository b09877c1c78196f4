use serde::Deserialize;

use crate::app::{ApodError, Result};
use crate::domain::{Record, ResultSet};

/// Maximum number of characters of the raw body kept in decode errors.
const EXCERPT_LEN: usize = 200;

/// Error object returned by the APOD service itself, e.g. for a date out of range.
#[derive(Debug, Deserialize)]
struct ServiceError {
    code: serde_json::Value,
    msg: String,
}

/// Error object returned by the api.data.gov gateway, e.g. for a bad API key.
#[derive(Debug, Deserialize)]
struct GatewayError {
    error: GatewayErrorBody,
}

#[derive(Debug, Deserialize)]
struct GatewayErrorBody {
    code: String,
    message: String,
}

/// Decodes APOD response bodies.
///
/// The endpoint answers with a bare object for single-date queries and an
/// array for range and count queries, with nothing in the payload saying
/// which. Decoding tries the object first and the array second.
#[derive(Debug, Clone, Default)]
pub struct ResponseResolver;

impl ResponseResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, body: &[u8]) -> Result<ResultSet> {
        let single = match serde_json::from_slice::<Record>(body) {
            Ok(record) => return Ok(ResultSet::Single(record)),
            Err(e) => e,
        };

        let many = match serde_json::from_slice::<Vec<Record>>(body) {
            Ok(records) => return Ok(ResultSet::Many(records)),
            Err(e) => e,
        };

        if let Some(err) = Self::upstream_error(body) {
            return Err(err);
        }

        Err(ApodError::Decode {
            single,
            many,
            excerpt: excerpt(body),
        })
    }

    fn upstream_error(body: &[u8]) -> Option<ApodError> {
        if let Ok(err) = serde_json::from_slice::<ServiceError>(body) {
            let code = match err.code {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            return Some(ApodError::Upstream {
                code,
                message: err.msg,
            });
        }

        serde_json::from_slice::<GatewayError>(body)
            .ok()
            .map(|err| ApodError::Upstream {
                code: err.error.code,
                message: err.error.message,
            })
    }
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let mut out: String = text.chars().take(EXCERPT_LEN).collect();
    if text.chars().count() > EXCERPT_LEN {
        out.push_str("...");
    }
    out
}
