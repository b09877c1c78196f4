use chrono::NaiveDate;

use crate::app::{ApodError, Result};

/// Date format accepted and emitted by the APOD API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which APOD entries a query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// No date parameter; the API answers with today's entry.
    #[default]
    Today,
    ByDate(NaiveDate),
    ByRange { start: NaiveDate, end: NaiveDate },
    ByRandomCount(u32),
}

/// A query mode plus the modifiers that apply to every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryIntent {
    pub mode: QueryMode,
    /// Ask the API for video thumbnails (`thumbs=True`).
    pub thumbs: bool,
}

impl QueryIntent {
    pub fn today() -> Self {
        Self::default()
    }

    pub fn by_date(date: NaiveDate) -> Self {
        Self {
            mode: QueryMode::ByDate(date),
            thumbs: false,
        }
    }

    pub fn by_range(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ApodError::InvalidIntent(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self {
            mode: QueryMode::ByRange { start, end },
            thumbs: false,
        })
    }

    pub fn random(count: u32) -> Result<Self> {
        if count == 0 {
            return Err(ApodError::InvalidIntent("count must be at least 1".into()));
        }
        Ok(Self {
            mode: QueryMode::ByRandomCount(count),
            thumbs: false,
        })
    }

    pub fn with_thumbs(mut self, thumbs: bool) -> Self {
        self.thumbs = thumbs;
        self
    }
}

/// Loose, independently optional fields as a caller (e.g. the CLI) collects them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentFields {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub count: Option<u32>,
    pub thumbs: bool,
}

impl IntentFields {
    /// Collapse the fields into exactly one mode, rejecting any mix of modes.
    pub fn into_intent(self) -> Result<QueryIntent> {
        let intent = match (self.date, self.start_date, self.end_date, self.count) {
            (None, None, None, None) => QueryIntent::today(),
            (Some(date), None, None, None) => QueryIntent::by_date(date),
            (None, Some(start), Some(end), None) => QueryIntent::by_range(start, end)?,
            (None, None, None, Some(count)) => QueryIntent::random(count)?,
            (None, Some(_), None, None) | (None, None, Some(_), None) => {
                return Err(ApodError::InvalidIntent(
                    "a date range needs both a start and an end date".into(),
                ));
            }
            _ => {
                return Err(ApodError::InvalidIntent(
                    "date, date range and count cannot be combined".into(),
                ));
            }
        };

        Ok(intent.with_thumbs(self.thumbs))
    }
}

/// Parse a `YYYY-MM-DD` date. Month and day must be zero-padded.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    let bytes = trimmed.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_formed {
        return Err(ApodError::InvalidDate(s.to_string()));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ApodError::InvalidDate(s.to_string()))
}
