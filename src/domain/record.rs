use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::{ApodError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    Image,
    Video,
    Other(String),
}

impl MediaType {
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Other(s) => s,
        }
    }
}

impl From<String> for MediaType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            _ => MediaType::Other(s),
        }
    }
}

impl From<MediaType> for String {
    fn from(m: MediaType) -> Self {
        m.as_str().to_string()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One APOD entry as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub date: String,
    pub title: String,
    pub explanation: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub service_version: String,
    /// Standard-definition media URL.
    #[serde(default)]
    pub url: String,
    /// High-definition image URL; absent for videos and some older entries.
    #[serde(default)]
    pub hdurl: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    /// Only present for videos when thumbnails were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Record {
    pub fn is_image(&self) -> bool {
        self.media_type == MediaType::Image
    }

    /// Pick the URL to download the still image from.
    ///
    /// With `prefer_hd` the HD variant is used when the entry has one,
    /// otherwise the standard URL.
    pub fn resolve_image_source(&self, prefer_hd: bool) -> Result<&str> {
        if !self.is_image() {
            return Err(ApodError::NotAnImage {
                date: self.date.clone(),
                media_type: self.media_type.to_string(),
            });
        }

        if prefer_hd && !self.hdurl.is_empty() {
            Ok(&self.hdurl)
        } else {
            Ok(&self.url)
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.display_title())?;
        writeln!(f, "Date: {}", self.date)?;
        if let Some(copyright) = &self.copyright {
            writeln!(f, "Copyright: {}", copyright.trim())?;
        }
        writeln!(f, "Explanation: {}", self.explanation)?;
        write!(f, "URL: {}", self.url)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn image_record(hdurl: &str) -> Record {
        Record {
            date: "2020-01-01".into(),
            title: "Betelgeuse Imagined".into(),
            explanation: "A red supergiant.".into(),
            media_type: MediaType::Image,
            service_version: "v1".into(),
            url: "https://apod.nasa.gov/apod/image/2001/Betelgeuse_small.jpg".into(),
            hdurl: hdurl.into(),
            copyright: None,
            thumbnail_url: None,
        }
    }

    #[test]
    fn test_prefers_hd_when_available() {
        let record = image_record("https://apod.nasa.gov/apod/image/2001/Betelgeuse.jpg");
        assert_eq!(
            record.resolve_image_source(true).unwrap(),
            "https://apod.nasa.gov/apod/image/2001/Betelgeuse.jpg"
        );
    }

    #[test]
    fn test_hd_falls_back_to_standard() {
        let record = image_record("");
        assert_eq!(
            record.resolve_image_source(true).unwrap(),
            "https://apod.nasa.gov/apod/image/2001/Betelgeuse_small.jpg"
        );
    }

    #[test]
    fn test_standard_when_hd_not_wanted() {
        let record = image_record("https://apod.nasa.gov/apod/image/2001/Betelgeuse.jpg");
        assert_eq!(
            record.resolve_image_source(false).unwrap(),
            "https://apod.nasa.gov/apod/image/2001/Betelgeuse_small.jpg"
        );
    }

    #[test]
    fn test_video_is_not_an_image() {
        let mut record = image_record("");
        record.media_type = MediaType::Video;
        let err = record.resolve_image_source(true).unwrap_err();
        match err {
            ApodError::NotAnImage { date, media_type } => {
                assert_eq!(date, "2020-01-01");
                assert_eq!(media_type, "video");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_media_type_parsing() {
        assert_eq!(MediaType::from("image".to_string()), MediaType::Image);
        assert_eq!(MediaType::from("video".to_string()), MediaType::Video);
        assert_eq!(
            MediaType::from("other".to_string()),
            MediaType::Other("other".into())
        );
    }

    #[test]
    fn test_display() {
        let record = image_record("");
        let text = record.to_string();
        assert!(text.starts_with("Title: Betelgeuse Imagined\nDate: 2020-01-01\n"));
        assert!(text.ends_with("URL: https://apod.nasa.gov/apod/image/2001/Betelgeuse_small.jpg"));
    }

    #[test]
    fn test_display_title_without_title() {
        let mut record = image_record("");
        record.title = "  ".into();
        assert_eq!(record.display_title(), "(Untitled)");
    }
}
