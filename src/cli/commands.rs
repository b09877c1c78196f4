use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app::{AppContext, ApodError, Result};
use crate::domain::{ImageAsset, QueryIntent, ResultSet};
use crate::store::{image_file_name, unique_image_file_name, FsStore, ImageStore};

pub const NO_RESULTS: &str = "No APOD for this query";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub saved: Vec<PathBuf>,
    pub skipped: usize,
    pub errors: usize,
}

/// Fetch the records for `intent` and print them to `out`.
pub async fn fetch<W: Write>(
    ctx: &AppContext,
    intent: &QueryIntent,
    json: bool,
    out: &mut W,
) -> Result<ResultSet> {
    let results = ctx.client.fetch(intent).await?;
    writeln!(out, "{}", render(&results, json)?)?;
    Ok(results)
}

/// Text shown for a result set. Zero, one and many records each get their own form.
pub fn render(results: &ResultSet, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(results)?);
    }

    let text = match results.len() {
        0 => NO_RESULTS.to_string(),
        _ => results
            .iter()
            .map(|record| record.to_string())
            .collect::<Vec<_>>()
            .join("\n\n"),
    };
    Ok(text)
}

/// Download the image of every record, reporting progress to `status`.
///
/// `status` is kept apart from the record output so `--json` stays parseable.
/// A single record is saved to `dest` when given and its errors are returned.
/// For several records, videos are skipped and failures are reported without
/// stopping the rest of the batch.
pub async fn download<W: Write>(
    ctx: &AppContext,
    results: &ResultSet,
    dest: Option<&Path>,
    status: &mut W,
) -> Result<DownloadSummary> {
    let prefer_hd = ctx.config.prefer_hd;

    if results.is_empty() {
        writeln!(status, "{}", NO_RESULTS)?;
        return Ok(DownloadSummary::default());
    }

    if let Some(record) = results.single() {
        let asset = ctx.client.fetch_image(record, prefer_hd).await?;
        let path = match dest {
            Some(dest) => save_to(&asset, dest)?,
            None => ctx.image_store()?.save(&asset, &image_file_name(record))?,
        };
        writeln!(status, "Saved {}", path.display())?;
        return Ok(DownloadSummary {
            saved: vec![path],
            ..Default::default()
        });
    }

    if dest.is_some() {
        tracing::warn!("--dest only applies to a single record, using titles as file names");
    }

    let store = ctx.image_store()?;
    let downloads = ctx.client.fetch_images(results, prefer_hd).await;
    let mut summary = DownloadSummary::default();
    let mut taken = HashSet::new();

    for (record, download) in results.iter().zip(downloads) {
        let saved = download.and_then(|asset| {
            store.save(&asset, &unique_image_file_name(record, &mut taken))
        });

        match saved {
            Ok(path) => {
                writeln!(status, "  Saved {}", path.display())?;
                summary.saved.push(path);
            }
            Err(ApodError::NotAnImage { date, media_type }) => {
                tracing::warn!("Skipping {} ({}): not an image", date, media_type);
                summary.skipped += 1;
            }
            Err(e) => {
                writeln!(status, "  Error downloading {}: {}", record.display_title(), e)?;
                summary.errors += 1;
            }
        }
    }

    writeln!(
        status,
        "Download complete: {} saved, {} skipped, {} errors",
        summary.saved.len(),
        summary.skipped,
        summary.errors
    )?;
    Ok(summary)
}

fn save_to(asset: &ImageAsset, dest: &Path) -> Result<PathBuf> {
    let file_name = dest
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ApodError::InvalidDestination(dest.display().to_string()))?;

    let store = match dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => FsStore::new(dir)?,
        None => FsStore::current_dir()?,
    };
    store.save(asset, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MediaType, Record};
    use tempfile::TempDir;

    fn record(title: &str, date: &str) -> Record {
        Record {
            date: date.into(),
            title: title.into(),
            explanation: "E".into(),
            media_type: MediaType::Image,
            service_version: "v1".into(),
            url: "https://apod.nasa.gov/a.jpg".into(),
            hdurl: String::new(),
            copyright: None,
            thumbnail_url: None,
        }
    }

    #[test]
    fn test_render_zero() {
        let text = render(&ResultSet::Many(Vec::new()), false).unwrap();
        assert_eq!(text, NO_RESULTS);
    }

    #[test]
    fn test_render_one() {
        let text = render(&ResultSet::Single(record("Orion", "2020-01-01")), false).unwrap();
        assert!(text.starts_with("Title: Orion"));
        assert!(!text.contains(NO_RESULTS));
    }

    #[test]
    fn test_render_one_element_array() {
        // A one-element array must print the record, not the empty message.
        let text = render(&ResultSet::Many(vec![record("Orion", "2020-01-01")]), false).unwrap();
        assert!(text.starts_with("Title: Orion"));
    }

    #[test]
    fn test_render_many() {
        let set = ResultSet::Many(vec![record("A", "2020-01-01"), record("B", "2020-01-02")]);
        let text = render(&set, false).unwrap();
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Title: A"));
        assert!(blocks[1].starts_with("Title: B"));
    }

    #[test]
    fn test_render_json_shapes() {
        let single = render(&ResultSet::Single(record("A", "2020-01-01")), true).unwrap();
        assert!(single.trim_start().starts_with('{'));

        let many = render(&ResultSet::Many(Vec::new()), true).unwrap();
        assert_eq!(many, "[]");
    }

    #[test]
    fn test_save_to_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("out").join("today.jpg");
        let asset = ImageAsset::new("https://apod.nasa.gov/a.jpg", vec![1, 2, 3]);

        let path = save_to(&asset, &dest).unwrap();

        assert_eq!(path, dest);
        assert_eq!(std::fs::read(dest).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_save_to_without_file_name() {
        let asset = ImageAsset::new("https://apod.nasa.gov/a.jpg", vec![1]);
        let err = save_to(&asset, Path::new("..")).unwrap_err();
        assert!(matches!(err, ApodError::InvalidDestination(_)));
    }
}
