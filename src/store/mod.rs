pub mod fs;

use std::collections::HashSet;
use std::path::PathBuf;

use crate::app::Result;
use crate::domain::{ImageAsset, Record};

pub use fs::FsStore;

pub trait ImageStore {
    /// Persist `asset` under `file_name` and return where it ended up.
    fn save(&self, asset: &ImageAsset, file_name: &str) -> Result<PathBuf>;
}

/// Default file name for a record's image: the lower-cased title plus `.jpg`.
///
/// Path separators and control characters in titles are replaced so the name
/// always stays inside the target directory.
pub fn image_file_name(record: &Record) -> String {
    let stem: String = record
        .display_title()
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let stem = stem.trim_start_matches('.');
    if stem.is_empty() {
        format!("apod-{}.jpg", record.date)
    } else {
        format!("{}.jpg", stem)
    }
}

/// Like [`image_file_name`], but never hands out a name already in `taken`.
///
/// Titles repeat across years, so a clash first gets the record date
/// appended, then a counter.
pub fn unique_image_file_name(record: &Record, taken: &mut HashSet<String>) -> String {
    let name = image_file_name(record);
    if taken.insert(name.clone()) {
        return name;
    }

    let stem = name.trim_end_matches(".jpg");
    let date = record.date.replace(['/', '\\'], "_");
    let dated = format!("{}-{}.jpg", stem, date);
    if taken.insert(dated.clone()) {
        return dated;
    }

    let mut n = 2;
    loop {
        let numbered = format!("{}-{}-{}.jpg", stem, date, n);
        if taken.insert(numbered.clone()) {
            return numbered;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::tests::image_record;

    #[test]
    fn test_file_name_is_lowercased_title() {
        let record = image_record("");
        assert_eq!(image_file_name(&record), "betelgeuse imagined.jpg");
    }

    #[test]
    fn test_file_name_strips_separators() {
        let mut record = image_record("");
        record.title = "M31/M32: Andromeda".into();
        assert_eq!(image_file_name(&record), "m31_m32_ andromeda.jpg");
    }

    #[test]
    fn test_unique_name_appends_date_on_clash() {
        let mut taken = HashSet::new();
        let mut first = image_record("");
        first.title = "The Horsehead Nebula".into();
        first.date = "2015-01-01".into();
        let mut second = first.clone();
        second.date = "2021-06-02".into();

        assert_eq!(
            unique_image_file_name(&first, &mut taken),
            "the horsehead nebula.jpg"
        );
        assert_eq!(
            unique_image_file_name(&second, &mut taken),
            "the horsehead nebula-2021-06-02.jpg"
        );
    }

    #[test]
    fn test_unique_name_counts_when_date_also_clashes() {
        let mut taken = HashSet::new();
        let record = image_record("");

        let names: Vec<String> = (0..3)
            .map(|_| unique_image_file_name(&record, &mut taken))
            .collect();

        assert_eq!(
            names,
            vec![
                "betelgeuse imagined.jpg",
                "betelgeuse imagined-2020-01-01.jpg",
                "betelgeuse imagined-2020-01-01-2.jpg",
            ]
        );
    }

    #[test]
    fn test_file_name_cannot_escape_directory() {
        let mut record = image_record("");
        record.title = "../..".into();
        let name = image_file_name(&record);
        assert!(!name.starts_with('.'));
        assert!(!name.contains('/'));
    }
}
