pub mod commands;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::Config;
use crate::domain::{parse_date, IntentFields};

#[derive(Parser, Debug)]
#[command(name = "afetch")]
#[command(about = "Fetch NASA's Astronomy Picture of the Day", long_about = None)]
pub struct Cli {
    /// Date of the APOD to fetch (YYYY-MM-DD), defaults to today
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Start of a date range (YYYY-MM-DD)
    #[arg(long = "start-date", visible_alias = "sd", value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// End of a date range (YYYY-MM-DD)
    #[arg(long = "end-date", visible_alias = "ed", value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Fetch this many randomly chosen APODs
    #[arg(short, long)]
    pub count: Option<u32>,

    /// Include thumbnail URLs for video entries
    #[arg(long)]
    pub thumbs: bool,

    /// Download the image(s)
    #[arg(long)]
    pub download: bool,

    /// Destination file for a single downloaded image
    #[arg(short = 'o', long)]
    pub dest: Option<PathBuf>,

    /// Download the HD image when available
    #[arg(long)]
    pub hd: bool,

    /// Directory for downloaded images
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// NASA API key (overrides config and NASA_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Number of parallel image downloads
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Print the records as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to an alternative config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn intent_fields(&self) -> IntentFields {
        IntentFields {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            count: self.count,
            thumbs: self.thumbs,
        }
    }

    /// Command-line flags take precedence over the config file and environment.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(key) = &self.api_key {
            config.api_key = key.clone();
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(dir) = &self.dir {
            config.download_dir = Some(dir.clone());
        }
        config.prefer_hd |= self.hd;
        config.thumbs |= self.thumbs;
    }
}
