use std::path::{Path, PathBuf};

use crate::app::Result;
use crate::domain::ImageAsset;
use crate::store::ImageStore;

/// Writes images into a directory on the local filesystem.
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Store rooted at the current working directory.
    pub fn current_dir() -> Result<Self> {
        Self::new(std::env::current_dir()?)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ImageStore for FsStore {
    fn save(&self, asset: &ImageAsset, file_name: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        std::fs::write(&path, &asset.bytes)?;
        tracing::info!("Saved {} ({} bytes) to {}", asset.source, asset.len(), path.display());
        Ok(path)
    }
}
