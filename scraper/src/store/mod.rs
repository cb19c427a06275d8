//! Faction Store - One JSON file per faction
//!
//! Files are named `faction_<external_id>.json` and are fully rewritten on
//! every run. Files whose id is no longer reported upstream are removed.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ScrapeError, ScrapeResult};
use crate::models::Faction;

const FILE_PREFIX: &str = "faction_";
const FILE_EXTENSION: &str = "json";

/// Output directory holding the faction files.
#[derive(Debug, Clone)]
pub struct FactionStore {
    dir: PathBuf,
}

impl FactionStore {
    /// Open the store, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> ScrapeResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| ScrapeError::io(&dir, e))?;
        Ok(Self { dir })
    }

    /// Directory of this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file for a faction id.
    pub fn path_for(&self, faction_id: &str) -> PathBuf {
        self.dir.join(format!("{FILE_PREFIX}{faction_id}.{FILE_EXTENSION}"))
    }

    /// Ids of all faction files currently on disk, with their paths.
    pub fn existing(&self) -> ScrapeResult<Vec<(String, PathBuf)>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| ScrapeError::io(&self.dir, e))?;
        faction_files(&self.dir, entries.map(|entry| entry.map(|e| e.path())))
    }

    /// Delete every faction file whose id is not in `keep`.
    ///
    /// Returns the number of files removed.
    pub fn remove_stale(&self, keep: &HashSet<String>) -> ScrapeResult<usize> {
        let mut removed = 0;

        for (id, path) in self.existing()? {
            if keep.contains(&id) {
                continue;
            }
            info!(path = %path.display(), "Removing old faction file");
            fs::remove_file(&path).map_err(|e| ScrapeError::io(&path, e))?;
            removed += 1;
        }

        Ok(removed)
    }

    /// Write a faction, replacing any previous file with the same id.
    ///
    /// Output is pretty-printed with 2-space indentation and non-ASCII
    /// characters left unescaped, so identical input gives identical bytes.
    pub fn write(&self, faction_id: &str, faction: &Faction) -> ScrapeResult<PathBuf> {
        let path = self.path_for(faction_id);
        let content = serde_json::to_string_pretty(faction)?;
        fs::write(&path, content).map_err(|e| ScrapeError::io(&path, e))?;
        Ok(path)
    }
}

/// Keep the faction files among directory entries, sorted by id.
///
/// An unreadable entry fails the listing, so no stale file is silently kept.
fn faction_files(
    dir: &Path,
    entries: impl IntoIterator<Item = std::io::Result<PathBuf>>,
) -> ScrapeResult<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();

    for entry in entries {
        let path = entry.map_err(|e| ScrapeError::io(dir, e))?;
        if !path.is_file() {
            continue;
        }
        if let Some(id) = faction_id_of(&path) {
            files.push((id, path));
        }
    }
    files.sort();

    Ok(files)
}

/// Extract the id from a `faction_<id>.json` path.
fn faction_id_of(path: &Path) -> Option<String> {
    if path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    stem.strip_prefix(FILE_PREFIX).map(String::from)
}
