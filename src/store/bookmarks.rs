use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

const BOOKMARKS_FILE: &str = "bookmarks.json";

/// On-disk shape: absolute source path → word index.
pub type BookmarkMap = BTreeMap<String, usize>;

/// Reading positions for local files, persisted as one JSON object.
#[derive(Clone, Debug)]
pub struct BookmarkStore {
    base_dir: PathBuf,
}

impl BookmarkStore {
    pub fn new() -> Option<Self> {
        let base_dir = dirs::config_dir()?.join("speedread");
        Some(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn file_path(&self) -> PathBuf {
        self.base_dir.join(BOOKMARKS_FILE)
    }

    /// Missing or unreadable files count as "no bookmarks".
    fn load_all(&self) -> BookmarkMap {
        match fs::read_to_string(self.file_path()) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => BookmarkMap::default(),
        }
    }

    fn save_all(&self, bookmarks: &BookmarkMap) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        let path = self.file_path();
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(bookmarks)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// Saved position for `source`, or 0 when there is none.
    pub fn load(&self, source: &Path) -> usize {
        self.load_all()
            .get(&bookmark_key(source))
            .copied()
            .unwrap_or(0)
    }

    /// Record `index` for `source`. Index 0 means "start over" and removes the entry.
    pub fn save(&self, source: &Path, index: usize) -> Result<()> {
        let mut bookmarks = self.load_all();
        let key = bookmark_key(source);
        if index == 0 {
            if bookmarks.remove(&key).is_none() && !self.file_path().exists() {
                return Ok(());
            }
        } else {
            bookmarks.insert(key, index);
        }
        self.save_all(&bookmarks)
    }
}

/// Absolute form of `source`, falling back to the path as given.
fn bookmark_key(source: &Path) -> String {
    std::path::absolute(source)
        .unwrap_or_else(|_| source.to_path_buf())
        .to_string_lossy()
        .into_owned()
}
