//! Recursive discovery of candidate event files
//!
//! Walks a root directory and collects every entry whose name contains a
//! dot. This is deliberately a coarse filter, not an extension whitelist:
//! the interchange drop area mixes stamped data files with other dotted
//! entries, and non-files among the candidates are sorted out later when
//! the parser fails to read them. Dotted directory names match too.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::constants::SCAN_LOG_INTERVAL;
use crate::{Error, Result};

/// Scanner that discovers candidate event files under a root directory.
pub struct FileScanner {
    follow_links: bool,
}

impl FileScanner {
    /// Create a scanner that does not follow symbolic links.
    pub fn new() -> Self {
        Self {
            follow_links: false,
        }
    }

    /// Set whether symbolic links are followed during the walk.
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Walk `root` and return every candidate path, lexicographically sorted.
    ///
    /// Entries the walker cannot read are logged and skipped; the scan
    /// itself only fails when the root is missing.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        info!("Starting file scan at: {}", root.display());

        if !root.exists() {
            return Err(Error::configuration(format!(
                "scan root does not exist: {}",
                root.display()
            )));
        }

        let mut candidates = Vec::new();
        let mut total_scanned = 0;

        for entry in WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.follow_links)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable walk entry: {}", e);
                    continue;
                }
            };

            total_scanned += 1;
            if total_scanned % SCAN_LOG_INTERVAL == 0 {
                debug!("Scanned {} entries", total_scanned);
            }

            if entry.file_name().to_string_lossy().contains('.') {
                candidates.push(entry.into_path());
            }
        }

        candidates.sort();

        info!(
            "Discovered {} candidate files out of {} entries",
            candidates.len(),
            total_scanned
        );

        Ok(candidates)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}
