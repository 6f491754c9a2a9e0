//! The Lucide icon pack adapter.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, trace};

use crate::error::ResourceError;
use crate::io::{ArchiveFile, ReadAt, SliceReader};
use crate::provider::{ResourceContent, ResourceProvider};
use crate::zip::ZipArchive;

/// The Lucide icon archive, bundled at compile time.
static LUCIDE_ZIP: &[u8] = include_bytes!("../assets/lucide.zip");

/// Archive entry suffix stripped from (and appended to) icon names.
const ICON_SUFFIX: &str = ".svg";

/// Media type declared for every icon.
const MEDIA_TYPE: &str = "image/svg+xml";

/// Text encoding declared for every icon.
const ENCODING: &str = "utf-8";

/// Short alias prefix the registry may register for this pack.
const ALIAS_PREFIX: &str = "luc";

/// Maximum number of suggestions attached to a failed lookup.
const MAX_SUGGESTIONS: usize = 5;

/// Where the archive bytes come from.
enum ArchiveSource {
    /// The `lucide.zip` embedded in the crate.
    Bundled,
    /// An archive on disk, opened fresh per operation.
    File(PathBuf),
}

/// Reader over either source; a new one is constructed per operation so
/// no handle outlives the call that opened it.
enum SourceReader {
    Bundled(SliceReader),
    File(ArchiveFile),
}

#[async_trait]
impl ReadAt for SourceReader {
    async fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize> {
        match self {
            SourceReader::Bundled(r) => r.read_at(offset, buf).await,
            SourceReader::File(r) => r.read_at(offset, buf).await,
        }
    }

    fn size(&self) -> u64 {
        match self {
            SourceReader::Bundled(r) => r.size(),
            SourceReader::File(r) => r.size(),
        }
    }
}

/// Resource pack exposing 1500+ Lucide SVG icons to the registry.
///
/// The only cross-call state is the memoized name list; the source
/// archive never changes during the process lifetime, so the cache fills
/// once and never invalidates.
pub struct LucidePack {
    source: ArchiveSource,
    icon_names: OnceCell<Vec<String>>,
}

impl Default for LucidePack {
    fn default() -> Self {
        Self::new()
    }
}

impl LucidePack {
    /// Pack backed by the bundled archive.
    pub fn new() -> Self {
        Self {
            source: ArchiveSource::Bundled,
            icon_names: OnceCell::new(),
        }
    }

    /// Pack backed by a `lucide.zip` on disk.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ArchiveSource::File(path.into()),
            icon_names: OnceCell::new(),
        }
    }

    /// Open a fresh archive reader for one operation.
    fn open_archive(&self) -> Result<ZipArchive<SourceReader>> {
        let reader = match &self.source {
            ArchiveSource::Bundled => SourceReader::Bundled(SliceReader::new(LUCIDE_ZIP)),
            ArchiveSource::File(path) => SourceReader::File(
                ArchiveFile::open(path)
                    .with_context(|| format!("Failed to open icon archive {}", path.display()))?,
            ),
        };
        Ok(ZipArchive::new(Arc::new(reader)))
    }

    /// The memoized, sorted list of icon names.
    ///
    /// Scans the archive's central directory on first call. Concurrent
    /// first calls serialize on the cell, so the scan runs once.
    async fn names(&self) -> Result<&Vec<String>, ResourceError> {
        self.icon_names
            .get_or_try_init(|| async {
                let archive = self.open_archive()?;
                let mut names: Vec<String> = archive
                    .entries()
                    .await?
                    .into_iter()
                    .filter(|e| !e.is_directory && e.name.ends_with(ICON_SUFFIX))
                    .map(|e| e.name[..e.name.len() - ICON_SUFFIX.len()].to_string())
                    .collect();
                names.sort_unstable();
                names.dedup();
                debug!(count = names.len(), "indexed icon archive");
                Ok(names)
            })
            .await
    }
}

#[async_trait]
impl ResourceProvider for LucidePack {
    async fn list_resources(&self) -> Result<Vec<String>, ResourceError> {
        Ok(self.names().await?.clone())
    }

    async fn get_resource(&self, name: &str) -> Result<ResourceContent, ResourceError> {
        let name = name.strip_suffix(ICON_SUFFIX).unwrap_or(name);
        let entry_name = format!("{name}{ICON_SUFFIX}");

        let archive = self.open_archive()?;
        let entries = archive.entries().await?;

        let Some(entry) = entries
            .iter()
            .find(|e| !e.is_directory && e.name == entry_name)
        else {
            let suggestions = similar_names(name, self.names().await?);
            return Err(ResourceError::not_found(name, suggestions));
        };

        let data = archive.read_entry(entry).await?;
        trace!(icon = name, bytes = data.len(), "read icon");

        Ok(ResourceContent {
            data,
            content_type: MEDIA_TYPE.to_string(),
            encoding: ENCODING.to_string(),
        })
    }

    fn prefixes(&self) -> Vec<String> {
        vec![ALIAS_PREFIX.to_string()]
    }
}

/// Best-effort "did you mean" candidates for a failed lookup.
///
/// Case-insensitive substring containment in either direction, preserving
/// the sorted order of `names`, truncated to [`MAX_SUGGESTIONS`]. Short
/// queries can match loosely; the truncation bounds the noise.
fn similar_names(name: &str, names: &[String]) -> Vec<String> {
    let needle = name.to_lowercase();
    names
        .iter()
        .filter(|n| {
            let candidate = n.to_lowercase();
            candidate.contains(&needle) || needle.contains(&candidate)
        })
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn similar_names_matches_in_both_directions() {
        let all = names(&["alarm-clock", "clock", "lightbulb"]);

        // query contained in candidate
        assert_eq!(similar_names("bulb", &all), names(&["lightbulb"]));
        // candidate contained in query
        assert_eq!(
            similar_names("alarm-clock-check", &all),
            names(&["alarm-clock", "clock"])
        );
    }

    #[test]
    fn similar_names_is_case_insensitive() {
        let all = names(&["lightbulb"]);
        assert_eq!(similar_names("LightBulb-Off", &all), names(&["lightbulb"]));
    }

    #[test]
    fn similar_names_truncates_preserving_order() {
        let all = names(&["ab-1", "ab-2", "ab-3", "ab-4", "ab-5", "ab-6", "zz"]);
        assert_eq!(
            similar_names("ab", &all),
            names(&["ab-1", "ab-2", "ab-3", "ab-4", "ab-5"])
        );
    }

    #[test]
    fn similar_names_empty_when_nothing_relates() {
        let all = names(&["lightbulb", "activity"]);
        assert!(similar_names("qwxz", &all).is_empty());
    }
}
