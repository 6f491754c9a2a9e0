use std::io::Read;
use std::sync::Arc;

use crate::io::ReadAt;
use anyhow::{Context, Result, bail};
use flate2::read::DeflateDecoder;

use super::parser::ZipParser;
use super::structures::{ArchiveEntry, CompressionMethod};

/// High-level archive reader: list entries, read one entry into memory.
pub struct ZipArchive<R: ReadAt> {
    parser: ZipParser<R>,
}

impl<R: ReadAt> ZipArchive<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all entries in the archive
    pub async fn entries(&self) -> Result<Vec<ArchiveEntry>> {
        self.parser.list_entries().await
    }

    /// Read one entry's data fully into memory, decompressing if needed.
    pub async fn read_entry(&self, entry: &ArchiveEntry) -> Result<Vec<u8>> {
        let data_offset = self.parser.get_data_offset(entry).await?;

        let mut compressed = vec![0u8; entry.compressed_size as usize];
        self.parser
            .reader()
            .read_at(data_offset, &mut compressed)
            .await?;

        match entry.compression_method {
            CompressionMethod::Stored => Ok(compressed),
            CompressionMethod::Deflate => {
                let mut data = Vec::with_capacity(entry.uncompressed_size as usize);
                DeflateDecoder::new(compressed.as_slice())
                    .read_to_end(&mut data)
                    .with_context(|| format!("Failed to inflate entry '{}'", entry.name))?;
                Ok(data)
            }
            CompressionMethod::Unknown(v) => {
                bail!(
                    "Unsupported compression method {} for entry '{}'",
                    v,
                    entry.name
                )
            }
        }
    }
}
