mod file;
mod memory;

pub use file::ArchiveFile;
pub use memory::SliceReader;

use anyhow::Result;
use async_trait::async_trait;

/// Trait for random access reading from an archive source.
///
/// Implementations are expected to be cheap to construct; the pack opens
/// a fresh one per operation instead of holding a handle across calls.
#[async_trait]
pub trait ReadAt: Send + Sync {
    /// Read data at the specified offset into the buffer
    async fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize>;

    /// Get the total size of the data source
    fn size(&self) -> u64;
}
