use super::ReadAt;
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// File-backed archive reader with positional reads.
///
/// On unix this uses `pread` and never moves a cursor, so a single
/// instance is safe to share. Elsewhere reads go through a mutex-guarded
/// seek-then-read; the pack opens one reader per operation anyway, so
/// contention never arises in practice.
pub struct ArchiveFile {
    #[cfg(unix)]
    file: std::fs::File,
    #[cfg(not(unix))]
    file: std::sync::Mutex<std::fs::File>,
    size: u64,
}

impl ArchiveFile {
    pub fn open(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let size = file.metadata()?.len();

        #[cfg(unix)]
        return Ok(Self { file, size });

        #[cfg(not(unix))]
        return Ok(Self {
            file: std::sync::Mutex::new(file),
            size,
        });
    }
}

#[async_trait]
impl ReadAt for ArchiveFile {
    async fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileExt;
            Ok(self.file.read_at(buf, offset)?)
        }

        #[cfg(not(unix))]
        {
            use std::io::{Read, Seek, SeekFrom};
            let mut file = self
                .file
                .lock()
                .map_err(|_| anyhow::anyhow!("archive file lock poisoned"))?;
            file.seek(SeekFrom::Start(offset))?;
            Ok(file.read(buf)?)
        }
    }

    fn size(&self) -> u64 {
        self.size
    }
}
