use super::ReadAt;
use anyhow::Result;
use async_trait::async_trait;

/// Archive reader over an in-memory byte slice.
///
/// Used for the archive bytes embedded in the crate with `include_bytes!`.
/// Constructing one is free, which makes "open a fresh handle per call"
/// literal for the bundled source as well.
pub struct SliceReader {
    data: &'static [u8],
}

impl SliceReader {
    pub fn new(data: &'static [u8]) -> Self {
        Self { data }
    }
}

#[async_trait]
impl ReadAt for SliceReader {
    async fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize> {
        let start = (offset as usize).min(self.data.len());
        let end = (start + buf.len()).min(self.data.len());
        let n = end - start;
        buf[..n].copy_from_slice(&self.data[start..end]);
        Ok(n)
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_within_bounds() {
        let reader = SliceReader::new(b"PK\x05\x06abcdef");
        let mut buf = [0u8; 4];
        let n = reader.read_at(4, &mut buf).await.unwrap();
        assert_eq!(n, 4);
        assert_eq!(&buf, b"abcd");
    }

    #[tokio::test]
    async fn read_past_end_is_short() {
        let reader = SliceReader::new(b"abcdef");
        let mut buf = [0u8; 8];
        let n = reader.read_at(4, &mut buf).await.unwrap();
        assert_eq!(n, 2);
        assert_eq!(&buf[..2], b"ef");

        let n = reader.read_at(100, &mut buf).await.unwrap();
        assert_eq!(n, 0);
    }
}
