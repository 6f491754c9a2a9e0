//! Minimal zip archive reading.
//!
//! The icon archive is a standard zip produced by the upstream Lucide
//! distribution. A zip file is read from the end: the End of Central
//! Directory (EOCD) record locates the Central Directory, which carries
//! the metadata for every entry; entry data sits behind each entry's
//! Local File Header. Listing names therefore never touches entry data,
//! and fetching one icon reads only that entry's bytes.
//!
//! ## Supported
//!
//! - Standard zip format (PKZIP APPNOTE 6.3.x compatible)
//! - STORED (no compression) and DEFLATE entries
//!
//! ## Limitations
//!
//! - No ZIP64 (the bundled archive holds ~1.5k small files, far below
//!   any 32-bit limit)
//! - No encryption, no multi-disk archives

mod parser;
mod reader;
mod structures;

pub use parser::ZipParser;
pub use reader::ZipArchive;
pub use structures::{ArchiveEntry, CompressionMethod};
