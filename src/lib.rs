//! # justmyresource-lucide
//!
//! Lucide icon resource pack for the JustMyResource registry.
//!
//! This crate wraps the Lucide icon distribution's `lucide.zip` archive
//! (bundled at compile time) behind the registry's resource-provider
//! contract: enumerate icon names, fetch one icon's SVG bytes by name,
//! and report the pack's alias prefixes. Lookups that miss fail with a
//! typed not-found error carrying up to five "did you mean" suggestions.
//!
//! ## Features
//!
//! - 1500+ Lucide SVG icons, served as `image/svg+xml` / `utf-8`
//! - Icon names accepted with or without the `.svg` suffix
//! - Sorted, deduplicated name listing, memoized after the first scan
//! - Archive opened fresh per operation; safe under concurrent callers
//!
//! ## Example
//!
//! ```no_run
//! use justmyresource_lucide::{ResourceProvider, get_resource_provider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), justmyresource_lucide::ResourceError> {
//!     let pack = get_resource_provider();
//!
//!     let content = pack.get_resource("lightbulb").await?;
//!     assert!(content.data.starts_with(b"<svg"));
//!
//!     for name in pack.list_resources().await? {
//!         println!("{name}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod io;
pub mod pack;
pub mod provider;
pub mod zip;

pub use error::ResourceError;
pub use pack::LucidePack;
pub use provider::{ResourceContent, ResourceProvider};

/// Entry point factory the registry discovers and invokes to obtain this
/// plugin. Returns a pack backed by the bundled archive.
pub fn get_resource_provider() -> LucidePack {
    LucidePack::new()
}
