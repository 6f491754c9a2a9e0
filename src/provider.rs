//! The resource provider contract consumed by the JustMyResource registry.

use std::borrow::Cow;

use async_trait::async_trait;

use crate::error::ResourceError;

/// Immutable resource payload handed back to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceContent {
    /// Raw resource bytes.
    pub data: Vec<u8>,
    /// Declared media type, e.g. `image/svg+xml`.
    pub content_type: String,
    /// Declared text encoding, e.g. `utf-8`.
    pub encoding: String,
}

impl ResourceContent {
    /// Decoded text view of the bytes, computed on demand.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

/// Interface a resource pack exposes to the registry.
///
/// The registry discovers a pack through its factory entry point
/// ([`get_resource_provider`](crate::get_resource_provider) here) and then
/// only ever talks to this trait.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// List all resource names this pack provides, sorted and deduplicated.
    async fn list_resources(&self) -> Result<Vec<String>, ResourceError>;

    /// Fetch one resource by name.
    ///
    /// Fails with [`ResourceError::NotFound`] when the name has no entry.
    async fn get_resource(&self, name: &str) -> Result<ResourceContent, ResourceError>;

    /// Optional short alias prefixes the registry may register in addition
    /// to the pack's canonical name. Declarative metadata, not computed.
    fn prefixes(&self) -> Vec<String>;
}
