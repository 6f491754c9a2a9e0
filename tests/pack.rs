//! Integration tests for the Lucide resource pack.

use justmyresource_lucide::{
    LucidePack, ResourceError, ResourceProvider, get_resource_provider,
};

#[tokio::test]
async fn get_resource_existing_icon() {
    let pack = get_resource_provider();

    let content = pack.get_resource("a-arrow-down").await.unwrap();

    assert_eq!(content.content_type, "image/svg+xml");
    assert_eq!(content.encoding, "utf-8");
    assert!(content.data.starts_with(b"<svg"));

    let svg_text = content.text();
    assert!(svg_text.starts_with("<svg"));
    assert!(svg_text.contains("xmlns") || svg_text.contains("viewBox"));
}

#[tokio::test]
async fn get_resource_with_or_without_extension() {
    let pack = get_resource_provider();

    let content1 = pack.get_resource("a-arrow-down").await.unwrap();
    let content2 = pack.get_resource("a-arrow-down.svg").await.unwrap();

    assert_eq!(content1.data, content2.data);
}

#[tokio::test]
async fn get_resource_nonexistent_icon() {
    let pack = get_resource_provider();

    let err = pack.get_resource("nonexistent-icon").await.unwrap_err();

    assert!(matches!(err, ResourceError::NotFound { .. }));
    assert!(
        err.to_string()
            .contains("Icon 'nonexistent-icon' not found")
    );
}

#[tokio::test]
async fn list_resources() {
    let pack = get_resource_provider();

    let resources = pack.list_resources().await.unwrap();

    // Approximately 1500 icons ship in the archive
    assert!(resources.len() > 1500);
    assert!(resources.len() < 1600);

    let mut sorted = resources.clone();
    sorted.sort();
    assert_eq!(resources, sorted);

    assert!(resources.contains(&"a-arrow-down".to_string()));
    assert!(resources.contains(&"alarm-clock-check".to_string()));
    assert!(resources.contains(&"lightbulb".to_string()));

    // No entry suffix survives normalization
    assert!(resources.iter().all(|name| !name.contains('.')));
}

#[tokio::test]
async fn list_resources_is_cached() {
    let pack = get_resource_provider();

    let first = pack.list_resources().await.unwrap();
    let second = pack.list_resources().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn every_listed_icon_resolves() {
    let pack = get_resource_provider();

    for name in pack.list_resources().await.unwrap() {
        let content = pack
            .get_resource(&name)
            .await
            .unwrap_or_else(|e| panic!("listed icon '{name}' failed to resolve: {e}"));
        assert!(
            content.data.starts_with(b"<svg"),
            "icon '{name}' is not an SVG document"
        );
    }
}

#[tokio::test]
async fn near_miss_lookup_suggests_valid_names() {
    let pack = get_resource_provider();

    // "chevrons" is not an icon but is a prefix of several real ones
    let err = pack.get_resource("chevrons").await.unwrap_err();

    let ResourceError::NotFound { name, suggestions } = err else {
        panic!("expected NotFound, got: {err}");
    };
    assert_eq!(name, "chevrons");
    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 5);

    let all = pack.list_resources().await.unwrap();
    for suggested in &suggestions {
        assert!(all.contains(suggested), "suggested unknown name {suggested}");
    }
}

#[tokio::test]
async fn prefixes() {
    let pack = get_resource_provider();

    assert_eq!(pack.prefixes(), vec!["luc".to_string()]);
}

#[tokio::test]
async fn resource_content_structure() {
    let pack = get_resource_provider();

    let content = pack.get_resource("activity").await.unwrap();

    let text = content.text();
    assert!(!text.is_empty());
    assert!(text.starts_with("<svg"));
}

#[tokio::test]
async fn pack_from_archive_path() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/lucide.zip");
    let pack = LucidePack::from_path(path);

    let content = pack.get_resource("lightbulb").await.unwrap();
    assert!(content.data.starts_with(b"<svg"));

    let resources = pack.list_resources().await.unwrap();
    assert!(resources.len() > 1500);
}

#[tokio::test]
async fn pack_from_missing_archive_path_fails() {
    let pack = LucidePack::from_path("/nonexistent/lucide.zip");

    let err = pack.get_resource("lightbulb").await.unwrap_err();
    assert!(matches!(err, ResourceError::Archive(_)));
}
