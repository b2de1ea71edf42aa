use assetgraph_core::{AssetGraph, AssetGraphError, load_items_file, parse_items};

#[test]
fn parses_an_array_of_items() {
    let items = parse_items(r#"[{ "id": "home" }, { "id": "alerts" }]"#).unwrap();
    assert_eq!(items.len(), 2);
    let graph = AssetGraph::new(&items);
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn rejects_a_non_array_document() {
    let err = parse_items(r#"{ "id": "home" }"#).unwrap_err();
    assert!(matches!(err, AssetGraphError::InvalidItems(_)));
    assert!(err.to_string().contains("an object"));
}

#[test]
fn rejects_malformed_json() {
    let err = parse_items("[{ not json").unwrap_err();
    assert!(matches!(err, AssetGraphError::Json(_)));
}

#[test]
fn loads_items_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nav.json");
    std::fs::write(
        &path,
        r#"[{ "id": "home", "children": [{ "id": "dashboards" }] }]"#,
    )
    .unwrap();

    let items = load_items_file(&path).unwrap();
    let graph = AssetGraph::new(&items);
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_items_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, AssetGraphError::Io(_)));
}
