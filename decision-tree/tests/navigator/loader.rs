//! Graph sources: load from a JSON file, then navigate.

use std::io::Write;

use decision_tree::{
    DanglingPolicy, DecisionTreeNavigator, GraphDocument, GraphError, GraphSource,
    InMemorySource, JsonFileSource, NavigationError,
};

const GRAPH_JSON: &str = r#"{
  "start": "start",
  "nodes": [
    { "id": "start", "kind": "start", "title": "Begin",
      "options": [ { "label": "A", "target": "a" }, { "label": "B", "target": "b" } ] },
    { "id": "a", "kind": "question", "title": "A",
      "options": [ { "label": "C", "target": "c" } ] },
    { "id": "b", "kind": "outcome", "title": "B" },
    { "id": "c", "kind": "treatment", "title": "C", "body": "Terminal." }
  ]
}"#;

/// **Scenario**: A graph loaded from a JSON file drives a navigator end to end.
#[tokio::test]
async fn json_file_source_loads_navigable_graph() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(GRAPH_JSON.as_bytes()).unwrap();

    let source = JsonFileSource::new(file.path());
    let graph = std::sync::Arc::new(source.load().await.unwrap());
    let mut nav = DecisionTreeNavigator::new(graph).unwrap();
    nav.navigate("a").unwrap();
    nav.navigate("c").unwrap();
    assert_eq!(nav.current_node().body, "Terminal.");
    assert!(nav.view().is_terminal);
}

/// **Scenario**: A missing file is reported as GraphError::Io with the path.
#[tokio::test]
async fn json_file_source_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = JsonFileSource::new(&path).load().await.unwrap_err();
    match err {
        GraphError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io, got {:?}", other),
    }
}

/// **Scenario**: A dangling document loads only under DanglingPolicy::Allow, then fails at navigation.
#[tokio::test]
async fn dangling_document_fails_at_navigation_when_allowed() {
    let mut doc = GraphDocument::from_json(GRAPH_JSON).unwrap();
    doc.nodes[2] = doc.nodes[2].clone().with_option("more", "ghost");

    let strict = InMemorySource::new(doc.clone()).load().await;
    assert!(matches!(strict, Err(GraphError::DanglingOption { .. })));

    let graph = InMemorySource::new(doc)
        .with_policy(DanglingPolicy::Allow)
        .load()
        .await
        .unwrap();
    let mut nav = DecisionTreeNavigator::new(std::sync::Arc::new(graph)).unwrap();
    nav.navigate("b").unwrap();
    assert_eq!(
        nav.navigate("ghost"),
        Err(NavigationError::NodeNotFound("ghost".into()))
    );
    assert_eq!(nav.current_id(), "b");
}
