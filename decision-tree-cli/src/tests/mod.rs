//! Unit tests for decision-tree-cli, organized by module.
//!
//! Tests are BDD-style with clear Given/When/Then comments and descriptive names.
//! Each submodule documents the behaviour under test.


use std::sync::Arc;

use decision_tree::{DanglingPolicy, DecisionGraph, GraphDocument};

/// start -> [a, b], a -> [c], b -> [], c -> []
pub(crate) const SMALL_GRAPH: &str = r#"{
  "start": "start",
  "nodes": [
    { "id": "start", "kind": "start", "title": "Start",
      "options": [ { "label": "Go A", "target": "a" }, { "label": "Go B", "target": "b" } ] },
    { "id": "a", "kind": "question", "title": "Question A",
      "options": [ { "label": "Go C", "target": "c" } ] },
    { "id": "b", "kind": "outcome", "title": "Outcome B", "body": "Nothing more to do." },
    { "id": "c", "kind": "treatment", "title": "Treatment C" }
  ]
}"#;

pub(crate) fn small_graph() -> Arc<DecisionGraph> {
    Arc::new(
        GraphDocument::from_json(SMALL_GRAPH)
            .unwrap()
            .into_graph(DanglingPolicy::Reject)
            .unwrap(),
    )
}

/// Writes `json` to a temp file and returns it (kept alive by the caller).
pub(crate) fn graph_file(json: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}
