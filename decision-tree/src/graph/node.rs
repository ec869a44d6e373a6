//! Decision node: one step of guidance text with labeled options to other nodes.

use serde::{Deserialize, Serialize};

/// Classification of a node. Carries no navigation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    #[default]
    Question,
    Action,
    Outcome,
    Treatment,
    Followup,
}

impl NodeKind {
    /// Lowercase name, as used in graph documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Question => "question",
            Self::Action => "action",
            Self::Outcome => "outcome",
            Self::Treatment => "treatment",
            Self::Followup => "followup",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled choice on a node, pointing at another node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOption {
    pub label: String,
    pub target: String,
}

impl NodeOption {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// A node of the decision graph. Immutable once the graph is built.
///
/// `title` and `body` are opaque to the navigator. A node with no options is
/// terminal: the presentation layer offers only "restart".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionNode {
    pub id: String,
    #[serde(default)]
    pub kind: NodeKind,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub options: Vec<NodeOption>,
}

impl DecisionNode {
    /// Creates a node with no body and no options.
    pub fn new(id: impl Into<String>, kind: NodeKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            body: String::new(),
            options: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Appends an option; order of calls is display order.
    pub fn with_option(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.options.push(NodeOption::new(label, target));
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }

    pub fn option(&self, index: usize) -> Option<&NodeOption> {
        self.options.get(index)
    }

    pub fn has_option_to(&self, target: &str) -> bool {
        self.options.iter().any(|o| o.target == target)
    }
}
