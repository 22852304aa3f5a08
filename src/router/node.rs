use std::collections::HashMap;

use regex::Regex;
use strum_macros::Display;

use super::{
    segment::{Kind, Segment},
    tree::NodeId,
};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
pub enum NodeType {
    Static,
    Placeholder,
    Mixed,
    Wildcard,
}

/// A single tree vertex. Every child is keyed in `children` by its
/// declaration text; dynamic children are additionally reachable through
/// one of the two slots.
#[derive(Debug)]
pub struct Node<T> {
    pub(super) node_type: NodeType,
    pub(super) segment: String,
    pub(super) parent: Option<NodeId>,
    pub(super) children: HashMap<String, NodeId>,
    pub(super) placeholder_child: Option<NodeId>,
    pub(super) wildcard_child: Option<NodeId>,
    pub(super) param_name: Option<String>,
    pub(super) param_matcher: Option<Regex>,
    pub(super) data: Option<T>,
}

impl<T> Node<T> {
    /// A node with no parent. Used for the root and for released arena slots.
    pub(super) fn empty() -> Self {
        Self {
            node_type: NodeType::Static,
            segment: String::new(),
            parent: None,
            children: HashMap::new(),
            placeholder_child: None,
            wildcard_child: None,
            param_name: None,
            param_matcher: None,
            data: None,
        }
    }

    pub(super) fn new(parent: NodeId, segment: Segment) -> Self {
        let node_type = segment.kind.node_type();
        let (param_name, param_matcher) = match segment.kind {
            Kind::Static | Kind::Anonymous => (None, None),
            Kind::Placeholder(name) | Kind::Wildcard(name) => (Some(name), None),
            Kind::Mixed(matcher) => (None, Some(matcher)),
        };

        Self {
            node_type,
            segment: segment.text.to_owned(),
            parent: Some(parent),
            param_name,
            param_matcher,
            ..Self::empty()
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// The declaration text this node was created from.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn param_name(&self) -> Option<&str> {
        self.param_name.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn children_len(&self) -> usize {
        self.children.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::router::{segment, tree::NodeId};

    use super::{Node, NodeType};

    #[test]
    fn test_new_from_segment() {
        let segments = segment::parse_path("/users/:id/*/:year-:month/**:rest").unwrap();

        let tests = [
            ("", NodeType::Static, None),
            ("users", NodeType::Static, None),
            (":id", NodeType::Placeholder, Some("id")),
            // Named by the tree on creation.
            ("*", NodeType::Placeholder, None),
            (":year-:month", NodeType::Mixed, None),
            ("**:rest", NodeType::Wildcard, Some("rest")),
        ];

        for (segment, (text, node_type, param_name)) in segments.into_iter().zip(tests) {
            let node: Node<()> = Node::new(NodeId::ROOT, segment);
            assert_eq!(node.segment(), text);
            assert_eq!(node.node_type(), node_type);
            assert_eq!(node.param_name(), param_name);
            assert_eq!(node.param_matcher.is_some(), node_type == NodeType::Mixed);
            assert!(node.data().is_none());
        }
    }

    #[test]
    fn test_node_type_display() {
        assert_eq!(NodeType::Placeholder.to_string(), "Placeholder");
        assert_eq!(NodeType::Wildcard.to_string(), "Wildcard");
    }
}
