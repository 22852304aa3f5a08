use tracing::debug;

use super::{
    node::{Node, NodeType},
    segment::{self, InsertError, Segment},
    tree::{NodeId, Tree},
};

impl<T> Tree<T> {
    pub fn insert(&mut self, path: &str, data: T) -> Result<NodeId, InsertError> {
        let segments = segment::parse_path(path)?;
        let is_static = segments.iter().all(|segment| segment.is_static());

        let mut id = NodeId::ROOT;
        let mut anonymous = 0;
        for segment in segments {
            let existing = self[id].children.get(segment.text).copied();
            id = match existing {
                Some(child) => child,
                None => self.add_child(id, segment, &mut anonymous),
            };
        }

        self[id].data = Some(data);
        if is_static {
            self.static_index.insert(path.to_owned(), id);
        }
        debug!(path, is_static, "route inserted");
        Ok(id)
    }

    /// `anonymous` counts the `*` nodes created by the current insert.
    fn add_child(&mut self, parent: NodeId, segment: Segment, anonymous: &mut usize) -> NodeId {
        let mut node = Node::new(parent, segment);
        if node.node_type == NodeType::Placeholder && node.param_name.is_none() {
            node.param_name = Some(format!("_{anonymous}"));
            *anonymous += 1;
        }
        let node_type = node.node_type;
        let key = node.segment.clone();
        let child = self.alloc(node);
        debug!(%node_type, segment = key.as_str(), "new node");

        let parent = &mut self[parent];
        match node_type {
            NodeType::Placeholder | NodeType::Mixed => parent.placeholder_child = Some(child),
            NodeType::Wildcard => parent.wildcard_child = Some(child),
            NodeType::Static => {}
        }
        parent.children.insert(key, child);
        child
    }
}
