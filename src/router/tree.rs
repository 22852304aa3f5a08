use std::{
    collections::HashMap,
    ops::{Index, IndexMut},
};

use super::node::Node;

/// Handle to a node in the tree's arena.
///
/// Slots released by [`Router::remove`](super::Router::remove) are reused,
/// so a handle must not be kept across removals.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    pub(super) const ROOT: NodeId = NodeId(0);
}

/// Arena of nodes, rooted at slot 0, plus the exact-match index of
/// fully static routes.
#[derive(Debug)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
    free: Vec<NodeId>,
    pub(super) static_index: HashMap<String, NodeId>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::empty()],
            free: vec![],
            static_index: HashMap::new(),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        let node = self.nodes.get(id.0)?;
        (id == NodeId::ROOT || node.parent.is_some()).then_some(node)
    }

    /// Number of live nodes, the root included.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub(super) fn alloc(&mut self, node: Node<T>) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.nodes[id.0] = node;
            return id;
        }
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub(super) fn release(&mut self, id: NodeId) {
        self.nodes[id.0] = Node::empty();
        self.free.push(id);
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = Node<T>;
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl<T> IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeId, Tree};
    use crate::router::{node::Node, segment};

    #[test]
    fn test_alloc_reuses_released_slots() {
        let mut tree: Tree<()> = Tree::new();
        assert_eq!(tree.len(), 1);

        let mut segments = segment::parse_path("a/b").unwrap().into_iter();
        let a = tree.alloc(Node::new(NodeId::ROOT, segments.next().unwrap()));
        let b = tree.alloc(Node::new(a, segments.next().unwrap()));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(b).unwrap().segment(), "b");

        tree.release(a);
        assert_eq!(tree.len(), 2);
        assert!(tree.get(a).is_none());

        let c = tree.alloc(Node::new(NodeId::ROOT, segment::parse_path("c").unwrap().remove(0)));
        assert_eq!(c, a);
        assert_eq!(tree.get(c).unwrap().segment(), "c");
    }

    #[test]
    fn test_root_is_live() {
        let tree: Tree<()> = Tree::new();
        assert!(tree.get(NodeId::ROOT).is_some());
        assert!(tree.get(NodeId(1)).is_none());
    }
}
