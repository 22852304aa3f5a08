use std::mem;

use tracing::debug;

use super::tree::{NodeId, Tree};

impl<T> Tree<T> {
    /// Removes the route declared as `path`. Only literal children are
    /// followed, so a dynamic route is removed by its declaration text.
    pub fn remove(&mut self, path: &str) -> bool {
        let mut id = NodeId::ROOT;
        for segment in path.split('/') {
            match self[id].children.get(segment) {
                Some(&child) => id = child,
                None => return false,
            }
        }

        if self[id].data.take().is_none() {
            return false;
        }
        self.static_index.remove(path);
        debug!(path, "route removed");

        self.prune(id);
        true
    }

    /// Detaches `id` and every ancestor left with neither data nor children.
    fn prune(&mut self, mut id: NodeId) {
        while id != NodeId::ROOT {
            let node = &mut self[id];
            if node.data.is_some() || !node.children.is_empty() {
                return;
            }
            let Some(parent_id) = node.parent else {
                return;
            };
            let segment = mem::take(&mut node.segment);

            let parent = &mut self[parent_id];
            parent.children.remove(&segment);
            if parent.placeholder_child == Some(id) {
                parent.placeholder_child = None;
            }
            if parent.wildcard_child == Some(id) {
                parent.wildcard_child = None;
            }
            debug!(segment = segment.as_str(), "node pruned");

            self.release(id);
            id = parent_id;
        }
    }
}
