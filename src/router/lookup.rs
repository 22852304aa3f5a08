use tracing::trace;

use super::{
    node::Node,
    params::Params,
    tree::{NodeId, Tree},
};

#[derive(Debug)]
pub struct Match<'a, T> {
    pub data: &'a T,
    /// `None` when the route bound no parameters.
    pub params: Option<Params>,
}

impl<'a, T> Match<'a, T> {
    fn new(data: &'a T, params: Params) -> Self {
        Self {
            data,
            params: (!params.is_empty()).then_some(params),
        }
    }
}

/// The last wildcard passed on the way down, used when nothing more
/// specific resolves.
#[derive(Copy, Clone, Debug)]
struct Fallback {
    node: NodeId,
    /// Index of the first segment the wildcard would consume.
    from: usize,
}

impl<T> Tree<T> {
    pub fn lookup(&self, path: &str) -> Option<Match<'_, T>> {
        if let Some(data) = self
            .static_index
            .get(path)
            .and_then(|&id| self[id].data.as_ref())
        {
            trace!(path, "static match");
            return Some(Match::new(data, Params::new()));
        }

        let segments: Vec<&str> = path.split('/').collect();
        let mut params = Params::new();
        let mut fallback = None;
        let mut current = Some(NodeId::ROOT);

        for (idx, &segment) in segments.iter().enumerate() {
            let Some(id) = current else { break };
            let node = &self[id];

            if let Some(wildcard) = node.wildcard_child {
                fallback = Some(Fallback {
                    node: wildcard,
                    from: idx,
                });
            }

            // Literal children take precedence over the placeholder slot.
            if let Some(&child) = node.children.get(segment) {
                current = Some(child);
                continue;
            }

            current = node
                .placeholder_child
                .filter(|&child| self[child].bind(segment, &mut params));
        }

        if let Some(data) = current.and_then(|id| self[id].data.as_ref()) {
            trace!(path, params = params.len(), "tree match");
            return Some(Match::new(data, params));
        }

        let fallback = fallback?;
        let wildcard = &self[fallback.node];
        let data = wildcard.data.as_ref()?;
        params.push(
            wildcard.param_name().unwrap_or("_"),
            segments[fallback.from..].join("/"),
        );
        trace!(path, "wildcard match");
        Some(Match::new(data, params))
    }
}

impl<T> Node<T> {
    /// Binds `segment` to this dynamic node's parameters. Returns false when a
    /// mixed pattern rejects the segment.
    fn bind(&self, segment: &str, params: &mut Params) -> bool {
        let Some(matcher) = &self.param_matcher else {
            params.push(self.param_name().unwrap_or("_"), segment);
            return true;
        };

        let Some(captures) = matcher.captures(segment) else {
            return false;
        };
        for name in matcher.capture_names().flatten() {
            if let Some(value) = captures.name(name) {
                params.push(name, value.as_str());
            }
        }
        true
    }
}
