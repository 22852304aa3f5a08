pub use lookup::Match;
pub use node::{Node, NodeType};
pub use params::Params;
pub use segment::InsertError;
pub use tree::NodeId;

use tracing::info;
use tree::Tree;

mod insert;
mod lookup;
mod node;
mod params;
mod remove;
mod segment;
mod tree;

/// Construction options for a [`Router`].
#[derive(Debug)]
pub struct RouterOptions<T> {
    /// Routes inserted in order when the router is built.
    pub routes: Vec<(String, T)>,
    /// When false, one trailing `/` is ignored on every path, the root
    /// path excepted.
    pub strict_trailing_slash: bool,
}

impl<T> RouterOptions<T> {
    pub fn new() -> Self {
        Self {
            routes: vec![],
            strict_trailing_slash: false,
        }
    }

    pub fn route(mut self, path: impl Into<String>, data: T) -> Self {
        self.routes.push((path.into(), data));
        self
    }

    pub fn strict_trailing_slash(mut self, strict: bool) -> Self {
        self.strict_trailing_slash = strict;
        self
    }
}

impl<T> Default for RouterOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Radix tree router mapping slash-delimited paths to data.
///
/// Routes are meant to be registered up front; `lookup` only needs `&self`,
/// so a built router can be shared between threads when `T` allows it.
#[derive(Debug)]
pub struct Router<T> {
    tree: Tree<T>,
    strict_trailing_slash: bool,
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self {
            tree: Tree::new(),
            strict_trailing_slash: false,
        }
    }

    pub fn with_options(options: RouterOptions<T>) -> Result<Self, InsertError> {
        let mut router = Self {
            tree: Tree::new(),
            strict_trailing_slash: options.strict_trailing_slash,
        };

        let count = options.routes.len();
        for (path, data) in options.routes {
            router.insert(&path, data)?;
        }
        info!(
            routes = count,
            strict_trailing_slash = router.strict_trailing_slash,
            "router built"
        );
        Ok(router)
    }

    /// Registers `data` under `path`, replacing any data already there.
    pub fn insert(&mut self, path: &str, data: T) -> Result<NodeId, InsertError> {
        let path = normalize(path, self.strict_trailing_slash);
        self.tree.insert(path, data)
    }

    pub fn lookup(&self, path: &str) -> Option<Match<'_, T>> {
        self.tree.lookup(normalize(path, self.strict_trailing_slash))
    }

    /// Unregisters the route declared as `path`. Dynamic routes are removed by
    /// their declaration (`/users/:id`), not by a path they match.
    pub fn remove(&mut self, path: &str) -> bool {
        let path = normalize(path, self.strict_trailing_slash);
        self.tree.remove(path)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.tree.get(id)
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(path: &str, strict_trailing_slash: bool) -> &str {
    if strict_trailing_slash {
        return path;
    }
    match path.strip_suffix('/').unwrap_or(path) {
        "" => "/",
        stripped => stripped,
    }
}
