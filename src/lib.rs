pub use router::{InsertError, Match, Node, NodeId, NodeType, Params, Router, RouterOptions};

pub mod config;
pub mod router;

#[cfg(test)]
#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
