use crate::search::node::Node;

/// Walks the parent chain from `node` back to the root and returns the
/// visited states reordered to read start -> goal.
///
/// The walk is a loop, so only path length bounds it, never call-stack
/// depth. A node with no parent yields a single-element path.
pub fn node_to_path<T: Clone>(node: &Node<T>) -> Vec<T> {
    let mut path = vec![node.state.clone()];
    let mut current = node;
    while let Some(parent) = current.parent.as_deref() {
        path.push(parent.state.clone());
        current = parent;
    }
    path.reverse();
    path
}
