/// Binary tree build / checksum / release.
///
/// Each node exclusively owns its children. Release consumes the tree
/// and frees children before their parent.

use tracing::debug;

/// Tree depth used by the suite.
pub const DEFAULT_DEPTH: u32 = 18;

/// Tree node. Leaves have no children and value 1; internal nodes have
/// both children and value 0.
#[derive(Debug)]
pub struct Node {
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
    pub value: i32,
}

/// Build a perfect tree of the given depth, top-down.
pub fn build_tree(depth: u32) -> Box<Node> {
    if depth == 0 {
        return Box::new(Node {
            left: None,
            right: None,
            value: 1,
        });
    }
    Box::new(Node {
        left: Some(build_tree(depth - 1)),
        right: Some(build_tree(depth - 1)),
        value: 0,
    })
}

/// A node without a left child contributes its own value; otherwise the
/// sum of its children's checksums.
pub fn check_tree(node: &Node) -> i64 {
    match &node.left {
        None => i64::from(node.value),
        Some(left) => {
            check_tree(left) + node.right.as_deref().map_or(0, check_tree)
        }
    }
}

/// Number of nodes reachable from `node`, itself included.
pub fn node_count(node: &Node) -> u64 {
    1 + node.left.as_deref().map_or(0, node_count)
        + node.right.as_deref().map_or(0, node_count)
}

/// Consume the tree, dropping children before each parent.
/// Returns the number of nodes released.
pub fn release_tree(mut node: Box<Node>) -> u64 {
    let mut released = 0;
    if let Some(left) = node.left.take() {
        released += release_tree(left);
    }
    if let Some(right) = node.right.take() {
        released += release_tree(right);
    }
    drop(node);
    released + 1
}

/// Build, checksum, and release a tree of `depth`. Returns the checksum.
pub fn tree_checksum(depth: u32) -> i64 {
    let tree = build_tree(depth);
    let checksum = check_tree(&tree);
    let released = release_tree(tree);
    debug!(depth, checksum, released, "tree complete");
    checksum
}

pub fn report_lines(checksum: i64) -> Vec<String> {
    vec![format!("Checksum: {}", checksum)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf() {
        let leaf = build_tree(0);
        assert!(leaf.left.is_none() && leaf.right.is_none());
        assert_eq!(leaf.value, 1);
        assert_eq!(check_tree(&leaf), 1);
        assert_eq!(release_tree(leaf), 1);
    }

    #[test]
    fn test_checksum_is_leaf_count() {
        for depth in 0..=10 {
            assert_eq!(tree_checksum(depth), 1i64 << depth);
        }
    }

    #[test]
    fn test_every_node_released_once() {
        let depth = 12;
        let tree = build_tree(depth);
        let expected = (1u64 << (depth + 1)) - 1;
        assert_eq!(node_count(&tree), expected);
        assert_eq!(release_tree(tree), expected);
    }

    #[test]
    fn test_internal_nodes_hold_zero() {
        let tree = build_tree(2);
        assert_eq!(tree.value, 0);
        assert_eq!(tree.left.as_ref().unwrap().value, 0);
    }

    #[test]
    fn test_reference_depth() {
        let checksum = tree_checksum(DEFAULT_DEPTH);
        assert_eq!(checksum, 262_144);
        assert_eq!(report_lines(checksum), vec!["Checksum: 262144"]);
    }
}
