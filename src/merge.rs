//! Concatenation of two subtrees.

use crate::node::Node;
use crate::rebalance::rebalance;

/// Joins `a` and `b` into a single tree representing `a`'s bytes followed by
/// `b`'s. Either side may be absent (an empty rope), in which case the other
/// side is returned unchanged — merge never allocates an internal node with
/// an implicit empty child.
pub(crate) fn merge(a: Option<Box<Node>>, b: Option<Box<Node>>) -> Option<Box<Node>> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(a), Some(b)) => {
            let a_height = a.height();
            let b_height = b.height();
            let node = Node::new_internal(a, b);
            if (a_height as i64 - b_height as i64).abs() > 1 {
                log::trace!(
                    "merge: joined heights {} and {} exceed skew threshold, rebalancing",
                    a_height,
                    b_height
                );
                Some(rebalance(node))
            } else {
                Some(node)
            }
        }
    }
}
