//! Topological ordering of the computation graph.

use log::trace;
use num_traits::Float;

use crate::node::{Node, NodeId};

/// Builds a post-order (topological) sort of the subgraph reachable from
/// `root` by following operand edges: every node appears after all of its
/// operands, and — thanks to the visited set — only once, even when it is
/// reachable via multiple paths of a diamond-shaped shared subgraph.
///
/// The traversal is an explicit-stack depth-first walk; node indices are
/// dense tape positions, so a plain boolean vector serves as the visited
/// set.
pub(crate) fn topological_sort<T: Float>(nodes: &[Node<T>], root: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; nodes.len()];
    let mut order = Vec::new();
    // (node, expanded): a node is pushed once to expand its operands and
    // once more, after them, to be appended to the order.
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            trace!("topo: emit node {}", id.index());
            order.push(id);
            continue;
        }
        if visited[id.0] {
            continue;
        }
        visited[id.0] = true;
        stack.push((id, true));
        for operand in nodes[id.0].op.operands() {
            stack.push((operand, false));
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tape::Tape;

    fn order_positions(order: &[NodeId]) -> Vec<usize> {
        let mut pos = vec![usize::MAX; order.len()];
        for (i, id) in order.iter().enumerate() {
            if id.index() < pos.len() {
                pos[id.index()] = i;
            }
        }
        pos
    }

    #[test]
    fn every_node_appears_once_and_after_its_operands() {
        let tape: Tape<f64> = Tape::new();
        let a = tape.leaf(1.0);
        let b = tape.leaf(2.0);
        let sum = a + b;
        let prod = a * b;
        let root = sum + prod;

        let nodes = tape.nodes.borrow();
        let order = topological_sort(&nodes, root.id());

        // Diamond over a and b: 5 distinct nodes, no duplicates.
        assert_eq!(order.len(), 5);
        let pos = order_positions(&order);
        for id in &order {
            for operand in nodes[id.index()].op.operands() {
                assert!(
                    pos[operand.index()] < pos[id.index()],
                    "operand {} must precede node {}",
                    operand.index(),
                    id.index()
                );
            }
        }
        assert_eq!(*order.last().unwrap(), root.id());
    }

    #[test]
    fn sort_from_a_leaf_is_the_leaf_alone() {
        let tape: Tape<f64> = Tape::new();
        let a = tape.leaf(1.0);
        let _unrelated = tape.leaf(2.0);

        let nodes = tape.nodes.borrow();
        let order = topological_sort(&nodes, a.id());
        assert_eq!(order, vec![a.id()]);
    }

    #[test]
    fn unreachable_nodes_are_not_visited() {
        let tape: Tape<f64> = Tape::new();
        let a = tape.leaf(1.0);
        let b = tape.leaf(2.0);
        let y = a * a;
        let _other = a + b;

        let nodes = tape.nodes.borrow();
        let order = topological_sort(&nodes, y.id());
        assert_eq!(order.len(), 2);
        assert!(!order.contains(&b.id()));
    }
}
