//! Graph introspection and Graphviz export.
//!
//! [`trace`] enumerates the nodes and directed operand→result edges
//! reachable from a root, which together with [`crate::Tape::value_of`],
//! [`crate::Tape::grad_of`] and [`crate::Tape::op_label`] is the full read
//! interface an external visualizer needs. [`to_dot`] renders that view as a Graphviz
//! `digraph`: one record node per value (`data | grad`) and, for derived
//! values, a small circle node carrying the operation symbol.

use std::fmt::Write;

use num_traits::Float;

use crate::node::NodeId;
use crate::var::Var;

/// Collects the set of nodes and the set of operand→result edges
/// reachable from `root` by following operand edges. Nodes are listed in
/// discovery order, each exactly once.
pub fn trace<T: Float>(root: Var<'_, T>) -> (Vec<NodeId>, Vec<(NodeId, NodeId)>) {
    let tape = root.tape();
    let mut visited = vec![false; tape.len()];
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut stack = vec![root.id()];

    while let Some(id) = stack.pop() {
        if visited[id.index()] {
            continue;
        }
        visited[id.index()] = true;
        nodes.push(id);
        for operand in tape.operands(id) {
            edges.push((operand, id));
            stack.push(operand);
        }
    }
    (nodes, edges)
}

/// Renders the subgraph reachable from `root` in Graphviz dot format.
pub fn to_dot<T: Float + std::fmt::Display>(root: Var<'_, T>) -> String {
    let tape = root.tape();
    let (nodes, edges) = trace(root);

    let mut dot = String::from("digraph G {\n");
    dot.push_str("rankdir=LR;\n");
    dot.push_str("node [shape=record];\n");

    for &id in &nodes {
        let uid = id.index();
        let _ = writeln!(
            dot,
            "n{} [label=\"{{ data {:.4} | grad {:.4} }}\"];",
            uid,
            tape.value_of(id),
            tape.grad_of(id)
        );
        let op = tape.op_label(id);
        if !op.is_empty() {
            // Derived node: a separate circle carries the op symbol and
            // feeds the value record.
            let _ = writeln!(dot, "n{}_op [label=\"{}\", shape=circle];", uid, op);
            let _ = writeln!(dot, "n{}_op -> n{};", uid, uid);
        }
    }

    for (from, to) in edges {
        if tape.op_label(to).is_empty() {
            let _ = writeln!(dot, "n{} -> n{};", from.index(), to.index());
        } else {
            // Operands connect to the op circle of the node they produce.
            let _ = writeln!(dot, "n{} -> n{}_op;", from.index(), to.index());
        }
    }

    dot.push('}');
    dot
}
