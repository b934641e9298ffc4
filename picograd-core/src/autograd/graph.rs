use crate::error::PicoGradError;
use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;
use std::collections::HashSet;
use std::sync::RwLock;

/// Identity of a node in the computation graph: the address of its shared
/// state. Stable across handle clones, usable as a set/map key.
pub type NodeId = *const RwLock<ScalarData>;

/// Builds a topological ordering of every node reachable from `root`
/// through predecessor edges: for each edge predecessor -> node, the
/// predecessor appears earlier in the returned list.
///
/// The traversal is a post-order depth-first search driven by an explicit
/// work stack. Graphs routinely contain one node per elementary operation,
/// so chains tens of thousands of nodes deep are normal; native call-stack
/// recursion is not an option here.
pub(crate) fn topological_sort(root: &Scalar) -> Vec<Scalar> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<Scalar> = Vec::new();
    // (node, expanded): a node is pushed once to expand its predecessors
    // and a second time, after them, to be appended to the order.
    let mut stack: Vec<(Scalar, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            order.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let grad_fn = node.read_data().grad_fn.clone();
        stack.push((node, true));
        if let Some(grad_fn) = grad_fn {
            for input in grad_fn.inputs() {
                if !visited.contains(&input.node_id()) {
                    stack.push((input, false));
                }
            }
        }
    }
    order
}

/// Runs the backward pass from `root`.
///
/// Seeds `root.grad = 1.0` (the derivative of the root with respect to
/// itself), then walks the topological order in reverse, invoking each
/// node's backward record exactly once and accumulating its contributions
/// into the predecessors' gradient fields. Reverse topological order
/// guarantees a node's own gradient is complete before it propagates.
///
/// Gradients are never reset here: the caller zeroes them between
/// independent passes, and repeated passes over shared nodes accumulate.
pub(crate) fn backward_pass(root: &Scalar) -> Result<(), PicoGradError> {
    let order = topological_sort(root);
    log::debug!("backward pass over {} node(s)", order.len());

    root.write_data().grad = 1.0;

    for node in order.iter().rev() {
        let (grad_output, grad_fn) = {
            let guard = node.read_data();
            (guard.grad, guard.grad_fn.clone())
        };
        let Some(grad_fn) = grad_fn else {
            continue;
        };

        let contributions = grad_fn.backward(grad_output)?;
        let inputs = grad_fn.inputs();
        if contributions.len() != inputs.len() {
            return Err(PicoGradError::BackwardError(format!(
                "operation '{}' returned {} gradient(s) for {} input(s)",
                node.op(),
                contributions.len(),
                inputs.len()
            )));
        }
        for (input, contribution) in inputs.iter().zip(contributions) {
            input.write_data().grad += contribution;
        }
    }
    Ok(())
}
