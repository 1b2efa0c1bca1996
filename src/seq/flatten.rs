use std::collections::VecDeque;

/// An element waiting to be placed in the flattened output.
struct Pending<T> {
    item: T,
    /// Position of the first slot after the parent (0 for top level elements).
    index: usize,
    depth: usize,
}

/// Flattens a forest into a single list, breadth first.
///
/// `child_selector` returns the children of a node, or `None` for a leaf.
/// Nodes are visited level by level, but each one is inserted relative to
/// its parent's position rather than appended: the children of a node are
/// placed right after it, shifted by the number of nodes of the same depth
/// that were already placed. For example, given the roots `[A, B]` where
/// `A` has the single child `C`, the output is `[A, C, B]`.
///
/// An absent `seq` yields `None`; a present but empty one yields an empty
/// list.
pub fn flatten_recursive<I, T, F, C>(seq: Option<I>, child_selector: F) -> Option<Vec<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Option<C>,
    C: IntoIterator<Item = T>,
{
    Some(flatten_forest(seq?, child_selector))
}

pub(crate) fn flatten_forest<I, T, F, C>(roots: I, mut child_selector: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Option<C>,
    C: IntoIterator<Item = T>,
{
    let mut queue: VecDeque<Pending<T>> = roots
        .into_iter()
        .map(|item| Pending {
            item,
            index: 0,
            depth: 0,
        })
        .collect();

    let mut result = Vec::with_capacity(queue.len());
    let mut depth_counter = 0;
    let mut previous_depth = 0;

    while let Some(Pending { item, index, depth }) = queue.pop_front() {
        if depth != previous_depth {
            depth_counter = 0;
        }
        let result_index = index + depth_counter;
        depth_counter += 1;

        // Every pending index points at most one past an already placed node
        // of the previous level, so this never goes past the end.
        debug_assert!(result_index <= result.len());

        for child in child_selector(&item).into_iter().flatten() {
            queue.push_back(Pending {
                item: child,
                index: result_index + 1,
                depth: depth + 1,
            });
        }
        result.insert(result_index, item);
        previous_depth = depth;
    }

    log::trace!(
        "Flattened {} nodes, deepest level {previous_depth}",
        result.len()
    );
    result
}
