//! Index arithmetic for complete `k`-ary trees stored in level order.

use std::ops::Range;

/// Returns `1 + k + k^2 + ... + k^height`, or `None` on overflow.
pub(super) fn node_count(height: usize, branching: usize) -> Option<usize> {
    match branching {
        0 => return Some(1),
        1 => return height.checked_add(1),
        _ => {}
    }
    // Levels at least double, so overflow ends the loop within the word size.
    let mut total: usize = 1;
    let mut level: usize = 1;
    for _ in 0..height {
        level = level.checked_mul(branching)?;
        total = total.checked_add(level)?;
    }
    Some(total)
}

pub(super) fn parent(child: usize, branching: usize) -> Option<usize> {
    child.checked_sub(1).map(|previous| previous / branching)
}

/// Index the first child of `node` would have, ignoring the node count.
pub(super) fn first_child(node: usize, branching: usize) -> Option<usize> {
    node.checked_mul(branching)?.checked_add(1)
}

pub(super) fn children(node: usize, branching: usize, node_count: usize) -> Range<usize> {
    match first_child(node, branching) {
        Some(first) if first < node_count => {
            first..first.saturating_add(branching).min(node_count)
        }
        _ => 0..0,
    }
}

pub(super) fn depth(node: usize, branching: usize) -> usize {
    if branching == 1 {
        return node;
    }
    let mut depth = 0;
    let mut current = node;
    while let Some(up) = parent(current, branching) {
        current = up;
        depth += 1;
    }
    depth
}
