//! The Petersen graph: an outer 5-cycle, an inner pentagram and five spokes.
//!
//! Outer ring nodes are `0..5`; inner node `5 + i` hangs off outer node `i`.

pub(super) const NODE_COUNT: usize = 10;
pub(super) const EDGE_COUNT: usize = 15;
pub(super) const DEGREE: usize = 3;

/// Neighbours of every node in ascending order.
const NEIGHBOURS: [[usize; DEGREE]; NODE_COUNT] = [
    [1, 4, 5],
    [0, 2, 6],
    [1, 3, 7],
    [2, 4, 8],
    [0, 3, 9],
    [0, 7, 8],
    [1, 8, 9],
    [2, 5, 9],
    [3, 5, 6],
    [4, 6, 7],
];

pub(super) fn adjacent(a: usize, b: usize) -> bool {
    NEIGHBOURS.get(a).is_some_and(|row| row.contains(&b))
}

pub(super) fn neighbour(node: usize, position: usize) -> Option<usize> {
    NEIGHBOURS.get(node)?.get(position).copied()
}

/// Endpoints of edge `index`: the outer ring first, then the spokes, then the
/// inner pentagram.
pub(super) const fn edge(index: usize) -> Option<(usize, usize)> {
    if index >= EDGE_COUNT {
        return None;
    }
    let offset = index % 5;
    Some(match index / 5 {
        0 => (offset, (offset + 1) % 5),
        1 => (offset, offset + 5),
        _ => (5 + offset, 5 + (offset + 2) % 5),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn edge_table_agrees_with_adjacency() {
        for index in 0..EDGE_COUNT {
            let Some((a, b)) = edge(index) else {
                panic!("edge {index} missing");
            };
            assert!(adjacent(a, b), "edge {index} = ({a}, {b})");
            assert!(adjacent(b, a));
        }
        assert_eq!(edge(EDGE_COUNT), None);
    }

    #[test]
    fn adjacency_is_symmetric() {
        for (node, row) in NEIGHBOURS.iter().enumerate() {
            for &other in row {
                assert!(adjacent(other, node), "{other} should list {node}");
            }
        }
    }

    #[rstest]
    #[case::spoke(2, 7, true)]
    #[case::pentagram(5, 7, true)]
    #[case::outer_chord(0, 2, false)]
    #[case::self_loop(3, 3, false)]
    #[case::outside(10, 0, false)]
    fn adjacency_lookup(#[case] a: usize, #[case] b: usize, #[case] expected: bool) {
        assert_eq!(adjacent(a, b), expected);
    }
}
