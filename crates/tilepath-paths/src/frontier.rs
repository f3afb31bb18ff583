//! The A* open set and the node arena backing it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tilepath_core::Cell;

// ---------------------------------------------------------------------------
// SearchNode
// ---------------------------------------------------------------------------

/// A cell discovered during one search.
///
/// `parent` is an index into the same arena and is only followed backwards
/// to rebuild the path.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) cell: Cell,
    pub(crate) g: u64,
    pub(crate) h: u64,
    pub(crate) parent: Option<usize>,
    pub(crate) open: bool,
}

impl SearchNode {
    #[inline]
    pub(crate) fn f(&self) -> u64 {
        self.g + self.h
    }
}

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// `f`, then the lowest `h`, then the earliest discovered node.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: u64,
    h: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Open set keyed by flat cell index.
///
/// Nodes live in an arena in discovery order, so the arena index doubles as
/// the insertion-order tie-break. A cheaper route pushes a fresh heap entry;
/// superseded entries are skipped when popped.
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
    nodes: Vec<SearchNode>,
    /// Flat cell index -> arena index.
    by_cell: Vec<Option<usize>>,
    open: usize,
}

impl Frontier {
    /// Create an empty frontier for a grid of `len` cells.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            nodes: Vec::new(),
            by_cell: vec![None; len],
            open: 0,
        }
    }

    /// Number of nodes currently open.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.open
    }

    /// The node for flat cell index `ci`, if the cell has been discovered.
    /// Check [`SearchNode::open`] for open-set membership.
    #[inline]
    pub(crate) fn get(&self, ci: usize) -> Option<&SearchNode> {
        self.by_cell[ci].map(|ni| &self.nodes[ni])
    }

    #[inline]
    pub(crate) fn node(&self, ni: usize) -> &SearchNode {
        &self.nodes[ni]
    }

    /// Insert a newly discovered cell, or lower the cost of an open one.
    ///
    /// Returns `true` if the frontier changed. An open node whose `g` is
    /// already at most `g` is left untouched, as is a node that was already
    /// extracted.
    pub(crate) fn insert_or_update(
        &mut self,
        ci: usize,
        cell: Cell,
        g: u64,
        h: u64,
        parent: Option<usize>,
    ) -> bool {
        let ni = match self.by_cell[ci] {
            Some(ni) => {
                let n = &mut self.nodes[ni];
                if !n.open || g >= n.g {
                    return false;
                }
                n.g = g;
                n.parent = parent;
                ni
            }
            None => {
                let ni = self.nodes.len();
                self.nodes.push(SearchNode {
                    cell,
                    g,
                    h,
                    parent,
                    open: true,
                });
                self.by_cell[ci] = Some(ni);
                self.open += 1;
                ni
            }
        };
        let n = &self.nodes[ni];
        self.heap.push(NodeRef {
            idx: ni,
            f: n.f(),
            h: n.h,
        });
        true
    }

    /// Remove and return the arena index of the best open node.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            let n = &mut self.nodes[entry.idx];
            // Skip stale entries.
            if !n.open || n.f() != entry.f {
                continue;
            }
            n.open = false;
            self.open -= 1;
            return Some(entry.idx);
        }
        None
    }

    /// Follow parent links from `ni` back to the root and return the cells
    /// root-first.
    pub(crate) fn path_to(&self, ni: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cur = Some(ni);
        while let Some(i) = cur {
            let n = &self.nodes[i];
            path.push(n.cell);
            cur = n.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(i: usize) -> Cell {
        Cell::new(i as u32, 0)
    }

    fn drain(fr: &mut Frontier) -> Vec<Cell> {
        let mut out = Vec::new();
        while let Some(ni) = fr.pop() {
            out.push(fr.node(ni).cell);
        }
        out
    }

    #[test]
    fn pops_lowest_f_first() {
        let mut fr = Frontier::new(4);
        fr.insert_or_update(0, cell(0), 3, 3, None);
        fr.insert_or_update(1, cell(1), 1, 1, None);
        fr.insert_or_update(2, cell(2), 2, 2, None);
        assert_eq!(fr.len(), 3);

        assert_eq!(drain(&mut fr), vec![cell(1), cell(2), cell(0)]);
        assert_eq!(fr.len(), 0);
    }

    #[test]
    fn equal_f_prefers_lower_h() {
        let mut fr = Frontier::new(2);
        fr.insert_or_update(0, cell(0), 1, 3, None);
        fr.insert_or_update(1, cell(1), 3, 1, None);
        let ni = fr.pop().unwrap();
        assert_eq!(fr.node(ni).cell, cell(1));
    }

    #[test]
    fn equal_f_and_h_prefers_earlier_discovery() {
        let mut fr = Frontier::new(3);
        fr.insert_or_update(2, cell(2), 2, 2, None);
        fr.insert_or_update(0, cell(0), 2, 2, None);
        fr.insert_or_update(1, cell(1), 2, 2, None);
        assert_eq!(drain(&mut fr), vec![cell(2), cell(0), cell(1)]);
    }

    #[test]
    fn update_keeps_discovery_order() {
        let mut fr = Frontier::new(2);
        fr.insert_or_update(0, cell(0), 5, 1, None);
        fr.insert_or_update(1, cell(1), 3, 1, None);
        // Lower cell 0 to the same f as cell 1: it was discovered first.
        assert!(fr.insert_or_update(0, cell(0), 3, 1, Some(1)));
        let ni = fr.pop().unwrap();
        assert_eq!(fr.node(ni).cell, cell(0));
        assert_eq!(fr.node(ni).parent, Some(1));
        // The stale entry for cell 0 is skipped.
        let ni = fr.pop().unwrap();
        assert_eq!(fr.node(ni).cell, cell(1));
        assert_eq!(fr.pop(), None);
    }

    #[test]
    fn update_ignores_costlier_and_closed() {
        let mut fr = Frontier::new(1);
        assert!(fr.insert_or_update(0, cell(0), 2, 0, None));
        assert!(!fr.insert_or_update(0, cell(0), 2, 0, None));
        assert!(!fr.insert_or_update(0, cell(0), 4, 0, None));
        assert!(fr.get(0).is_some_and(|n| n.open));

        fr.pop().unwrap();
        assert!(fr.get(0).is_some_and(|n| !n.open));
        assert!(!fr.insert_or_update(0, cell(0), 0, 0, None));
        assert_eq!(fr.get(0).map(|n| n.g), Some(2));
        assert_eq!(fr.len(), 0);
    }

    #[test]
    fn path_to_follows_parents() {
        let mut fr = Frontier::new(3);
        fr.insert_or_update(0, cell(0), 0, 2, None);
        let a = fr.pop().unwrap();
        fr.insert_or_update(1, cell(1), 1, 1, Some(a));
        let b = fr.pop().unwrap();
        fr.insert_or_update(2, cell(2), 2, 0, Some(b));
        let c = fr.pop().unwrap();
        assert_eq!(fr.path_to(c), vec![cell(0), cell(1), cell(2)]);
    }
}
