use std::cmp::Ordering;

use gridstar_core::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    Open,
    Closed,
}

/// Per-cell search record, created on first discovery.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: Option<Point>,
    /// Discovery order, used to break `f` ties.
    pub(crate) seq: u64,
    pub(crate) state: NodeState,
}

/// Heap entry ordered by `f`, then discovery order.
///
/// Entries are never updated in place: an improved node is pushed again and
/// the outdated entry is recognised as stale when popped.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) cell: Point,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl NodeRef {
    /// Whether this entry still describes `node`.
    #[inline]
    pub(crate) fn is_current(&self, node: &Node) -> bool {
        node.state == NodeState::Open && node.f.to_bits() == self.f.to_bits()
    }
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest, first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}
