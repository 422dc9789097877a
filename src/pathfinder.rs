use crate::{Distance, ElementId, Graph};
use fxhash::FxHasher;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::BuildHasherDefault;

/// Predecessor map produced by a search: every expanded element in visit
/// order, mapped to the element it was reached from (`None` for the
/// start). The end element is absent when the search exhausted the open
/// set without reaching it.
pub type Parents = IndexMap<ElementId, Option<ElementId>, BuildHasherDefault<FxHasher>>;

/// The step cost (and, symmetrically, the heuristic) between two graph
/// vertices: the selected metric measured between their cell centers.
#[inline]
#[must_use]
pub(crate) fn center_distance(
    graph: &Graph,
    distance: Distance,
    a: ElementId,
    b: ElementId,
) -> f64 {
    distance.calculate(graph.center(a), graph.center(b))
}

struct OpenEntry {
    estimated_cost: f64,
    cost: f64,
    seq: u32,
    element: ElementId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: smallest estimate first, then FIFO
        // among equal keys.
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// The open set of a best-first search: a min-heap on `f = g + h` with
/// FIFO tie-breaking. Re-inserting an element with a better key supersedes
/// the old entry; stale entries surface with an outdated `g` and are
/// skipped by the caller (lazy deletion).
pub(crate) struct OpenList {
    heap: BinaryHeap<OpenEntry>,
    seq: u32,
}

impl OpenList {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::with_capacity(512),
            seq: 0,
        }
    }

    pub fn push(&mut self, estimated_cost: f64, cost: f64, element: ElementId) {
        self.heap.push(OpenEntry {
            estimated_cost,
            cost,
            seq: self.seq,
            element,
        });
        self.seq += 1;
    }

    /// The element with the smallest estimate, along with the `g` value it
    /// was inserted with.
    pub fn pop(&mut self) -> Option<(ElementId, f64)> {
        self.heap.pop().map(|entry| (entry.element, entry.cost))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pops_smallest_estimate() {
        let mut open = OpenList::new();
        open.push(5.0, 5.0, ElementId(0));
        open.push(2.0, 2.0, ElementId(1));
        open.push(3.0, 3.0, ElementId(2));

        assert_eq!(open.pop(), Some((ElementId(1), 2.0)));
        assert_eq!(open.pop(), Some((ElementId(2), 3.0)));
        assert_eq!(open.pop(), Some((ElementId(0), 5.0)));
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn test_equal_keys_pop_fifo() {
        let mut open = OpenList::new();
        open.push(1.0, 1.0, ElementId(7));
        open.push(1.0, 1.0, ElementId(3));
        open.push(1.0, 1.0, ElementId(5));

        assert_eq!(open.pop(), Some((ElementId(7), 1.0)));
        assert_eq!(open.pop(), Some((ElementId(3), 1.0)));
        assert_eq!(open.pop(), Some((ElementId(5), 1.0)));
    }
}
