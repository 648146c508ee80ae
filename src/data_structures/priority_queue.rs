use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue over dense vertex indices with lazy deletion.
///
/// A vertex can be pushed many times; only the entry carrying its best
/// priority is ever popped, and each vertex is popped at most once.
#[derive(Debug)]
pub struct LazyMinQueue<P>
where
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, usize)>>,
    /// Best priority pushed so far per vertex
    best: Vec<Option<P>>,
    /// Vertices already popped
    settled: Vec<bool>,
}

impl<P> LazyMinQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates an empty queue for vertices `0..vertices`
    pub fn new(vertices: usize) -> Self {
        LazyMinQueue {
            heap: BinaryHeap::with_capacity(vertices),
            best: vec![None; vertices],
            settled: vec![false; vertices],
        }
    }

    /// Offers `vertex` at `priority`. Returns false, and leaves the queue
    /// untouched, if the vertex is settled or already queued at least as low.
    pub fn push(&mut self, vertex: usize, priority: P) -> bool {
        if self.settled[vertex] {
            return false;
        }
        if let Some(best) = self.best[vertex] {
            if best <= priority {
                return false;
            }
        }
        self.best[vertex] = Some(priority);
        self.heap.push(Reverse((priority, vertex)));
        true
    }

    /// Removes the unsettled vertex with the lowest priority and settles it
    pub fn pop(&mut self) -> Option<(usize, P)> {
        while let Some(Reverse((priority, vertex))) = self.heap.pop() {
            if self.settled[vertex] || self.best[vertex] != Some(priority) {
                continue;
            }
            self.settled[vertex] = true;
            return Some((vertex, priority));
        }
        None
    }

    /// Returns true once `vertex` has been popped
    pub fn is_settled(&self, vertex: usize) -> bool {
        self.settled[vertex]
    }

    /// Number of heap entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_priority_order() {
        let mut queue = LazyMinQueue::new(4);
        queue.push(2, 5);
        queue.push(0, 1);
        queue.push(3, 3);
        assert_eq!(queue.pop(), Some((0, 1)));
        assert_eq!(queue.pop(), Some((3, 3)));
        assert_eq!(queue.pop(), Some((2, 5)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_stale_entries_are_skipped() {
        let mut queue = LazyMinQueue::new(3);
        assert!(queue.push(1, 10));
        assert!(queue.push(1, 4));
        assert!(!queue.push(1, 7));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.pop(), Some((1, 4)));
        assert!(queue.is_settled(1));
        assert!(!queue.push(1, 0));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }
}
