//! Priority-ordered worklist used by the informed search. Decrease-key is emulated by pushing a
//! fresh entry and remembering the best queued priority per node; superseded entries stay in the
//! heap and are dropped when they surface.
use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry<N, C> {
    pub priority: C,
    pub node: N,
}

impl<N: PartialEq, C: PartialEq> Eq for FrontierEntry<N, C> {}

impl<N: PartialEq, C: PartialEq> PartialEq for FrontierEntry<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.node.eq(&other.node)
    }
}

impl<N: Ord, C: Ord> PartialOrd for FrontierEntry<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, C: Ord> Ord for FrontierEntry<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the max-heap pops the smallest priority, then the smallest node
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.node.cmp(&self.node),
            s => s,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Frontier<N, C> {
    heap: BinaryHeap<FrontierEntry<N, C>>,
    queued: FxHashMap<N, C>,
}

impl<N: Ord + Hash + Copy, C: Ord + Copy> Default for Frontier<N, C> {
    fn default() -> Self {
        Frontier::new()
    }
}

impl<N, C> Frontier<N, C>
where
    N: Ord + Hash + Copy,
    C: Ord + Copy,
{
    pub fn new() -> Frontier<N, C> {
        Frontier {
            heap: BinaryHeap::new(),
            queued: FxHashMap::default(),
        }
    }

    /// Queues `node` at `priority`. If the node is already queued at an equal or better priority
    /// nothing happens and [false] is returned; otherwise the old entry becomes stale.
    pub fn push(&mut self, node: N, priority: C) -> bool {
        match self.queued.get(&node) {
            Some(&best) if best <= priority => false,
            _ => {
                self.queued.insert(node, priority);
                self.heap.push(FrontierEntry { priority, node });
                true
            }
        }
    }

    /// Removes and returns the live entry with the smallest priority, ties going to the smallest
    /// node.
    pub fn pop(&mut self) -> Option<FrontierEntry<N, C>> {
        while let Some(entry) = self.heap.pop() {
            if self.queued.get(&entry.node) == Some(&entry.priority) {
                self.queued.remove(&entry.node);
                return Some(entry);
            }
        }
        None
    }

    pub fn contains(&self, node: &N) -> bool {
        self.queued.contains_key(node)
    }

    /// The priority at which `node` is currently queued.
    pub fn priority(&self, node: &N) -> Option<C> {
        self.queued.get(node).copied()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }
}
