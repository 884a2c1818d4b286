use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// Heap entry; ordering is reversed so the `BinaryHeap` pops the minimum
/// priority first, with the sequence number breaking ties in insertion order.
struct Entry<T> {
    item: T,
    priority: f64,
    seq: u64,
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

/// Min-priority queue with stable ties and decrease-key semantics.
///
/// `enqueue` lowers an item's priority when it is already queued; equal or
/// higher priorities leave the queue untouched so that ties keep favoring
/// whichever update happened first. Superseded heap entries are invalidated
/// lazily against the live-priority map on `dequeue`.
pub struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    live: HashMap<T, f64>,
    seq: u64,
}

impl<T> Frontier<T>
where
    T: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            seq: 0,
        }
    }

    /// Insert an item, or lower its priority if it is already queued.
    pub fn enqueue(&mut self, item: T, priority: f64) {
        if let Some(&current) = self.live.get(&item) {
            if priority >= current {
                return;
            }
        }
        self.live.insert(item.clone(), priority);
        self.seq += 1;
        self.heap.push(Entry {
            item,
            priority,
            seq: self.seq,
        });
    }

    /// Remove and return the item with the lowest priority.
    pub fn dequeue(&mut self) -> Option<T> {
        while let Some(entry) = self.heap.pop() {
            match self.live.get(&entry.item) {
                Some(&p) if p == entry.priority => {
                    self.live.remove(&entry.item);
                    return Some(entry.item);
                }
                // Stale entry, superseded by a lower priority or already removed.
                _ => {}
            }
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }
}

impl<T> Default for Frontier<T>
where
    T: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
