use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::cell::{CellIndex, Cost};

/// A frontier entry. Ordered by `priority` and then by insertion `sequence` only, so the cell it
/// refers to is never compared.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry {
    pub priority: Cost,
    pub sequence: u64,
    pub cell: CellIndex,
    /// The `g` the cell had when this entry was pushed.
    pub cost: Cost,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the smallest priority, and among equal priorities the
        // earliest insertion.
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Min-priority queue with FIFO tie-breaking. Sequence numbers are handed out by the frontier
/// itself, so no two entries ever compare equal.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    /// Pushes `cell` and returns the sequence number it was assigned.
    pub fn push(&mut self, priority: Cost, cell: CellIndex, cost: Cost) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            priority,
            sequence,
            cell,
            cost,
        });
        self.high_water = self.high_water.max(self.heap.len());
        sequence
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of entries held at once since the last [clear](Self::clear).
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
        self.high_water = 0;
    }
}
