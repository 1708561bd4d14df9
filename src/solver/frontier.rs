//! Frontier implementations
//!
//! Each frontier is a traversal discipline behind the same contract. Membership
//! is tracked by board state, not node identity, since different nodes can wrap
//! the same board.

use super::heuristic::manhattan_distance;
use super::tree::NodeId;
use crate::core::Board;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A node waiting to be admitted to the frontier
#[derive(Debug, Clone)]
pub struct Pending {
    pub node: NodeId,
    pub board: Board,
    pub depth: usize,
}

/// Discovered-but-not-yet-expanded nodes
pub trait Frontier {
    /// Queue a node holding `board` at `depth`
    fn push(&mut self, node: NodeId, board: Board, depth: usize);

    /// Remove the next node to expand
    fn pop(&mut self) -> Option<(NodeId, Board)>;

    /// Check if a node with this board is waiting in the frontier
    fn contains(&self, board: &Board) -> bool;

    /// Number of live entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Admit the siblings of one expansion, given in UDLR order
    fn extend(&mut self, batch: Vec<Pending>) {
        for pending in batch {
            self.push(pending.node, pending.board, pending.depth);
        }
    }

    /// Whether a state already waiting here should be queued again when reached at `depth`
    fn readmits(&self, _board: &Board, _depth: usize) -> bool {
        false
    }
}

/// First-in first-out queue (breadth-first search)
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<(NodeId, Board)>,
    pending: FxHashSet<Board>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: NodeId, board: Board, _depth: usize) {
        self.pending.insert(board.clone());
        self.queue.push_back((node, board));
    }

    fn pop(&mut self) -> Option<(NodeId, Board)> {
        let (node, board) = self.queue.pop_front()?;
        self.pending.remove(&board);
        Some((node, board))
    }

    fn contains(&self, board: &Board) -> bool {
        self.pending.contains(board)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last-in first-out stack (depth-first search)
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<(NodeId, Board)>,
    pending: FxHashSet<Board>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node: NodeId, board: Board, _depth: usize) {
        self.pending.insert(board.clone());
        self.stack.push((node, board));
    }

    fn pop(&mut self) -> Option<(NodeId, Board)> {
        let (node, board) = self.stack.pop()?;
        self.pending.remove(&board);
        Some((node, board))
    }

    fn contains(&self, board: &Board) -> bool {
        self.pending.contains(board)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    /// Pushed in reverse (RLDU) so that pops come out in UDLR order
    fn extend(&mut self, batch: Vec<Pending>) {
        for pending in batch.into_iter().rev() {
            self.push(pending.node, pending.board, pending.depth);
        }
    }
}

/// Heap entry ordered by `g + h`, then by insertion sequence
#[derive(Debug)]
struct Entry {
    priority: usize,
    seq: u64,
    g: usize,
    node: NodeId,
    board: Board,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: lowest priority first, earliest insertion on ties
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue keyed by `g + h` with stable tie-breaking (A*)
///
/// A state reached again with a strictly smaller `g` while still pending is
/// pushed again; the superseded heap entry is skipped when it surfaces.
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    pending: FxHashMap<Board, usize>,
    heuristic: fn(&Board) -> usize,
    next_seq: u64,
}

impl PriorityFrontier {
    #[must_use]
    pub fn new(heuristic: fn(&Board) -> usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            pending: FxHashMap::default(),
            heuristic,
            next_seq: 0,
        }
    }
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        Self::new(manhattan_distance)
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: NodeId, board: Board, depth: usize) {
        let g = depth;
        let h = (self.heuristic)(&board);
        let seq = self.next_seq;
        self.next_seq += 1;

        log::trace!("A* push: g={g} h={h} seq={seq}");
        self.pending.insert(board.clone(), g);
        self.heap.push(Entry {
            priority: g + h,
            seq,
            g,
            node,
            board,
        });
    }

    fn pop(&mut self) -> Option<(NodeId, Board)> {
        while let Some(entry) = self.heap.pop() {
            if self.pending.get(&entry.board) == Some(&entry.g) {
                self.pending.remove(&entry.board);
                return Some((entry.node, entry.board));
            }
        }
        None
    }

    fn contains(&self, board: &Board) -> bool {
        self.pending.contains_key(board)
    }

    fn len(&self) -> usize {
        self.pending.len()
    }

    fn readmits(&self, board: &Board, depth: usize) -> bool {
        self.pending.get(board).is_some_and(|&g| depth < g)
    }
}
