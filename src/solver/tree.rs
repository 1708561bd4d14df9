//! Search tree arena
//!
//! Nodes are stored in a flat `Vec` and refer to their parent by index, so the
//! tree has no reference cycles and is dropped in one go when the search ends.

use crate::core::{Board, Move};

/// Index of a node inside a [`SearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A search-tree record, immutable once created
#[derive(Debug, Clone)]
pub struct Node {
    pub board: Board,
    pub parent: Option<NodeId>,
    pub action: Option<Move>,
    pub depth: usize,
}

/// Arena owning every node created during one search
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the root (depth 0, no parent)
    pub fn add_root(&mut self, board: Board) -> NodeId {
        self.push(Node {
            board,
            parent: None,
            action: None,
            depth: 0,
        })
    }

    /// Insert a child reached from `parent` by `action`
    ///
    /// # Panics
    /// Panics if `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: NodeId, action: Move, board: Board) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        self.push(Node {
            board,
            parent: Some(parent),
            action: Some(action),
            depth,
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Moves from the root to `id`, in play order
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.get(id).depth);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            moves.extend(node.action);
            current = node.parent;
        }
        moves.reverse();
        moves
    }
}
