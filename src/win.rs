//! Winner detection
//!
//! A player wins once [`CHAIN_LENGTH`] of their pieces are connected along the
//! board's directed edges: starting from one of their nodes, following edges
//! into nodes they also own must reach enough distinct nodes. The chain may
//! branch; it does not have to be a straight line.

use crate::{
    board::{GraphBoard, Node},
    player::Player,
};

/// Number of connected pieces needed to win
pub const CHAIN_LENGTH: usize = 4;

/// Returns true if `player` owns a connected chain of [`CHAIN_LENGTH`] nodes
///
/// This only reads occupancy, so repeated calls on an unchanged board agree.
pub fn is_winner(board: &GraphBoard, player: Player) -> bool {
    let mut search = ChainSearch::new(board, player);
    (0..board.node_count()).any(|index| search.reaches_chain(index))
}

/// Returns true if a winning chain for `player` can be grown from `start`
pub fn has_chain_from(board: &GraphBoard, start: Node, player: Player) -> bool {
    match board.index(start) {
        Some(index) => ChainSearch::new(board, player).reaches_chain(index),
        None => false,
    }
}

/// Nodes reported as the winning area for `player`
///
/// For every owned node that starts a winning chain, all nodes reachable from
/// it in the full graph are listed (start first, breadth-first). Nodes reached
/// from several starts appear once per start.
pub fn winning_nodes(board: &GraphBoard, player: Player) -> Vec<Node> {
    let mut search = ChainSearch::new(board, player);
    let mut nodes = Vec::new();
    for index in 0..board.node_count() {
        if search.reaches_chain(index) {
            nodes.extend(board.reachable_from(board.node_at(index)));
        }
    }
    nodes
}

/// Depth-first search over the nodes owned by one player
///
/// The visited flags and stack are reused between start nodes; only the
/// entries touched by the previous search are reset.
struct ChainSearch<'a> {
    board: &'a GraphBoard,
    player: Player,
    visited: Vec<bool>,
    touched: Vec<usize>,
    stack: Vec<usize>,
}

impl<'a> ChainSearch<'a> {
    fn new(board: &'a GraphBoard, player: Player) -> Self {
        ChainSearch {
            board,
            player,
            visited: vec![false; board.node_count()],
            touched: Vec::with_capacity(CHAIN_LENGTH),
            stack: Vec::new(),
        }
    }

    fn owns(&self, index: usize) -> bool {
        self.board.occupant_at(index) == Some(self.player)
    }

    fn reaches_chain(&mut self, start: usize) -> bool {
        if !self.owns(start) {
            return false;
        }

        for index in self.touched.drain(..) {
            self.visited[index] = false;
        }
        self.stack.clear();

        let board = self.board;
        self.visited[start] = true;
        self.touched.push(start);
        self.stack.push(start);

        while let Some(index) = self.stack.pop() {
            if self.touched.len() >= CHAIN_LENGTH {
                return true;
            }
            for &next in board.successor_indices(index) {
                if !self.visited[next] && self.owns(next) {
                    self.visited[next] = true;
                    self.touched.push(next);
                    self.stack.push(next);
                }
            }
        }

        self.touched.len() >= CHAIN_LENGTH
    }
}
