//! Resolving a column choice into a settled piece
//!
//! A dropped piece enters at the top of its column and keeps falling into a
//! randomly chosen free successor until none is left. The node where it stops
//! becomes the piece's resting node.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    board::{GraphBoard, Node},
    player::Player,
    BoardError, Result,
};

/// Nodes visited by one piece, from its entry node to its resting node
///
/// A path always holds at least the entry node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<Node>,
}

impl Path {
    /// All visited nodes in order, entry node first
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node the piece was dropped into
    pub fn entry(&self) -> Node {
        self.nodes[0]
    }

    /// The node the piece settled on
    pub fn resting_node(&self) -> Node {
        // Never empty: `drop_piece` always records the entry node first.
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of edges the piece travelled along
    pub fn steps(&self) -> usize {
        self.nodes.len() - 1
    }
}

/// Drops `player`'s piece into `column` and returns the path it took
///
/// Fails with [`BoardError::InvalidMove`] when `column` is off the board or
/// its entry node is already occupied. An entry node without free successors
/// keeps the piece in row 0.
pub fn drop_piece<R: Rng + ?Sized>(
    board: &mut GraphBoard,
    column: usize,
    player: Player,
    rng: &mut R,
) -> Result<Path> {
    if column >= board.cols() {
        return Err(BoardError::InvalidMove {
            column,
            reason: format!("columns range from 0 to {}", board.cols() - 1),
        });
    }

    let entry = board.entry_node(column);
    if board.is_occupied(entry) {
        return Err(BoardError::InvalidMove {
            column,
            reason: "entry node is already occupied".to_string(),
        });
    }

    let mut nodes = vec![entry];
    let mut current = entry;
    loop {
        let free: Vec<Node> = board
            .neighbors(current)
            .filter(|&next| !board.is_occupied(next))
            .collect();
        let Some(&next) = free.choose(rng) else {
            break;
        };
        nodes.push(next);
        current = next;
    }

    board.set_occupant(current, player)?;
    log::trace!(
        "{} dropped into column {} and came to rest at {} after {} steps",
        player,
        column,
        current,
        nodes.len() - 1
    );

    Ok(Path { nodes })
}
