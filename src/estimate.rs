//! Per-column outlook estimates
//!
//! The estimator plays a hypothetical move into every open column on a copy of
//! the board and classifies the outcome as an immediate win, a position where
//! the opponent already has a winning chain, or neither. The live board is
//! never touched.

use std::collections::BTreeMap;

use rand::Rng;

use crate::{
    board::{GraphBoard, Node},
    dropper::drop_piece,
    player::Player,
    win::is_winner,
    Result,
};

/// Classification of a hypothetical move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOutlook {
    /// The move completes a chain for the mover
    Win,
    /// The opponent owns a chain after the move
    Loss,
    /// Neither side has a chain after the move
    Undecided,
}

impl ColumnOutlook {
    /// Probability value reported for this outcome
    pub fn probability(self) -> f64 {
        match self {
            ColumnOutlook::Win => 1.0,
            ColumnOutlook::Loss => 0.0,
            ColumnOutlook::Undecided => 0.5,
        }
    }
}

/// Monte Carlo estimator of per-column outcomes
///
/// # Example
///
/// ```
/// use layered_connect_four::{BoardConfig, GraphBoard, Player, ProbabilityEstimator};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// fn main() -> Result<(), layered_connect_four::BoardError> {
///     let mut rng = StdRng::seed_from_u64(3);
///     let board = GraphBoard::generate(&BoardConfig::default(), &mut rng)?;
///
///     let estimates = ProbabilityEstimator::default().estimate(&board, Player::Red, &mut rng)?;
///     assert_eq!(estimates.len(), 6);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbabilityEstimator {
    /// How many times the opponent's position is checked per column
    ///
    /// The check only reads the post-move board, so every check gives the same
    /// answer and any positive value behaves like a single check. Zero skips
    /// the opponent check entirely.
    pub opponent_checks: usize,

    /// Number of regenerated boards averaged by [`Self::estimate_averaged`]
    pub trials: usize,
}

impl Default for ProbabilityEstimator {
    fn default() -> Self {
        ProbabilityEstimator {
            opponent_checks: 100,
            trials: 50,
        }
    }
}

impl ProbabilityEstimator {
    /// Creates an estimator with the default check and trial counts
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of opponent checks
    pub fn with_opponent_checks(mut self, checks: usize) -> Self {
        self.opponent_checks = checks;
        self
    }

    /// Sets the number of trials for averaged estimates
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Classifies a hypothetical move by `player` into every open column
    ///
    /// Columns whose entry node is occupied are left out.
    pub fn column_outlooks<R: Rng + ?Sized>(
        &self,
        board: &GraphBoard,
        player: Player,
        rng: &mut R,
    ) -> Result<BTreeMap<usize, ColumnOutlook>> {
        let mut outlooks = BTreeMap::new();

        for column in board.open_columns() {
            let mut trial = board.clone();
            drop_piece(&mut trial, column, player, rng)?;

            let outlook = if is_winner(&trial, player) {
                ColumnOutlook::Win
            } else if self.opponent_checks > 0 && is_winner(&trial, player.opponent()) {
                ColumnOutlook::Loss
            } else {
                ColumnOutlook::Undecided
            };
            outlooks.insert(column, outlook);
        }

        Ok(outlooks)
    }

    /// Maps every open column to 1.0 (win), 0.0 (loss) or 0.5 (undecided)
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        board: &GraphBoard,
        player: Player,
        rng: &mut R,
    ) -> Result<BTreeMap<usize, f64>> {
        let estimates: BTreeMap<usize, f64> = self
            .column_outlooks(board, player, rng)?
            .into_iter()
            .map(|(column, outlook)| (column, outlook.probability()))
            .collect();

        log::debug!("column estimates for {}: {:?}", player, estimates);
        Ok(estimates)
    }

    /// Averages [`Self::estimate`] over freshly generated edge sets
    ///
    /// Each trial regenerates the board's edges with the same shape and edge
    /// probability while keeping the current occupancy. Only columns that are
    /// open on `board` are reported; with zero trials the map is empty.
    pub fn estimate_averaged<R: Rng + ?Sized>(
        &self,
        board: &GraphBoard,
        player: Player,
        rng: &mut R,
    ) -> Result<BTreeMap<usize, f64>> {
        if self.trials == 0 {
            return Ok(BTreeMap::new());
        }

        let mut totals: BTreeMap<usize, f64> =
            board.open_columns().into_iter().map(|column| (column, 0.0)).collect();

        for _ in 0..self.trials {
            let sample = board.regenerate(rng)?;
            for (column, probability) in self.estimate(&sample, player, rng)? {
                *totals.entry(column).or_insert(0.0) += probability;
            }
        }

        let trials = self.trials as f64;
        for total in totals.values_mut() {
            *total /= trials;
        }

        log::debug!(
            "averaged column estimates for {} over {} boards: {:?}",
            player,
            self.trials,
            totals
        );
        Ok(totals)
    }
}

/// Suggests a node for `player` with a simple neighbourhood heuristic
///
/// Each column is scanned from the bottom row upward; its lowest free node is
/// scored by how many of that node's successors `player` already owns. The
/// first node with the strictly highest score wins. Returns `None` once every
/// node is occupied.
pub fn suggest_move(board: &GraphBoard, player: Player) -> Option<Node> {
    let mut best: Option<(usize, Node)> = None;

    for col in 0..board.cols() {
        let lowest_free = (0..board.rows())
            .rev()
            .map(|row| Node::new(row, col))
            .find(|&node| !board.is_occupied(node));

        if let Some(node) = lowest_free {
            let score = board
                .neighbors(node)
                .filter(|&next| board.occupant_of(next) == Some(player))
                .count();
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, node));
            }
        }
    }

    best.map(|(_, node)| node)
}
