//! Configuration options for boards and simulation runs
//!
//! This module defines the parameters that control board generation and
//! the batch simulation driver.

use crate::{BoardError, Result};

/// Shape and density of a generated board
///
/// # Example
///
/// ```
/// use layered_connect_four::BoardConfig;
///
/// let config = BoardConfig::default()
///     .with_rows(6)
///     .with_cols(6)
///     .with_edge_probability(0.4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    /// Number of layers; row 0 holds the entry nodes
    pub rows: usize,

    /// Number of nodes per layer, one per playable column
    pub cols: usize,

    /// Probability threshold for each candidate edge between adjacent layers
    ///
    /// Each candidate edge draws a value uniformly from (0.1, 0.9) and is kept
    /// when the draw is below this threshold, so values at or above 0.9 give
    /// complete layers and values at or below 0.1 give no edges at all.
    pub edge_probability: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 6,
            cols: 6,
            edge_probability: 0.3,
        }
    }
}

impl BoardConfig {
    /// Sets the number of rows
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the number of columns
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Sets the edge probability
    pub fn with_edge_probability(mut self, edge_probability: f64) -> Self {
        self.edge_probability = edge_probability;
        self
    }

    /// Total number of nodes on a board of this shape
    pub fn node_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Checks that the board can be generated
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::InvalidParameter(format!(
                "board dimensions must be non-zero, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(BoardError::InvalidParameter(format!(
                "board of {}x{} nodes is too large",
                self.rows, self.cols
            )));
        }
        if !(self.edge_probability > 0.0 && self.edge_probability <= 1.0) {
            return Err(BoardError::InvalidParameter(format!(
                "edge probability must be in (0, 1], got {}",
                self.edge_probability
            )));
        }
        Ok(())
    }
}

/// Configuration for a batch of simulated games
///
/// # Example
///
/// ```
/// use layered_connect_four::{BoardConfig, SimulationConfig};
///
/// let config = SimulationConfig::default()
///     .with_board(BoardConfig::default().with_edge_probability(0.35))
///     .with_games(100)
///     .with_seed(7);
/// assert_eq!(config.effective_move_limit(), 36);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Board used for every game
    pub board: BoardConfig,

    /// Number of games per experiment
    pub games: usize,

    /// Successful moves after which a game is declared a tie
    ///
    /// Defaults to one move per node when unset.
    pub move_limit: Option<usize>,

    /// Whether to compute and log both players' column estimates after every move
    ///
    /// This is informational only and multiplies the cost of each move.
    pub report_probabilities: bool,

    /// Number of regenerated boards averaged per reported estimate
    pub probability_trials: usize,

    /// Number of opponent checks per estimated column
    pub opponent_checks: usize,

    /// Seed for the random source; entropy is used when unset
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            board: BoardConfig::default(),
            games: 10,
            move_limit: None,
            report_probabilities: false,
            probability_trials: 50,
            opponent_checks: 100,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Sets the board configuration
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Sets the number of games per experiment
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Sets the move limit
    pub fn with_move_limit(mut self, move_limit: usize) -> Self {
        self.move_limit = Some(move_limit);
        self
    }

    /// Sets whether column estimates are reported after every move
    pub fn with_report_probabilities(mut self, report: bool) -> Self {
        self.report_probabilities = report;
        self
    }

    /// Sets the number of regenerated boards per reported estimate
    pub fn with_probability_trials(mut self, trials: usize) -> Self {
        self.probability_trials = trials;
        self
    }

    /// Sets the number of opponent checks per column
    pub fn with_opponent_checks(mut self, checks: usize) -> Self {
        self.opponent_checks = checks;
        self
    }

    /// Sets the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Move limit after applying the one-move-per-node default
    pub fn effective_move_limit(&self) -> usize {
        self.move_limit.unwrap_or_else(|| self.board.node_count())
    }

    /// Checks the board configuration and the run parameters
    pub fn validate(&self) -> Result<()> {
        self.board.validate()?;
        if self.games == 0 {
            return Err(BoardError::InvalidParameter(
                "at least one game is required".to_string(),
            ));
        }
        if self.report_probabilities && self.probability_trials == 0 {
            return Err(BoardError::InvalidParameter(
                "probability reporting needs at least one trial".to_string(),
            ));
        }
        Ok(())
    }
}
