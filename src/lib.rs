//! # layered-connect-four
//!
//! Connect Four played on a randomly generated layered directed graph instead
//! of a fixed grid.
//!
//! A board has `rows x cols` nodes. Edges only lead from one row to the next
//! and are drawn independently when the board is generated, so the board may
//! contain dead ends and isolated nodes. A piece dropped into a column enters
//! at the row-0 node and wanders down through randomly chosen free successors
//! until it can go no further. A player wins by owning four nodes connected
//! along the board's edges.
//!
//! ## Features
//!
//! - Seedable board generation with a tunable edge probability
//! - Random-walk piece drops that report the path taken
//! - Winner detection over connected same-player chains
//! - Per-column outlook estimates on speculative board copies
//! - Batch simulation with win counts, game length, centrality and isolate statistics
//!
//! ## Basic Usage
//!
//! ```
//! use layered_connect_four::{drop_piece, is_winner, BoardConfig, GraphBoard, Player};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! fn main() -> Result<(), layered_connect_four::BoardError> {
//!     let mut rng = StdRng::seed_from_u64(42);
//!     let config = BoardConfig::default().with_edge_probability(0.4);
//!     let mut board = GraphBoard::generate(&config, &mut rng)?;
//!
//!     let path = drop_piece(&mut board, 2, Player::Red, &mut rng)?;
//!     println!("piece came to rest at {}", path.resting_node());
//!     println!("{}", board);
//!
//!     assert!(!is_winner(&board, Player::Red));
//!     Ok(())
//! }
//! ```
//!
//! ## Running Experiments
//!
//! ```
//! use layered_connect_four::{BoardConfig, GameSimulator, SimulationConfig};
//!
//! fn main() -> Result<(), layered_connect_four::BoardError> {
//!     let config = SimulationConfig::default()
//!         .with_board(BoardConfig::default())
//!         .with_games(3)
//!         .with_seed(1);
//!
//!     let mut simulator = GameSimulator::new(config)?;
//!     for summary in simulator.sweep(&[0.3, 0.5])? {
//!         println!("{}", summary.summary());
//!     }
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod dropper;
pub mod estimate;
pub mod player;
pub mod simulation;
pub mod stats;
pub mod utils;
pub mod win;

pub use board::{GraphBoard, Node};
pub use config::{BoardConfig, SimulationConfig};
pub use dropper::{drop_piece, Path};
pub use estimate::{suggest_move, ColumnOutlook, ProbabilityEstimator};
pub use player::{Player, Winner};
pub use simulation::{ColumnPolicy, GameSimulator, RandomColumnPolicy, SuggestedColumnPolicy};
pub use stats::{ExperimentSummary, GameOutcome, SUMMARY_HEADERS};
pub use win::{is_winner, winning_nodes, CHAIN_LENGTH};

/// Error types for board operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    /// Board dimensions, edge probability or run parameters are out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The requested column cannot be played
    #[error("Invalid move in column {column}: {reason}")]
    InvalidMove {
        /// Column that was requested
        column: usize,
        /// Why the drop was rejected
        reason: String,
    },

    /// The board was asked to do something its current state forbids
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;
