//! Per-game outcomes and per-experiment summaries
//!
//! This module collects the figures reported for a batch of simulated games:
//! win counts, average game length, centrality of the winning area and the
//! number of isolated nodes.

use crate::{
    player::{Player, Winner},
    utils::{mean, win_rate},
};

/// Column names of one summary row, in the order of [`ExperimentSummary::values`]
pub const SUMMARY_HEADERS: [&str; 7] = [
    "P Value",
    "Player R Wins",
    "Player B Wins",
    "Ties",
    "Avg No. of Moves",
    "Avg Degree Centrality",
    "Avg Isolate count",
];

/// Result of one finished game
#[derive(Debug, Clone, PartialEq)]
pub struct GameOutcome {
    /// Winning player, or a tie
    pub winner: Winner,

    /// Number of moves made before the game ended
    ///
    /// The winning move itself is not counted, so a win on the first move
    /// reports 0.
    pub move_count: usize,

    /// Degree centrality of every node in the winning area; empty for ties
    pub winning_node_centralities: Vec<f64>,

    /// Number of isolated nodes on the game's board
    pub isolate_count: usize,
}

/// Aggregated statistics for a batch of games at one edge probability
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentSummary {
    /// Edge probability the boards were generated with
    pub p_value: f64,

    /// Games won by red
    pub red_wins: usize,

    /// Games won by blue
    pub blue_wins: usize,

    /// Games that ended without a winner
    pub ties: usize,

    /// Number of games recorded
    pub games: usize,

    total_moves: usize,
    centralities: Vec<f64>,
    isolate_counts: Vec<usize>,
}

impl ExperimentSummary {
    /// Creates an empty summary for the given edge probability
    pub fn new(p_value: f64) -> Self {
        ExperimentSummary {
            p_value,
            red_wins: 0,
            blue_wins: 0,
            ties: 0,
            games: 0,
            total_moves: 0,
            centralities: Vec::new(),
            isolate_counts: Vec::new(),
        }
    }

    /// Adds one finished game
    pub fn record(&mut self, outcome: &GameOutcome) {
        match outcome.winner {
            Winner::Player(Player::Red) => self.red_wins += 1,
            Winner::Player(Player::Blue) => self.blue_wins += 1,
            Winner::Tie => self.ties += 1,
        }
        self.games += 1;
        self.total_moves += outcome.move_count;
        self.centralities
            .extend_from_slice(&outcome.winning_node_centralities);
        self.isolate_counts.push(outcome.isolate_count);
    }

    /// Games won by `player`
    pub fn wins_for(&self, player: Player) -> usize {
        match player {
            Player::Red => self.red_wins,
            Player::Blue => self.blue_wins,
        }
    }

    /// Fraction of games won by `player`
    pub fn win_rate(&self, player: Player) -> f64 {
        win_rate(self.wins_for(player), self.games)
    }

    /// Average number of moves per game
    pub fn avg_moves(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }

    /// Average degree centrality over all winning-area nodes of all games
    pub fn avg_degree_centrality(&self) -> f64 {
        mean(&self.centralities)
    }

    /// Average isolate count per game
    pub fn avg_isolate_count(&self) -> f64 {
        let counts: Vec<f64> = self.isolate_counts.iter().map(|&c| c as f64).collect();
        mean(&counts)
    }

    /// Row values matching [`SUMMARY_HEADERS`]
    pub fn values(&self) -> [f64; 7] {
        [
            self.p_value,
            self.red_wins as f64,
            self.blue_wins as f64,
            self.ties as f64,
            self.avg_moves(),
            self.avg_degree_centrality(),
            self.avg_isolate_count(),
        ]
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Experiment Summary (p = {}):\n\
             - Games: {}\n\
             - Player R wins: {} ({:.1}%)\n\
             - Player B wins: {} ({:.1}%)\n\
             - Ties: {}\n\
             - Avg moves: {:.2}\n\
             - Avg degree centrality: {:.4}\n\
             - Avg isolate count: {:.2}",
            self.p_value,
            self.games,
            self.red_wins,
            self.win_rate(Player::Red) * 100.0,
            self.blue_wins,
            self.win_rate(Player::Blue) * 100.0,
            self.ties,
            self.avg_moves(),
            self.avg_degree_centrality(),
            self.avg_isolate_count()
        )
    }
}
