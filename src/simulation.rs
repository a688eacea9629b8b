//! Batch simulation of complete games
//!
//! [`GameSimulator`] plays games end to end: it generates a board, lets a
//! [`ColumnPolicy`] pick a column for each player in turn, drops the piece and
//! checks for a winner. Finished games are folded into an
//! [`ExperimentSummary`].

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

use crate::{
    board::GraphBoard,
    config::SimulationConfig,
    dropper::drop_piece,
    estimate::{suggest_move, ProbabilityEstimator},
    player::{Player, Winner},
    stats::{ExperimentSummary, GameOutcome},
    win::{is_winner, winning_nodes},
    Result,
};

/// Trait for strategies that pick the column to play
pub trait ColumnPolicy: Send + Sync {
    /// Picks a column for `player`, or `None` if there is nothing to play
    fn choose_column(
        &self,
        board: &GraphBoard,
        player: Player,
        rng: &mut dyn RngCore,
    ) -> Option<usize>;
}

/// Plays a uniformly random column among those with a free entry node
#[derive(Debug, Clone, Default)]
pub struct RandomColumnPolicy;

impl RandomColumnPolicy {
    /// Creates a new random policy
    pub fn new() -> Self {
        RandomColumnPolicy
    }
}

impl ColumnPolicy for RandomColumnPolicy {
    fn choose_column(
        &self,
        board: &GraphBoard,
        _player: Player,
        rng: &mut dyn RngCore,
    ) -> Option<usize> {
        board.open_columns().choose(rng).copied()
    }
}

/// Plays the column of [`suggest_move`] when its entry node is free
///
/// Falls back to a random open column otherwise.
#[derive(Debug, Clone, Default)]
pub struct SuggestedColumnPolicy;

impl SuggestedColumnPolicy {
    /// Creates a new suggestion-following policy
    pub fn new() -> Self {
        SuggestedColumnPolicy
    }
}

impl ColumnPolicy for SuggestedColumnPolicy {
    fn choose_column(
        &self,
        board: &GraphBoard,
        player: Player,
        rng: &mut dyn RngCore,
    ) -> Option<usize> {
        match suggest_move(board, player) {
            Some(node) if !board.is_occupied(board.entry_node(node.col)) => Some(node.col),
            _ => RandomColumnPolicy.choose_column(board, player, rng),
        }
    }
}

impl ColumnPolicy for Box<dyn ColumnPolicy> {
    fn choose_column(
        &self,
        board: &GraphBoard,
        player: Player,
        rng: &mut dyn RngCore,
    ) -> Option<usize> {
        (**self).choose_column(board, player, rng)
    }
}

/// Drives complete games and aggregates their outcomes
///
/// # Example
///
/// ```
/// use layered_connect_four::{GameSimulator, SimulationConfig};
///
/// fn main() -> Result<(), layered_connect_four::BoardError> {
///     let config = SimulationConfig::default().with_games(5).with_seed(11);
///     let mut simulator = GameSimulator::new(config)?;
///
///     let summary = simulator.run()?;
///     assert_eq!(summary.games, 5);
///     println!("{}", summary.summary());
///     Ok(())
/// }
/// ```
pub struct GameSimulator {
    config: SimulationConfig,
    rng: StdRng,
    policy: Box<dyn ColumnPolicy>,
    estimator: ProbabilityEstimator,
}

impl GameSimulator {
    /// Creates a simulator playing random columns
    ///
    /// The random source is seeded from `config.seed` when set.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let estimator = ProbabilityEstimator::new()
            .with_opponent_checks(config.opponent_checks)
            .with_trials(config.probability_trials);

        Ok(GameSimulator {
            config,
            rng,
            policy: Box::new(RandomColumnPolicy::new()),
            estimator,
        })
    }

    /// Sets the policy both players use to pick columns
    pub fn with_policy<P: ColumnPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Returns the configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Plays one game on a freshly generated board
    pub fn play_game(&mut self) -> Result<GameOutcome> {
        let mut board = GraphBoard::generate(&self.config.board, &mut self.rng)?;
        let move_limit = self.config.effective_move_limit();
        let isolate_count = board.isolate_count();
        let mut turn = 0;

        while turn < move_limit {
            let player = Player::for_turn(turn);
            let Some(column) = self.policy.choose_column(&board, player, &mut self.rng) else {
                log::debug!("no open column left after {} moves", turn);
                break;
            };

            let path = drop_piece(&mut board, column, player, &mut self.rng)?;
            log::debug!(
                "move {}: {} played column {} and landed on {}",
                turn,
                player,
                column,
                path.resting_node()
            );

            if self.config.report_probabilities {
                self.report_estimates(&board, player)?;
            }

            if is_winner(&board, player) {
                let winning_node_centralities = winning_nodes(&board, player)
                    .into_iter()
                    .map(|node| board.degree_centrality(node))
                    .collect();
                return Ok(GameOutcome {
                    winner: Winner::Player(player),
                    move_count: turn,
                    winning_node_centralities,
                    isolate_count,
                });
            }

            turn += 1;
        }

        Ok(GameOutcome {
            winner: Winner::Tie,
            move_count: turn,
            winning_node_centralities: Vec::new(),
            isolate_count,
        })
    }

    fn report_estimates(&mut self, board: &GraphBoard, player: Player) -> Result<()> {
        for side in [player, player.opponent()] {
            let estimates = self
                .estimator
                .estimate_averaged(board, side, &mut self.rng)?;
            log::debug!("win probabilities for {}: {:?}", side, estimates);
        }
        Ok(())
    }

    /// Plays the configured number of games and summarises them
    pub fn run(&mut self) -> Result<ExperimentSummary> {
        let mut summary = ExperimentSummary::new(self.config.board.edge_probability);

        for game in 0..self.config.games {
            let outcome = self.play_game()?;
            log::debug!(
                "game {}: winner {} after {} moves",
                game,
                outcome.winner,
                outcome.move_count
            );
            summary.record(&outcome);
        }

        log::info!(
            "p = {}: R {} / B {} / ties {} over {} games",
            summary.p_value,
            summary.red_wins,
            summary.blue_wins,
            summary.ties,
            summary.games
        );
        Ok(summary)
    }

    /// Runs one experiment per edge probability
    ///
    /// The board configuration is restored afterwards.
    pub fn sweep(&mut self, p_values: &[f64]) -> Result<Vec<ExperimentSummary>> {
        let original = self.config.board;
        let mut summaries = Vec::with_capacity(p_values.len());

        for &p_value in p_values {
            self.config.board = original.with_edge_probability(p_value);
            let result = self.config.board.validate().and_then(|()| self.run());
            match result {
                Ok(summary) => summaries.push(summary),
                Err(err) => {
                    self.config.board = original;
                    return Err(err);
                }
            }
        }

        self.config.board = original;
        Ok(summaries)
    }
}
