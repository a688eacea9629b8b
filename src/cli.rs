//! Command-line arguments for batch simulation runs

use clap::Parser;

use crate::{
    config::{BoardConfig, SimulationConfig},
    simulation::{ColumnPolicy, RandomColumnPolicy, SuggestedColumnPolicy},
};

/// Play many games at a range of edge probabilities and print one summary row per value
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "batch_simulation", about = "Simulate layered Connect Four games")]
pub struct BatchArgs {
    /// Number of games per edge probability
    #[arg(default_value_t = 100)]
    pub games: usize,

    /// Play the heuristic suggestion instead of a random column
    #[arg(long)]
    pub suggest: bool,

    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Regenerated boards per reported column estimate
    #[arg(long, default_value_t = 10)]
    pub trials: usize,
}

impl BatchArgs {
    /// Builds the simulation configuration these arguments describe
    pub fn simulation_config(&self, report_probabilities: bool) -> SimulationConfig {
        let config = SimulationConfig::default()
            .with_board(BoardConfig::default())
            .with_games(self.games)
            .with_report_probabilities(report_probabilities)
            .with_probability_trials(self.trials);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Column policy selected by `--suggest`
    pub fn policy(&self) -> Box<dyn ColumnPolicy> {
        if self.suggest {
            Box::new(SuggestedColumnPolicy::new())
        } else {
            Box::new(RandomColumnPolicy::new())
        }
    }
}
