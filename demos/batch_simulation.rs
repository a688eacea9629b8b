//! Batch simulation example
//!
//! Plays many games at a range of edge probabilities and prints one summary
//! row per probability. Set `RUST_LOG=debug` to follow individual games and
//! the per-move column estimates.
//!
//! ```bash
//! cargo run --example batch_simulation -- 200 --suggest --seed 7
//! ```

use clap::Parser;

use layered_connect_four::{cli::BatchArgs, GameSimulator, SUMMARY_HEADERS};

fn main() -> Result<(), layered_connect_four::BoardError> {
    // Initialize logging
    env_logger::init();

    let args = BatchArgs::parse();

    println!("Layered Connect Four: batch simulation");
    println!("======================================");
    println!();

    let config = args.simulation_config(log::log_enabled!(log::Level::Debug));
    let mut simulator = GameSimulator::new(config)?.with_policy(args.policy());

    let p_values: Vec<f64> = (2..=9).map(|i| i as f64 / 10.0).collect();
    let summaries = simulator.sweep(&p_values)?;

    println!("{}", SUMMARY_HEADERS.join(","));
    for summary in &summaries {
        let row: Vec<String> = summary.values().iter().map(|v| v.to_string()).collect();
        println!("{}", row.join(","));
    }

    if let Some(last) = summaries.last() {
        println!();
        println!("{}", last.summary());
    }
    Ok(())
}
