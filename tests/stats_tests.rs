use layered_connect_four::{
    utils::{mean, win_rate},
    ExperimentSummary, GameOutcome, Player, Winner, SUMMARY_HEADERS,
};

fn outcome(winner: Winner, move_count: usize, centralities: &[f64], isolates: usize) -> GameOutcome {
    GameOutcome {
        winner,
        move_count,
        winning_node_centralities: centralities.to_vec(),
        isolate_count: isolates,
    }
}

#[test]
fn test_empty_summary() {
    let summary = ExperimentSummary::new(0.3);

    assert_eq!(summary.games, 0);
    assert_eq!(summary.avg_moves(), 0.0);
    assert_eq!(summary.avg_degree_centrality(), 0.0);
    assert_eq!(summary.avg_isolate_count(), 0.0);
    assert_eq!(summary.win_rate(Player::Red), 0.0);
}

#[test]
fn test_record_aggregates_outcomes() {
    let mut summary = ExperimentSummary::new(0.4);
    summary.record(&outcome(Winner::Player(Player::Red), 10, &[0.2, 0.4], 3));
    summary.record(&outcome(Winner::Player(Player::Blue), 13, &[0.6], 1));
    summary.record(&outcome(Winner::Tie, 36, &[], 5));
    summary.record(&outcome(Winner::Player(Player::Red), 9, &[0.0], 3));

    assert_eq!(summary.games, 4);
    assert_eq!(summary.wins_for(Player::Red), 2);
    assert_eq!(summary.wins_for(Player::Blue), 1);
    assert_eq!(summary.ties, 1);
    assert!((summary.avg_moves() - 17.0).abs() < 1e-12);
    assert!((summary.avg_degree_centrality() - 0.3).abs() < 1e-12);
    assert!((summary.avg_isolate_count() - 3.0).abs() < 1e-12);
    assert!((summary.win_rate(Player::Red) - 0.5).abs() < 1e-12);

    let values = summary.values();
    assert_eq!(values.len(), SUMMARY_HEADERS.len());
    assert_eq!(values[0], 0.4);
    assert_eq!(&values[1..4], &[2.0, 1.0, 1.0]);
}

#[test]
fn test_summary_text_mentions_counts() {
    let mut summary = ExperimentSummary::new(0.3);
    summary.record(&outcome(Winner::Player(Player::Blue), 8, &[0.25], 2));

    let text = summary.summary();
    assert!(text.contains("Games: 1"));
    assert!(text.contains("Player B wins: 1 (100.0%)"));
    assert!(text.contains("Ties: 0"));
}

#[test]
fn test_helpers() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    assert_eq!(win_rate(3, 0), 0.0);
    assert_eq!(win_rate(1, 4), 0.25);
}

#[test]
fn test_player_helpers() {
    assert_eq!(Player::Red.opponent(), Player::Blue);
    assert_eq!(Player::for_turn(0), Player::Red);
    assert_eq!(Player::for_turn(3), Player::Blue);
    assert_eq!(Winner::Player(Player::Red).to_string(), "R");
    assert_eq!(Winner::Tie.to_string(), "Tie");
}
