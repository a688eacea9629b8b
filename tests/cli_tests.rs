use clap::Parser;
use layered_connect_four::{cli::BatchArgs, BoardConfig, GameSimulator, GraphBoard, Node, Player};
use rand::rngs::mock::StepRng;

#[test]
fn test_defaults() {
    let args = BatchArgs::try_parse_from(["batch_simulation"]).unwrap();

    assert_eq!(args.games, 100);
    assert!(!args.suggest);
    assert_eq!(args.seed, None);
    assert_eq!(args.trials, 10);
}

#[test]
fn test_game_count_is_read_after_flags() {
    let args = BatchArgs::try_parse_from(["batch_simulation", "--suggest", "5"]).unwrap();
    assert_eq!(args.games, 5);
    assert!(args.suggest);

    let args = BatchArgs::try_parse_from(["batch_simulation", "50", "--suggest"]).unwrap();
    assert_eq!(args.games, 50);
    assert!(args.suggest);
}

#[test]
fn test_malformed_game_count_is_rejected() {
    assert!(BatchArgs::try_parse_from(["batch_simulation", "abc"]).is_err());
    assert!(BatchArgs::try_parse_from(["batch_simulation", "-3"]).is_err());
    assert!(BatchArgs::try_parse_from(["batch_simulation", "--seed", "x"]).is_err());
}

#[test]
fn test_arguments_build_config() {
    let args =
        BatchArgs::try_parse_from(["batch_simulation", "7", "--seed", "42", "--trials", "3"])
            .unwrap();

    let config = args.simulation_config(true);
    assert_eq!(config.games, 7);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.probability_trials, 3);
    assert!(config.report_probabilities);
    assert_eq!(config.board, BoardConfig::default());

    let summary = GameSimulator::new(args.simulation_config(false))
        .unwrap()
        .with_policy(args.policy())
        .run()
        .unwrap();
    assert_eq!(summary.games, 7);
}

#[test]
fn test_suggest_flag_selects_policy() {
    // Red owns (1, 1), so the suggestion is column 1; a zero rng picks column 0
    let config = BoardConfig::default().with_rows(2).with_cols(2);
    let mut board = GraphBoard::with_edges(&config, &[(Node::new(0, 1), Node::new(1, 1))]).unwrap();
    board.set_occupant(Node::new(1, 1), Player::Red).unwrap();
    let mut rng = StepRng::new(0, 0);

    let suggest = BatchArgs::try_parse_from(["batch_simulation", "--suggest"]).unwrap();
    let random = BatchArgs::try_parse_from(["batch_simulation"]).unwrap();

    assert_eq!(suggest.policy().choose_column(&board, Player::Red, &mut rng), Some(1));
    assert_eq!(random.policy().choose_column(&board, Player::Red, &mut rng), Some(0));
}
