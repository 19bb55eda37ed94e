//! Tests for command-line parsing, puzzle loading and report formatting

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rummisolve::algorithm::driver::Termination;
    use rummisolve::io::cli::{Cli, SolverApp, format_report};
    use rummisolve::io::configuration::{DEFAULT_MAX_BATCH_SIZE, DEFAULT_SEED};
    use rummisolve::io::render::Glyphs;
    use rummisolve::tiles::tile::parse_tokens;
    use std::fs;
    use std::path::PathBuf;

    // Tests CLI parsing with only a puzzle file
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "puzzle.txt"]);

        assert_eq!(cli.puzzle, Some(PathBuf::from("puzzle.txt")));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.max_batch, DEFAULT_MAX_BATCH_SIZE);
        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
        assert_eq!(cli.glyphs(), Glyphs::Text);
        assert_eq!(cli.log_level(), "warn");
    }

    // Tests driver flags map onto the driver configuration
    // Verified by ignoring --no-full-clear in driver_config
    #[test]
    fn test_driver_config_flags() {
        let cli = Cli::parse_from([
            "program",
            "--board",
            "R1 R2 R3",
            "--reserve",
            "R4",
            "-m",
            "2",
            "-j",
            "--no-full-clear",
            "--max-rounds",
            "5",
            "--icons",
            "--quiet",
        ]);
        let config = cli.driver_config();

        assert_eq!(config.max_batch_size, 2);
        assert!(config.include_reserve_jokers);
        assert!(!config.attempt_full_clear);
        assert_eq!(config.max_rounds, Some(5));
        assert_eq!(cli.glyphs(), Glyphs::Icons);
        assert!(!cli.should_show_progress());
    }

    // Tests repeated -v raises the log level
    // Verified by capping verbosity at debug
    #[test]
    fn test_log_levels() {
        assert_eq!(Cli::parse_from(["program", "-d", "-v"]).log_level(), "info");
        assert_eq!(Cli::parse_from(["program", "-d", "-vv"]).log_level(), "debug");
        assert_eq!(Cli::parse_from(["program", "-d", "-vvvv"]).log_level(), "trace");
    }

    // Tests puzzle sources are mutually exclusive
    // Verified by removing conflicts_with_all from the deal flag
    #[test]
    fn test_conflicting_sources() {
        assert!(Cli::try_parse_from(["program", "--deal", "--board", "R1"]).is_err());
        assert!(Cli::try_parse_from(["program", "p.txt", "--reserve", "R1"]).is_err());
    }

    // Tests puzzles load from strings, files and the dealer
    // Verified by ignoring the reserve string
    #[test]
    fn test_load_puzzle_sources() {
        let from_strings = Cli::parse_from(["program", "-b", "R1 R2 R3", "-r", "R4 J"])
            .load_puzzle()
            .expect("valid tokens");
        assert_eq!(from_strings.board.len(), 3);
        assert_eq!(from_strings.reserve.len(), 2);

        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("puzzle.txt");
        fs::write(&path, "board: B5 B6 B7\nreserve: B8\n").expect("Failed to write puzzle");
        let path_arg = path.to_string_lossy().to_string();
        let from_file = Cli::parse_from(["program", path_arg.as_str()])
            .load_puzzle()
            .expect("valid puzzle file");
        assert_eq!(from_file.board.len(), 3);

        let dealt = Cli::parse_from(["program", "--deal", "--deal-melds", "2", "--deal-reserve", "4"])
            .load_puzzle()
            .expect("dealing never fails");
        assert!(dealt.board.len() >= 6);
        assert_eq!(dealt.reserve.len(), 4);
    }

    // Tests a missing puzzle source is an error
    // Verified by returning an empty puzzle instead
    #[test]
    fn test_load_puzzle_without_source() {
        assert!(Cli::parse_from(["program"]).load_puzzle().is_err());
    }

    // Tests the application solves and reports a puzzle
    // Verified by rendering the starting board instead of the final one
    #[test]
    fn test_solve_and_report() {
        let cli = Cli::parse_from(["program", "-q", "-b", "R1 R2 R3", "-r", "R4 K9"]);
        let puzzle = cli.load_puzzle().expect("valid tokens");
        let outcome = SolverApp::new(cli).solve(&puzzle).expect("valid config");
        assert_eq!(outcome.termination, Termination::NoViableBatch);

        let report = format_report(&puzzle, &outcome, Glyphs::Text);
        assert_eq!(
            report,
            vec![
                "Board 3 -> 4 tiles, reserve 2 -> 1 tiles (no batch fits)",
                "  commit 1 (round 1): R4",
                " 1: [R 1] [R 2] [R 3]  R 4 ",
                "Left in reserve: K9",
            ]
        );
    }

    // Tests the report for a full clear and an unsolvable board
    // Verified by printing the reserve line after a full clear
    #[test]
    fn test_report_variants() {
        let cli = Cli::parse_from(["program", "-q", "-b", "R1 R2", "-r", "R3"]);
        let puzzle = cli.load_puzzle().expect("valid tokens");
        let outcome = SolverApp::new(cli).solve(&puzzle).expect("valid config");
        let report = format_report(&puzzle, &outcome, Glyphs::Text);
        assert_eq!(report.last().map(String::as_str), Some("All clear"));

        let cli = Cli::parse_from(["program", "-q", "-b", "R1 R2", "-r", "K9"]);
        let puzzle = cli.load_puzzle().expect("valid tokens");
        let outcome = SolverApp::new(cli).solve(&puzzle).expect("valid config");
        assert!(outcome.solution.is_none());
        let report = format_report(&puzzle, &outcome, Glyphs::Text);
        assert!(report.contains(&"Board has no complete partition".to_string()));
        assert_eq!(outcome.reserve, parse_tokens("K9").expect("valid"));
    }

    // Tests invalid driver flags are rejected before solving
    // Verified by skipping validation in PlacementDriver::new
    #[test]
    fn test_invalid_batch_size() {
        let cli = Cli::parse_from(["program", "-q", "-b", "R1 R2 R3", "-r", "R4", "-m", "0"]);
        let puzzle = cli.load_puzzle().expect("valid tokens");
        assert!(SolverApp::new(cli).solve(&puzzle).is_err());
    }
}
