//! Tests for argument parsing and end-to-end runs through the runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use minecluster::SimulationError;
    use minecluster::io::cli::{Cli, SimulationRunner};
    use minecluster::io::configuration::{DEFAULT_MINES, DEFAULT_SEED, DEFAULT_TRIALS};

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("minecluster").chain(args.iter().copied());
        let Ok(cli) = Cli::try_parse_from(argv) else {
            unreachable!("Arguments rejected: {args:?}");
        };
        cli
    }

    // Tests defaults apply when no arguments are given
    // Verified by changing a default_value_t
    #[test]
    fn test_defaults() {
        let cli = parse(&[]);

        assert_eq!(cli.mines, DEFAULT_MINES);
        assert_eq!(cli.trials, DEFAULT_TRIALS);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.threads, 1);
        assert_eq!(cli.limit, None);
        assert!(cli.should_show_progress());
    }

    // Tests short and long flags map to their fields
    // Verified by swapping the width and height short flags
    #[test]
    fn test_flags() {
        let cli = parse(&[
            "-w", "16", "-H", "8", "-m", "20", "-t", "500", "-s", "7", "-j", "2", "-l", "3",
            "-q", "-o", "out.txt",
        ]);

        assert_eq!(cli.width, 16);
        assert_eq!(cli.height, 8);
        assert_eq!(cli.mines, 20);
        assert_eq!(cli.trials, 500);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.threads, 2);
        assert_eq!(cli.limit, Some(3));
        assert_eq!(cli.output.to_str(), Some("out.txt"));
        assert!(!cli.should_show_progress());
    }

    // Tests unknown flags are rejected rather than silently ignored
    // Verified by accepting a boolean --sorted flag
    #[test]
    fn test_unknown_flags_rejected() {
        assert!(Cli::try_parse_from(["minecluster", "--sorted"]).is_err());
        assert!(Cli::try_parse_from(["minecluster", "--width", "4", "--bogus"]).is_err());
    }

    // Tests configuration conversion validates capacity
    // Verified by skipping validation in simulation_config
    #[test]
    fn test_simulation_config_validation() {
        let cli = parse(&["-w", "2", "-H", "2", "-m", "5"]);

        assert!(matches!(
            cli.simulation_config(),
            Err(SimulationError::MineCountExceedsCapacity {
                mine_count: 5,
                capacity: 4
            })
        ));

        let Ok(config) = parse(&["-w", "3", "-H", "2", "-m", "6", "-t", "9"]).simulation_config()
        else {
            unreachable!("Valid configuration rejected");
        };
        assert_eq!(config.mine_count, 6);
        assert_eq!(config.trials, 9);
    }

    // Tests a run writes the ranked report and returns its summary
    // Verified by writing the unranked table
    #[test]
    fn test_runner_writes_report() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory unavailable");
        };
        let output = dir.path().join("report.txt");
        let Some(output_arg) = output.to_str() else {
            unreachable!("Temporary path is not UTF-8");
        };
        let cli = parse(&["-w", "1", "-H", "1", "-m", "1", "-t", "50", "-q", "-o", output_arg]);

        let mut runner = SimulationRunner::new(cli);
        let Ok(summary) = runner.run() else {
            unreachable!("Run failed");
        };

        assert_eq!(summary.trials, 50);
        assert_eq!(summary.clusters, 50);
        assert_eq!(summary.distinct_patterns, 1);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap_or_default(),
            "X\nCount: 50\nPrevalence: 1.000000\n"
        );
    }

    // Tests the limit flag shortens the report but not the summary
    // Verified by truncating the table before summarizing
    #[test]
    fn test_runner_limit() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory unavailable");
        };
        let output = dir.path().join("report.txt");
        let Some(output_arg) = output.to_str() else {
            unreachable!("Temporary path is not UTF-8");
        };
        let cli = parse(&[
            "-w", "6", "-H", "6", "-m", "9", "-t", "400", "-l", "2", "-q", "-o", output_arg,
        ]);

        let mut runner = SimulationRunner::new(cli);
        let Ok(summary) = runner.run() else {
            unreachable!("Run failed");
        };
        let report = std::fs::read_to_string(&output).unwrap_or_default();

        assert!(summary.distinct_patterns > 2);
        assert_eq!(report.matches("Count: ").count(), 2);
    }

    // Tests an invalid configuration aborts without producing a report
    // Verified by writing an empty report before validating
    #[test]
    fn test_runner_rejects_overfull_board() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory unavailable");
        };
        let output = dir.path().join("report.txt");
        let Some(output_arg) = output.to_str() else {
            unreachable!("Temporary path is not UTF-8");
        };
        let cli = parse(&["-w", "3", "-H", "3", "-m", "10", "-q", "-o", output_arg]);

        let mut runner = SimulationRunner::new(cli);
        let result = runner.run();

        assert!(result.is_err_and(|err| err.is_configuration_error()));
        assert!(!output.exists());
    }
}
