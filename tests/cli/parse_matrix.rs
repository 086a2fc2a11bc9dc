use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use uu_index::tooling::cli::{Cli, Commands, DEFAULT_CONTENT_DIR, DEFAULT_OUTPUT_DIR};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["uu-index", "preprocess"],
        vec!["uu-index", "preprocess", "--output", "out/_data"],
        vec!["uu-index", "--content", "docs", "preprocess", "-v"],
        vec!["uu-index", "hierarchy"],
        vec!["uu-index", "hierarchy", "--format", "text"],
        vec!["uu-index", "metadata", "--config", "site.yaml"],
        vec!["uu-index", "tasks", "--format", "json"],
        vec!["uu-index", "tasks", "--log-level", "warn", "--log-format", "json"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_unknown_format_and_command() {
    assert!(Cli::try_parse_from(["uu-index", "hierarchy", "--format", "yaml"]).is_err());
    assert!(Cli::try_parse_from(["uu-index", "tasks", "--format", "csv"]).is_err());
    assert!(Cli::try_parse_from(["uu-index", "publish"]).is_err());
    assert!(Cli::try_parse_from(["uu-index"]).is_err());
}

#[test]
fn parse_defaults() {
    let cli = Cli::try_parse_from(["uu-index", "preprocess"]).unwrap();
    assert_eq!(cli.content, PathBuf::from(DEFAULT_CONTENT_DIR));
    assert_eq!(cli.config, PathBuf::from("uu_framework/config/site.yaml"));
    assert!(!cli.verbose);
    match cli.command {
        Commands::Preprocess { output } => assert_eq!(output, PathBuf::from(DEFAULT_OUTPUT_DIR)),
        _ => panic!("expected preprocess"),
    }
}

#[test]
fn verbose_flag_maps_to_debug_logging() {
    let cli = Cli::try_parse_from(["uu-index", "hierarchy", "--verbose"]).unwrap();
    let overrides = cli.logging_overrides();
    assert!(overrides.verbose);
    assert_eq!(overrides.level, None);
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
