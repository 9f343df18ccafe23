use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_validate_defaults() {
    let cli = Cli::try_parse_from(["csync", "validate"]).unwrap();
    assert_eq!(cli.global.project_dir, ".");
    assert!(!cli.global.verbose);
    let Commands::Validate(args) = cli.command else {
        panic!("expected validate");
    };
    assert_eq!(args.output, ValidateOutput::Text);
    assert!(!args.strict);
    assert!(args.pass.is_none());
    assert!(args.threads.is_none());
}

#[test]
fn test_validate_flags() {
    let cli = Cli::try_parse_from([
        "csync",
        "validate",
        "-p",
        "app",
        "--output",
        "jsonl",
        "--strict",
        "--threads",
        "2",
        "--pass",
        "type_sync,route_sync",
        "--verbose",
    ])
    .unwrap();
    assert_eq!(cli.global.project_dir, "app");
    assert!(cli.global.verbose);
    let Commands::Validate(args) = cli.command else {
        panic!("expected validate");
    };
    assert_eq!(args.output, ValidateOutput::Jsonl);
    assert!(args.strict);
    assert_eq!(args.threads, Some(2));
    assert_eq!(
        args.pass,
        Some(vec!["type_sync".to_string(), "route_sync".to_string()])
    );
}

#[test]
fn test_inspect_output() {
    let cli = Cli::try_parse_from(["csync", "inspect", "-o", "json"]).unwrap();
    let Commands::Inspect(args) = cli.command else {
        panic!("expected inspect");
    };
    assert_eq!(args.output, InspectOutput::Json);
}
