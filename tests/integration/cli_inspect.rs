use clap::{CommandFactory, Parser};
use envoverlay::tooling::cli::{inspect, run, Cli, FlagKind, OutputFormat, ValueSource};
use envoverlay::ProcessEnv;
use std::collections::HashMap;

use super::EnvGuard;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["envoverlay"],
        vec!["envoverlay", "--prefix", "APP"],
        vec!["envoverlay", "--flag", "port=int:8080"],
        vec![
            "envoverlay",
            "--flag",
            "port=int:8080",
            "--flag",
            "config-file=string",
            "--format",
            "json",
        ],
        vec!["envoverlay", "--flag", "port=int", "--", "-port=7777"],
        vec!["envoverlay", "--config", "envoverlay.toml"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_bad_declarations_and_formats() {
    assert!(Cli::try_parse_from(["envoverlay", "--flag", "port"]).is_err());
    assert!(Cli::try_parse_from(["envoverlay", "--flag", "port=number"]).is_err());
    assert!(Cli::try_parse_from(["envoverlay", "--format", "yaml"]).is_err());
}

#[test]
fn parsed_cli_carries_declarations_and_trailing_args() {
    let cli = Cli::try_parse_from([
        "envoverlay",
        "--prefix",
        "APP",
        "--flag",
        "port=int:8080",
        "--format",
        "json",
        "--",
        "-port=7777",
    ])
    .unwrap();

    assert_eq!(cli.prefix, "APP");
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.flags.len(), 1);
    assert_eq!(cli.flags[0].kind, FlagKind::Int);
    assert_eq!(cli.args, vec!["-port=7777".to_string()]);
}

#[test]
fn inspect_reports_sources() {
    let cli = Cli::try_parse_from([
        "envoverlay",
        "--prefix",
        "APP",
        "--flag",
        "host=string:localhost",
        "--flag",
        "port=int:8080",
        "--flag",
        "config-file=string:config.toml",
        "--",
        "-port=7777",
    ])
    .unwrap();
    let vars = env(&[("APP_PORT", "9090"), ("APP_CONFIG_FILE", "my-config.toml")]);

    let reports = inspect(&cli, &vars).unwrap();
    let by_name: HashMap<_, _> = reports.iter().map(|r| (r.name.as_str(), r)).collect();

    let host = by_name["host"];
    assert_eq!(host.key, "APP_HOST");
    assert_eq!(host.value, "localhost");
    assert_eq!(host.source, ValueSource::Default);

    let port = by_name["port"];
    assert_eq!(port.value, "7777");
    assert_eq!(port.default, "8080");
    assert_eq!(port.source, ValueSource::Explicit);

    let config = by_name["config-file"];
    assert_eq!(config.key, "APP_CONFIG_FILE");
    assert_eq!(config.value, "my-config.toml");
    assert_eq!(config.source, ValueSource::Env);
}

#[test]
fn inspect_surfaces_conversion_errors() {
    let cli = Cli::try_parse_from([
        "envoverlay",
        "--prefix",
        "PREFIX_",
        "--flag",
        "test=float:0.1",
    ])
    .unwrap();

    let err = inspect(&cli, &env(&[("PREFIX_TEST", "override")])).unwrap_err();
    assert!(err.to_string().contains("PREFIX_TEST"));
}

#[test]
fn run_renders_json_from_process_environment() {
    let _env = EnvGuard::set(&[("CLIRUNTEST_RETRIES", "5")]);
    let cli = Cli::try_parse_from([
        "envoverlay",
        "--prefix",
        "CLIRUNTEST",
        "--flag",
        "retries=uint:3",
        "--format",
        "json",
    ])
    .unwrap();

    let output = run(&cli, &ProcessEnv).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["name"], "retries");
    assert_eq!(value[0]["key"], "CLIRUNTEST_RETRIES");
    assert_eq!(value[0]["value"], "5");
    assert_eq!(value[0]["source"], "env");
}
