use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::{CommandFactory, Parser};

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_parse_check_defaults() {
    match parse(&["smile", "check", "https://www.amazon.com/dp/X"]) {
        CliCommand::Check {
            url,
            method,
            resource_type,
            disabled,
        } => {
            assert_eq!(url, "https://www.amazon.com/dp/X");
            assert_eq!(method, "GET");
            assert_eq!(resource_type, "main_frame");
            assert!(!disabled);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_overrides() {
    match parse(&[
        "smile",
        "check",
        "https://www.amazon.com/dp/X",
        "--method",
        "POST",
        "--type",
        "sub_frame",
        "--disabled",
    ]) {
        CliCommand::Check {
            method,
            resource_type,
            disabled,
            ..
        } => {
            assert_eq!(method, "POST");
            assert_eq!(resource_type, "sub_frame");
            assert!(disabled);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_tab() {
    match parse(&["smile", "tab", "https://example.com/", "--tab-id", "42"]) {
        CliCommand::Tab {
            url,
            tab_id,
            disabled,
        } => {
            assert_eq!(url, "https://example.com/");
            assert_eq!(tab_id, 42);
            assert!(!disabled);
        }
        _ => panic!("expected Tab"),
    }
}

#[test]
fn cli_parse_icons_serve_config_man() {
    assert!(matches!(
        parse(&["smile", "icons", "--disabled"]),
        CliCommand::Icons { disabled: true }
    ));
    assert!(matches!(parse(&["smile", "serve"]), CliCommand::Serve));
    assert!(matches!(parse(&["smile", "config"]), CliCommand::Config));
    assert!(matches!(parse(&["smile", "man"]), CliCommand::Man));
}

#[test]
fn cli_parse_completions() {
    match parse(&["smile", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_missing_url() {
    assert!(Cli::try_parse_from(["smile", "check"]).is_err());
}
