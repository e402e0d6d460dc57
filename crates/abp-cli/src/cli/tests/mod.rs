//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_provision() {
    match parse(&["abp", "provision", "alpha.json"]) {
        CliCommand::Provision { record } => assert_eq!(record, PathBuf::from("alpha.json")),
        _ => panic!("expected Provision"),
    }
}

#[test]
fn cli_parse_describe() {
    match parse(&["abp", "describe", "/tmp/record.json"]) {
        CliCommand::Describe { record } => assert_eq!(record, PathBuf::from("/tmp/record.json")),
        _ => panic!("expected Describe"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["abp", "checksum", "/path/to/bundle.zip"]) {
        CliCommand::Checksum { path } => assert_eq!(path, "/path/to/bundle.zip"),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_ladder_config() {
    match parse(&["abp", "ladder-config", "alpha"]) {
        CliCommand::LadderConfig { bot } => assert_eq!(bot, "alpha"),
        _ => panic!("expected LadderConfig"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["abp", "frobnicate"]).is_err());
}
