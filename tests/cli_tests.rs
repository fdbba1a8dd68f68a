use clap::Parser;
use proclog::cli::{parse_interval, Args};
use proclog::config::Config;
use std::path::PathBuf;

#[test]
fn test_parse_interval_accepts_positive_integers() {
    assert_eq!(parse_interval("2").unwrap(), 2);
    assert_eq!(parse_interval(" 15 ").unwrap(), 15);
}

#[test]
fn test_parse_interval_rejects_non_numeric() {
    assert!(parse_interval("abc").is_err());
    assert!(parse_interval("").is_err());
    assert!(parse_interval("1.5").is_err());
}

#[test]
fn test_parse_interval_rejects_non_positive() {
    assert!(parse_interval("0").is_err());
    assert!(parse_interval("-1").is_err());
}

#[test]
fn test_args_accept_two_positionals() {
    let args = Args::try_parse_from(["proclog", "logs", "2"]).unwrap();
    assert_eq!(args.directory, Some(PathBuf::from("logs")));
    assert_eq!(args.interval, Some(2));
}

#[test]
fn test_args_reject_non_numeric_interval() {
    assert!(Args::try_parse_from(["proclog", "logs", "abc"]).is_err());
}

#[test]
fn test_args_reject_zero_interval() {
    assert!(Args::try_parse_from(["proclog", "logs", "0"]).is_err());
}

#[test]
fn test_args_may_be_omitted() {
    let args = Args::try_parse_from(["proclog"]).unwrap();
    assert!(args.directory.is_none());
    assert!(args.interval.is_none());
}

#[test]
fn test_resolve_prefers_args_over_config() {
    let mut config = Config::default();
    config.output.directory = Some(PathBuf::from("from_config"));
    config.schedule.interval_minutes = Some(30);

    let args = Args::try_parse_from(["proclog", "from_args", "2"]).unwrap();
    let settings = args.resolve(&config).unwrap();
    assert_eq!(settings.directory, PathBuf::from("from_args"));
    assert_eq!(settings.interval_minutes, 2);
}

#[test]
fn test_resolve_falls_back_to_config() {
    let mut config = Config::default();
    config.output.directory = Some(PathBuf::from("from_config"));
    config.schedule.interval_minutes = Some(30);

    let args = Args::try_parse_from(["proclog"]).unwrap();
    let settings = args.resolve(&config).unwrap();
    assert_eq!(settings.directory, PathBuf::from("from_config"));
    assert_eq!(settings.interval_minutes, 30);
}

#[test]
fn test_resolve_rejects_zero_interval_from_config() {
    let mut config = Config::default();
    config.output.directory = Some(PathBuf::from("logs"));
    config.schedule.interval_minutes = Some(0);

    let args = Args::try_parse_from(["proclog"]).unwrap();
    assert!(args.resolve(&config).is_err());
}
