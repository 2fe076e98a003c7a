//! `rashut-dash`: offline statistics, hierarchy export, link resolution and
//! live fetches for the Rashut dashboard.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rashut_model::Year;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

fn year_arg(required: bool) -> Arg {
    Arg::new("year")
        .long("year")
        .required(required)
        .value_parser(value_parser!(u16))
        .help("Selected year, e.g. 2025")
}

fn input_arg() -> Arg {
    Arg::new("input")
        .long("input")
        .short('i')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON array of records")
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .value_parser(value_parser!(PathBuf))
        .help("Dashboard TOML config")
}

fn server_arg() -> Arg {
    Arg::new("server")
        .long("server")
        .help("PPM server base URL, overrides the config")
}

fn cli() -> Command {
    Command::new("rashut-dash")
        .version(rashut_core::VERSION)
        .about("Rashut task dashboard pipeline")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("stats")
                .about("Aggregate statistics for a record file")
                .arg(input_arg())
                .arg(year_arg(false))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("hierarchy")
                .about("Render tree for a record file, as JSON")
                .arg(input_arg())
                .arg(year_arg(false)),
        )
        .subcommand(
            Command::new("resolve")
                .about("Detail view URL for a node or badge")
                .arg(
                    Arg::new("node")
                        .long("node")
                        .required(true)
                        .help("Hierarchy node id or view key"),
                )
                .arg(year_arg(true))
                .arg(server_arg())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("coverage")
                .about("List selectable years missing from the link table")
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("bars")
                .about("Per-unit bar chart summary (demo data without --input)")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON array of unit rows"),
                ),
        )
        .subcommand(
            Command::new("replay")
                .about("Run an exported record file through the dashboard pipeline")
                .arg(input_arg())
                .arg(year_arg(true))
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("fetch")
                .about("Query the XOG service for a year")
                .arg(year_arg(true))
                .arg(config_arg())
                .arg(server_arg())
                .arg(
                    Arg::new("session")
                        .long("session")
                        .env("RASHUT_SESSION_ID")
                        .hide_env_values(true)
                        .help("XOG session id"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("Write fetched records to this file"),
                ),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rashut=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn year(args: &ArgMatches) -> Option<Year> {
    args.get_one::<u16>("year").copied().map(Year)
}

fn path<'a>(args: &'a ArgMatches, id: &str) -> Option<&'a Path> {
    args.get_one::<PathBuf>(id).map(PathBuf::as_path)
}

/// Config file plus command-line overrides
fn config(args: &ArgMatches) -> Result<rashut_core::DashConfig> {
    let mut config = commands::load_config(path(args, "config"))?;
    if let Some(server) = args.try_get_one::<String>("server").ok().flatten() {
        config.server_base = server.clone();
    }
    if let Some(session) = args.try_get_one::<String>("session").ok().flatten() {
        config.session_id = Some(session.clone());
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    match matches.subcommand() {
        Some(("stats", args)) => {
            let input = path(args, "input").context("--input is required")?;
            let records = commands::read_records(input)?;
            println!("{}", commands::stats(&records, year(args), args.get_flag("json"))?);
        }
        Some(("hierarchy", args)) => {
            let input = path(args, "input").context("--input is required")?;
            let records = commands::read_records(input)?;
            println!("{}", commands::hierarchy(&records, year(args))?);
        }
        Some(("resolve", args)) => {
            let config = config(args)?;
            let node = args.get_one::<String>("node").context("--node is required")?;
            let year = year(args).context("--year is required")?;
            println!("{}", commands::resolve(&config, node, year));
        }
        Some(("coverage", args)) => {
            let config = config(args)?;
            print!("{}", commands::coverage(&config));
        }
        Some(("bars", args)) => {
            let units = path(args, "input").map(commands::read_units).transpose()?;
            println!("{}", commands::bars(units)?);
        }
        Some(("replay", args)) => {
            let config = config(args)?;
            let input = path(args, "input").context("--input is required")?;
            let year = year(args).context("--year is required")?;
            let view = commands::replay(&config, commands::read_records(input)?, year).await?;
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Some(("fetch", args)) => {
            let config = config(args)?;
            let year = year(args).context("--year is required")?;
            let (records, view) = commands::fetch(&config, year).await?;

            if let Some(out) = path(args, "out") {
                let json = serde_json::to_string_pretty(&records)?;
                std::fs::write(out, json).with_context(|| format!("failed to write {}", out.display()))?;
                tracing::info!(path = %out.display(), records = records.len(), "records written");
            }
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn parses_fetch_overrides() {
        let matches = cli()
            .try_get_matches_from([
                "rashut-dash", "fetch", "--year", "2024", "--server", "https://ppm.example", "--session", "s1",
            ])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        let config = config(args).unwrap();

        assert_eq!(year(args), Some(Year(2024)));
        assert_eq!(config.server_base, "https://ppm.example");
        assert_eq!(config.session_id.as_deref(), Some("s1"));
    }

    #[test]
    fn parses_replay() {
        let matches = cli()
            .try_get_matches_from(["rashut-dash", "replay", "--input", "records.json", "--year", "2024"])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "replay");
        assert_eq!(year(args), Some(Year(2024)));
        assert_eq!(path(args, "input"), Some(Path::new("records.json")));
        assert!(cli().try_get_matches_from(["rashut-dash", "replay", "--input", "r.json"]).is_err());
    }

    #[test]
    fn stats_requires_input() {
        assert!(cli().try_get_matches_from(["rashut-dash", "stats"]).is_err());
    }
}
