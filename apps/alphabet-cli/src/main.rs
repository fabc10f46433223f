//! Inspection CLI for the alphabet registry.

mod config;

use std::env;
use std::process;

use alphabet::validate;
use alphabet::{AlphabetError, AlphabetName};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// One row of `list --json` output.
#[derive(Debug, Serialize)]
struct AlphabetRow {
    name: AlphabetName,
    len: usize,
    characters: &'static str,
}

impl From<AlphabetName> for AlphabetRow {
    fn from(name: AlphabetName) -> Self {
        Self {
            name,
            len: name.len(),
            characters: name.characters(),
        }
    }
}

fn print_usage() {
    eprintln!(
        "{}\n\nUsage:\n  alphabet-cli list [--json]\n  alphabet-cli show [NAME]\n  alphabet-cli check <NAME> <INPUT>\n\nEnvironment:\n  LOG_FORMAT        pretty | json\n  ALPHABET_DEFAULT  alphabet used by `show` without NAME",
        alphabet::about()
    );
}

fn list(json: bool) -> Result<String, String> {
    let rows: Vec<AlphabetRow> = AlphabetName::ALL.into_iter().map(AlphabetRow::from).collect();
    if json {
        return serde_json::to_string_pretty(&rows).map_err(|e| format!("json output failed: {}", e));
    }
    let width = AlphabetName::ALL
        .iter()
        .map(|n| n.as_str().len())
        .max()
        .unwrap_or(0);
    let lines: Vec<String> = rows
        .iter()
        .map(|r| format!("{:<width$}  {:>2}  {}", r.name.as_str(), r.len, r.characters))
        .collect();
    Ok(lines.join("\n"))
}

fn show(name: Option<&str>, fallback: AlphabetName) -> Result<String, AlphabetError> {
    let name = match name {
        Some(raw) => raw.parse::<AlphabetName>()?,
        None => fallback,
    };
    debug!(alphabet = %name, "show");
    Ok(name.characters().to_string())
}

/// What a successful command wants printed.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// Usage text on stderr.
    Usage,
    /// Command output on stdout.
    Print(String),
}

/// Fails when `args` still holds anything after the expected positionals.
fn no_more_args(args: &mut impl Iterator<Item = String>) -> Result<(), String> {
    match args.next() {
        Some(unk) => Err(format!("unknown argument: {}", unk)),
        None => Ok(()),
    }
}

/// `args` excludes the program name.
fn run(cfg: &config::Config, mut args: impl Iterator<Item = String>) -> Result<Outcome, String> {
    let Some(cmd) = args.next() else {
        return Ok(Outcome::Usage);
    };

    match cmd.as_str() {
        "list" => {
            let json = match args.next().as_deref() {
                None => false,
                Some("--json") => true,
                Some(unk) => return Err(format!("unknown argument: {}", unk)),
            };
            no_more_args(&mut args)?;
            Ok(Outcome::Print(list(json)?))
        }
        "show" => {
            let name = args.next();
            no_more_args(&mut args)?;
            let chars = show(name.as_deref(), cfg.default_alphabet).map_err(|e| e.to_string())?;
            Ok(Outcome::Print(chars))
        }
        "check" => {
            let Some(name) = args.next() else {
                return Err("missing <NAME> for check".into());
            };
            let Some(input) = args.next() else {
                return Err("missing <INPUT> for check".into());
            };
            no_more_args(&mut args)?;
            validate::check_named(&name, &input).map_err(|e| e.to_string())?;
            info!(alphabet = %name, len = input.chars().count(), "input conforms");
            Ok(Outcome::Print("ok".into()))
        }
        _ => Ok(Outcome::Usage),
    }
}

fn init_tracing(cfg: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries command output; logs go to stderr.
    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        config::LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(fmt::time::SystemTime)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        config::LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
}

fn main() {
    let cfg = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    init_tracing(&cfg);

    match run(&cfg, env::args().skip(1)) {
        Ok(Outcome::Usage) => print_usage(),
        Ok(Outcome::Print(out)) => println!("{}", out),
        Err(msg) => {
            eprintln!("error: {}", msg);
            process::exit(1);
        }
    }
}
