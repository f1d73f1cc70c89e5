mod debug_report;

use chrono::{Datelike, Local, NaiveDate};
use kismet::{Payload, RngSource, analyze_payload_with};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "KISMET_LOG";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    init_tracing(log_ansi(config.color, io::stderr().is_terminal()));

    let mut rng = match config.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let result = analyze_payload_with(config.payload.clone(), &mut rng);

    match config.format {
        Format::Text => debug_report::print_result(&config.payload, &result, config.color),
        Format::Json => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to encode result: {err}");
                std::process::exit(1);
            }
        },
    }
}

/// Log lines get ANSI colors only when color is on and stderr is a terminal.
fn log_ansi(color: bool, stderr_is_terminal: bool) -> bool {
    color && stderr_is_terminal
}

fn init_tracing(ansi: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_ansi(ansi).init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

struct CliConfig {
    payload: Payload,
    seed: Option<u64>,
    format: Format,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut json: Option<String> = None;
    let mut service: Option<String> = None;
    let mut words: Vec<String> = Vec::new();
    let mut name: Option<String> = None;
    let mut birth_date: Option<String> = None;
    let mut game_type: Option<String> = None;
    let mut symbols: Vec<String> = Vec::new();
    let mut seed: Option<u64> = None;
    let mut format = Format::Text;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        // `--flag=value` is accepted for every option that takes a value.
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |what: &str| -> Result<String, String> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => args.next().ok_or_else(|| format!("error: {what} expects a value")),
            }
        };

        match flag.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("kismet {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = Some(value("--json")?),
            "--name" => name = Some(value("--name")?),
            "--birth-date" => birth_date = Some(parse_birth_date(&value("--birth-date")?)?),
            "--game" => game_type = Some(value("--game")?),
            "--symbol" => symbols.push(value("--symbol")?),
            "--seed" => {
                let raw = value("--seed")?;
                seed = Some(raw.parse().map_err(|_| format!("error: invalid --seed '{raw}' (expected an integer)"))?);
            }
            "--daily" => seed = Some(daily_seed()),
            "--format" => {
                format = match value("--format")?.as_str() {
                    "text" => Format::Text,
                    "json" => Format::Json,
                    other => return Err(format!("error: invalid --format '{other}' (expected text or json)")),
                }
            }
            "--" => {
                words.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ if service.is_none() && json.is_none() => service = Some(arg),
            _ => words.push(arg),
        }
    }

    let payload = match json {
        Some(raw) => {
            if service.is_some() || !words.is_empty() {
                return Err("error: --json cannot be combined with a service argument".to_string());
            }
            let raw = if raw == "-" { read_stdin_input()? } else { raw };
            serde_json::from_str::<Payload>(&raw).map_err(|err| format!("error: invalid payload: {err}"))?
        }
        None => {
            let Some(service_id) = service else {
                return Err(format!("error: no service provided\n\n{}", help_text()));
            };

            let mut text = (!words.is_empty()).then(|| words.join(" "));
            if service_id == "dream" && text.is_none() {
                text = Some(read_stdin_input()?);
            }

            Payload {
                service_id,
                text,
                name,
                birth_date,
                symbols: (!symbols.is_empty()).then_some(symbols),
                game_type,
            }
        }
    };

    Ok(CliConfig { payload, seed, format, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_birth_date(value: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| format!("error: invalid --birth-date '{value}' (expected YYYY-MM-DD)"))
}

/// Seed that stays fixed for the current local calendar day.
fn daily_seed() -> u64 {
    Local::now().date_naive().num_days_from_ce() as u64
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "kismet {version}

Dream, numerology and lottery lucky-number engine.

Usage:
  kismet [OPTIONS] <service> [text...]
  kismet [OPTIONS] --json <payload | ->

Services:
  dream        Interpret dream text (remaining args, or stdin).
  numerology   Needs --name and --birth-date.
  coffee       Uses any --symbol values.
  tarot        Three-card spread.
  lottery      Uses --game (sayisal, super, onnumara, sans). Default: sayisal.
  Any other service id yields the default reading.

Options:
  --json <payload>           JSON payload, e.g. '{{\"serviceId\":\"tarot\"}}'.
                             Use '-' to read it from stdin.
  --name <name>              Name for numerology.
  --birth-date <YYYY-MM-DD>  Birth date for numerology or lottery.
  --game <id>                Lottery game id.
  --symbol <symbol>          Coffee cup symbol (repeatable).
  --seed <u64>               Seed the random source for reproducible output.
  --daily                    Seed with today's date (same numbers all day).
  --format <text|json>       Output format. Default: text.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}=<filter>         Log filter for stderr diagnostics (e.g. kismet=debug).

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}
