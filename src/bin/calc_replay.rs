use calc_engine::api::{
    CalculatorEngine, CalculatorEngineConfig, EngineSnapshotJsonContractV1, NonFiniteResultPolicy,
    RepeatedEqualsBehavior,
};
use calc_engine::core::Command;
use calc_engine::telemetry;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: calc_replay --input <script> [--output <path>] \
[--policy <error|propagate>] [--equals <repeat|hold>] [--log <filter>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    log_filter: Option<String>,
    config: CalculatorEngineConfig,
}

#[derive(Debug, Serialize)]
struct ReplayStep {
    command: String,
    display: String,
}

#[derive(Debug, Serialize)]
struct ReplayTrace {
    source: String,
    config: CalculatorEngineConfig,
    steps: Vec<ReplayStep>,
    final_state: EngineSnapshotJsonContractV1,
}

fn main() {
    if let Err(err) = parse_args().and_then(run) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), String> {
    let _ = match args.log_filter.as_deref() {
        Some(filter) => telemetry::init_tracing(filter),
        None => telemetry::init_default_tracing(),
    };
    let script = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let commands =
        Command::parse_sequence(&strip_comments(&script)).map_err(|err| err.to_string())?;

    let mut engine = CalculatorEngine::new(args.config).map_err(|err| err.to_string())?;
    let steps = commands
        .into_iter()
        .map(|command| {
            engine.dispatch(command);
            ReplayStep {
                command: command.to_string(),
                display: engine.current_display().to_owned(),
            }
        })
        .collect();

    let trace = ReplayTrace {
        source: args.input.display().to_string(),
        config: engine.config(),
        steps,
        final_state: engine.snapshot().into(),
    };
    let json = serde_json::to_string_pretty(&trace)
        .map_err(|err| format!("failed to serialize replay trace: {err}"))?;

    match args.output {
        Some(path) => fs::write(&path, format!("{json}\n"))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

/// Drops `#` comments so scripts can be annotated line by line.
fn strip_comments(script: &str) -> String {
    script
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(code, _)| code))
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut log_filter = None::<String>;
    let mut config = CalculatorEngineConfig::new();

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for `{flag}`\n{USAGE}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value()?)),
            "--output" => output = Some(PathBuf::from(value()?)),
            "--log" => log_filter = Some(value()?),
            "--policy" => {
                let policy = match value()?.as_str() {
                    "error" => NonFiniteResultPolicy::Error,
                    "propagate" => NonFiniteResultPolicy::Propagate,
                    other => return Err(format!("unknown policy `{other}`\n{USAGE}")),
                };
                config = config.with_non_finite_policy(policy);
            }
            "--equals" => {
                let behavior = match value()?.as_str() {
                    "repeat" => RepeatedEqualsBehavior::RepeatLastOperation,
                    "hold" => RepeatedEqualsBehavior::HoldResult,
                    other => return Err(format!("unknown equals behavior `{other}`\n{USAGE}")),
                };
                config = config.with_repeated_equals(behavior);
            }
            "-h" | "--help" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        output,
        log_filter,
        config,
    })
}
