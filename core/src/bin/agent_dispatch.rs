//! agent-dispatch: run a single task through the agent platform from the shell.
//!
//! Prints JSON on stdout; logs go to stderr (filtered by `RUST_LOG`).

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::{error, info};

use agent_platform::{telemetry, Orchestrator, PlatformConfig, Task};

#[derive(Parser, Debug)]
#[command(name = "agent-dispatch")]
#[command(author, version, about = "Route a task to a specialist LLM agent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered agent types and their capabilities.
    List,

    /// Execute a task with the given agent type.
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Agent type (e.g. data_analysis, web_automation, task_management)
    #[arg(long = "agent", short = 'a')]
    agent_type: String,

    /// Free-form task description
    #[arg(long, short = 'd')]
    description: String,

    /// Task parameter as key=value; values that parse as JSON are kept typed
    #[arg(long = "param", short = 'p', value_parser = parse_key_value)]
    params: Vec<(String, Value)>,

    /// Task parameters as a JSON object, merged before any --param
    #[arg(long = "params", value_parser = parse_json_object)]
    params_json: Option<Map<String, Value>>,
}

fn parse_key_value(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

fn parse_json_object(s: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(s) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("--params must be a JSON object".to_string()),
        Err(e) => Err(format!("invalid JSON: {e}")),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> agent_platform::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> agent_platform::Result<bool> {
    let cfg = PlatformConfig::load();
    let orchestrator = Orchestrator::from_config(&cfg.llm)?;

    match cli.command {
        Command::List => {
            print_json(&orchestrator.catalog())?;
            Ok(true)
        }
        Command::Run(args) => {
            let mut parameters = args.params_json.unwrap_or_default();
            parameters.extend(args.params);
            let task = Task::with_parameters(args.description, parameters);

            info!(target: "agent_dispatch", agent = %args.agent_type, base_url = %cfg.llm.base_url, "Dispatching task");
            let result = orchestrator.dispatch(&args.agent_type, &task).await;
            print_json(&result)?;
            Ok(result.is_completed())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(target: "agent_dispatch", error = %e, "Dispatch failed");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
