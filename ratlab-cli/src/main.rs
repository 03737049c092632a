//! Ratlab CLI - Command line interface
//!
//! 单次求值或交互式 REPL，结果是精确有理数。

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process;

use tracing::{info, Level};

mod config;
mod logging;

use crate::config::LogConfig;
use crate::logging::LogFormat;
use ratlab_api::{evaluate_with_config, ApiError, EvaluateOutput, OutputConfig, RunConfig};

#[derive(Parser)]
#[command(
    name = "ratlab",
    about = "Ratlab exact calculator - rational arithmetic without rounding",
    version = "0.1.0"
)]
struct Cli {
    /// Expression to evaluate; starts the REPL when omitted
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// Decimal places of the f64 approximation
    #[arg(long, default_value_t = 6)]
    precision: usize,

    /// Group the integer part of the approximation every N digits
    #[arg(long, value_name = "N")]
    comma: Option<usize>,

    /// Also print the f64 approximation
    #[arg(long)]
    approx: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log format: pretty, compact, json
    #[arg(long, default_value = "compact")]
    log_format: String,
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        global: parse_log_level(&cli.log_level).unwrap_or(Level::WARN),
        ..LogConfig::default()
    };
    logging::init(&log_config, parse_log_format(&cli.log_format));

    let run_config = RunConfig {
        show_steps: false,
        output: OutputConfig {
            precision: cli.precision,
            comma_interval: cli.comma,
        },
    };

    match &cli.expression {
        Some(expression) => {
            let expression = ensure_terminated(expression);
            match evaluate_with_config(&expression, &run_config) {
                Ok(output) => print_output(&cli, &output),
                Err(err) => {
                    print_error(&cli, &err);
                    process::exit(1);
                }
            }
        }
        None => repl(&cli, &run_config),
    }
}

/// 交互式求值循环，`exit` 或 `quit` 退出
fn repl(cli: &Cli, run_config: &RunConfig) {
    info!(target: "ratlab::cli", "starting repl");
    println!("ratlab {} - type 'exit' to quit", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }
        let expression = ensure_terminated(line);
        match evaluate_with_config(&expression, run_config) {
            Ok(output) => print_output(cli, &output),
            Err(err) => print_error(cli, &err),
        }
    }
}

/// 交互输入常常省略结尾的 `=`，补上
fn ensure_terminated(expression: &str) -> String {
    if expression.ends_with('=') {
        expression.to_string()
    } else {
        format!("{expression}=")
    }
}

fn print_output(cli: &Cli, output: &EvaluateOutput) {
    if cli.json {
        let json = serde_json::json!({
            "result": output.result.to_plain_string(),
            "approx": output.approx,
            "process": output.process,
        });
        println!("{json}");
    } else {
        println!("{}", output.result.to_plain_string());
        if cli.approx {
            println!("~ {}", output.approx);
        }
    }
}

fn print_error(cli: &Cli, err: &ApiError) {
    let report = err.to_report();
    if cli.json {
        println!("{}", report.to_json());
    } else {
        eprintln!("Error: {report}");
    }
}

/// Parse log level string
fn parse_log_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "silent" => Some(Level::ERROR), // silent = only errors
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Parse log format string
fn parse_log_format(s: &str) -> LogFormat {
    match s.to_lowercase().as_str() {
        "pretty" => LogFormat::Pretty,
        "json" => LogFormat::Json,
        _ => LogFormat::Compact,
    }
}
