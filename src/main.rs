use std::io;
use std::path::PathBuf;
use std::process;

use cadval::cmd::{cpf, validate};
use cadval::io::Format;
use chrono::NaiveDate;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "cadval",
    version,
    about = "Customer record batch validation CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a batch of customer records and write an error report file.
    Validate(ValidateArgs),
    /// Check a single CPF's check digits.
    Cpf(CpfArgs),
}

#[derive(Debug, clap::Args)]
struct ValidateArgs {
    /// Input file with the record batch; stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    from: Option<CliInputFormat>,

    /// Directory the erros-*.json report is written into.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Reference date (YYYY-MM-DD) for the age rule; defaults to the current
    /// UTC date. Useful for reproducible runs.
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Debug, clap::Args)]
struct CpfArgs {
    /// CPF to check; punctuation is ignored.
    cpf: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliInputFormat {
    Json,
    Yaml,
    Csv,
    Jsonl,
}

impl From<CliInputFormat> for Format {
    fn from(value: CliInputFormat) -> Self {
        match value {
            CliInputFormat::Json => Self::Json,
            CliInputFormat::Yaml => Self::Yaml,
            CliInputFormat::Csv => Self::Csv,
            CliInputFormat::Jsonl => Self::Jsonl,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    match cli.command {
        Commands::Validate(args) => run_validate(args),
        Commands::Cpf(args) => run_cpf(&args),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_validate(args: ValidateArgs) -> i32 {
    let command_args = validate::ValidateCommandArgs {
        input: args.input,
        from: args.from.map(Into::into),
        output_dir: args.output_dir,
        today: args.today,
    };

    let stdin = io::stdin();
    let response = validate::run_with_stdin(&command_args, stdin.lock());
    dispatch_response(response.exit_code, &response.payload, "validate")
}

fn run_cpf(args: &CpfArgs) -> i32 {
    let response = cpf::run(&args.cpf);
    dispatch_response(response.exit_code, &response.payload, "cpf")
}

fn dispatch_response(exit_code: i32, payload: &Value, command: &'static str) -> i32 {
    match exit_code {
        0 | 2 => {
            if emit_json_stdout(payload) {
                exit_code
            } else {
                emit_error(
                    "internal_error",
                    format!("failed to serialize {command} response"),
                    json!({"command": command}),
                    1,
                );
                1
            }
        }
        3 | 1 => {
            if emit_json_stderr(payload) {
                exit_code
            } else {
                emit_error(
                    "internal_error",
                    format!("failed to serialize {command} error"),
                    json!({"command": command}),
                    1,
                );
                1
            }
        }
        other => {
            emit_error(
                "internal_error",
                format!("unexpected {command} exit code: {other}"),
                json!({"command": command}),
                1,
            );
            1
        }
    }
}

fn emit_json_stdout(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            println!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_json_stderr(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            eprintln!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
