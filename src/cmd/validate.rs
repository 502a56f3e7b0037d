use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::error::BatchError;
use crate::domain::record::BatchSummary;
use crate::engine::validate::execute_batch;
use crate::io::{self, Format};

/// Input arguments for validate command execution API.
#[derive(Debug, Clone)]
pub struct ValidateCommandArgs {
    pub input: Option<PathBuf>,
    pub from: Option<Format>,
    pub output_dir: PathBuf,
    /// Reference date for the age rule; `None` means the current UTC date.
    pub today: Option<NaiveDate>,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidateCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

pub fn run_with_stdin<R: Read>(args: &ValidateCommandArgs, stdin: R) -> ValidateCommandResponse {
    match execute(args, stdin) {
        Ok(summary) => summary_response(&summary),
        Err(error) => error_response(&error),
    }
}

fn summary_response(summary: &BatchSummary) -> ValidateCommandResponse {
    match serde_json::to_value(summary) {
        Ok(payload) => ValidateCommandResponse {
            exit_code: 0,
            payload,
        },
        Err(_) => ValidateCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": "failed to serialize batch summary"
            }),
        },
    }
}

fn error_response(error: &BatchError) -> ValidateCommandResponse {
    let (exit_code, kind) = match error {
        BatchError::WriteReport { .. } => (1, "internal_error"),
        _ => (3, "input_usage_error"),
    };
    ValidateCommandResponse {
        exit_code,
        payload: json!({
            "error": kind,
            "message": error.to_string(),
        }),
    }
}

fn execute<R: Read>(args: &ValidateCommandArgs, stdin: R) -> Result<BatchSummary, BatchError> {
    let format = resolve_format(args)?;
    let records = load_records(args, stdin, format)?;
    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());
    let entries = execute_batch(&records, today);
    let report_path = io::report::write_report(&args.output_dir, Utc::now(), &entries)
        .map_err(|source| BatchError::WriteReport { source })?;
    Ok(BatchSummary {
        total_records: records.len(),
        invalid_records: entries.len(),
        report_path: report_path.display().to_string(),
    })
}

fn resolve_format(args: &ValidateCommandArgs) -> Result<Format, BatchError> {
    if args.from.is_none() && args.input.is_none() {
        // Stdin without --from defaults to JSON.
        return Ok(Format::Json);
    }
    io::resolve_input_format(args.from, args.input.as_deref())
        .map_err(|source| BatchError::ResolveInput { source })
}

fn load_records<R: Read>(
    args: &ValidateCommandArgs,
    stdin: R,
    format: Format,
) -> Result<Vec<Value>, BatchError> {
    if let Some(path) = &args.input {
        let file = File::open(path).map_err(|source| BatchError::OpenInput {
            path: path.display().to_string(),
            source,
        })?;
        io::reader::read_records(file, format)
            .map_err(|source| BatchError::ReadInput { format, source })
    } else {
        io::reader::read_records(stdin, format)
            .map_err(|source| BatchError::ReadInput { format, source })
    }
}
