use serde::Serialize;
use serde_json::{Value, json};

use crate::engine::validate::cpf;

/// Structured response for the single-CPF check command.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CpfCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

/// Checks one CPF given on the command line. Exit 0 means valid, 2 means the
/// check digits (or shape) reject it; both are successful runs.
pub fn run(raw: &str) -> CpfCommandResponse {
    let valid = cpf::is_valid(raw);
    CpfCommandResponse {
        exit_code: if valid { 0 } else { 2 },
        payload: json!({
            "cpf": cpf::normalize(raw),
            "valid": valid,
        }),
    }
}
