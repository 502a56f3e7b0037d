use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Single field failure inside one record.
///
/// The wire shape (`campo`/`mensagem`, message text `<campo> inválido`) is
/// fixed; downstream consumers of the report file match on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub campo: String,
    pub mensagem: String,
}

impl FieldError {
    pub fn new(campo: &str) -> Self {
        Self {
            campo: campo.to_string(),
            mensagem: format!("{campo} inválido"),
        }
    }
}

/// Invalid record paired with its field errors, in fixed field-check order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportEntry {
    pub dados: Value,
    pub erros: Vec<FieldError>,
}

/// Run summary emitted on stdout after the report file is written.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BatchSummary {
    pub total_records: usize,
    pub invalid_records: usize,
    pub report_path: String,
}
