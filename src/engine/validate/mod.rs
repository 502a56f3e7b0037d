pub mod cpf;
pub mod rules;

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::record::{FieldError, ReportEntry};
use self::rules::FIELD_RULES;

/// Applies the five field rules to one record in fixed order.
///
/// An empty result means the record is valid. Absent fields are judged as
/// `Null` and fail their rule. Invalidity is a return value here, never an
/// error.
pub fn validate_record(record: &Value, today: NaiveDate) -> Vec<FieldError> {
    let mut erros = Vec::new();
    for rule in FIELD_RULES {
        let value = record.get(rule.field()).unwrap_or(&Value::Null);
        if !rule.accepts(value, today) {
            erros.push(FieldError::new(rule.field()));
        }
    }
    erros
}

/// Runs the whole batch in one synchronous pass, pairing each invalid record
/// with its field errors. Input order is preserved and records are never
/// mutated; an empty batch yields an empty report.
pub fn execute_batch(records: &[Value], today: NaiveDate) -> Vec<ReportEntry> {
    records
        .iter()
        .filter_map(|record| {
            let erros = validate_record(record, today);
            (!erros.is_empty()).then(|| ReportEntry {
                dados: record.clone(),
                erros,
            })
        })
        .collect()
}
