use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use crate::engine::validate::cpf;

/// Fixed field-check order. Field errors for a record appear in exactly this
/// order in the report.
pub const FIELD_RULES: [FieldRule; 5] = [
    FieldRule::Name,
    FieldRule::Cpf,
    FieldRule::BirthDate,
    FieldRule::Income,
    FieldRule::MaritalStatus,
];

const VALID_MARITAL_STATES: [&str; 4] = ["C", "S", "V", "D"];

/// One rule per customer field. Each variant is a pure predicate over the
/// raw field value; malformed or absent values yield `false`, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Name,
    Cpf,
    BirthDate,
    Income,
    MaritalStatus,
}

impl FieldRule {
    pub fn field(self) -> &'static str {
        match self {
            Self::Name => "nome",
            Self::Cpf => "cpf",
            Self::BirthDate => "dt_nascimento",
            Self::Income => "renda_mensal",
            Self::MaritalStatus => "estado_civil",
        }
    }

    /// Judges one raw field value. `today` anchors the age rule so the
    /// engine never reads the clock itself.
    pub fn accepts(self, value: &Value, today: NaiveDate) -> bool {
        match self {
            Self::Name => value.as_str().is_some_and(accept_name),
            Self::Cpf => value.as_str().is_some_and(cpf::is_valid),
            Self::BirthDate => value
                .as_str()
                .and_then(parse_birth_date)
                .is_some_and(|born| age_in_completed_years(born, today) >= 18),
            Self::Income => value.as_f64().is_some_and(|renda| renda >= 0.0),
            Self::MaritalStatus => value.as_str().is_some_and(accept_marital_status),
        }
    }
}

fn accept_name(nome: &str) -> bool {
    let length = nome.chars().count();
    (5..=60).contains(&length)
}

fn accept_marital_status(estado: &str) -> bool {
    VALID_MARITAL_STATES.contains(&estado.to_uppercase().as_str())
}

/// Strict `ddMMyyyy` parse: exactly eight digits, calendar-valid day and
/// month.
fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%d%m%Y").ok()
}

// Whole completed years by calendar-date comparison; someone turns 18 on the
// day of the birthday, not a fraction of a year earlier.
fn age_in_completed_years(born: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    age
}
