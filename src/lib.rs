//! Batch validation of customer records against a fixed five-field rule set
//! (name, CPF, birth date, monthly income, marital status), with a
//! timestamped JSON error report per run.

pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;
