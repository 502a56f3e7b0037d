use std::io::{BufRead, BufReader, Read};

use serde_json::{Map, Value};

use crate::io::{Format, IoError};

/// Reads a batch of customer records in the given format.
///
/// Every format yields a flat sequence of records. JSON and YAML documents
/// must hold a top-level array; anything else is a structural failure, not a
/// validation finding.
pub fn read_records<R: Read>(reader: R, format: Format) -> Result<Vec<Value>, IoError> {
    match format {
        Format::Json => read_json(reader),
        Format::Yaml => read_yaml(reader),
        Format::Csv => read_csv(reader),
        Format::Jsonl => read_jsonl(reader),
    }
}

fn read_json<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let value: Value = serde_json::from_reader(reader)?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(IoError::NotARecordArray),
    }
}

fn read_yaml<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let yaml_value: serde_yaml::Value = serde_yaml::from_reader(reader)?;
    let json_value = serde_json::to_value(yaml_value)?;
    match json_value {
        Value::Array(items) => Ok(items),
        _ => Err(IoError::NotARecordArray),
    }
}

// CSV cells arrive as strings; the field rules judge them as-is, so a
// `renda_mensal` column read from CSV fails the numeric rule.
fn read_csv<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut out = Vec::new();
    for row in csv_reader.records() {
        let record = row?;
        let mut map = Map::new();
        for (index, cell) in record.iter().enumerate() {
            let key = headers
                .get(index)
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| format!("col_{index}"));
            map.insert(key, Value::String(cell.to_string()));
        }
        out.push(Value::Object(map));
    }
    Ok(out)
}

fn read_jsonl<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let mut values = Vec::new();
    let reader = BufReader::new(reader);
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(trimmed)?;
        values.push(value);
    }
    Ok(values)
}
