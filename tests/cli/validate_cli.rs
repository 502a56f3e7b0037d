use std::path::Path;

use serde_json::Value;
use tempfile::tempdir;

fn parse_json_line(bytes: &[u8]) -> Value {
    let text = String::from_utf8(bytes.to_vec()).expect("utf8 output");
    let line = text.lines().next().expect("one output line");
    serde_json::from_str(line).expect("json line")
}

fn report_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read output dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("erros-") && name.ends_with(".json"))
        .collect();
    names.sort();
    names
}

#[test]
fn validate_writes_report_and_emits_summary() {
    let dir = tempdir().expect("tempdir");
    let input_path = dir.path().join("clientes.json");
    std::fs::write(
        &input_path,
        r#"[
            {"nome":"Ana Maria","cpf":"529.982.247-25","dt_nascimento":"01011990","renda_mensal":1000,"estado_civil":"S"},
            {"nome":"Bob","cpf":"111","dt_nascimento":"x","renda_mensal":-5,"estado_civil":"Z"}
        ]"#,
    )
    .expect("write input");
    let out_dir = dir.path().join("out");
    std::fs::create_dir(&out_dir).expect("create out dir");

    let output = assert_cmd::cargo::cargo_bin_cmd!("cadval")
        .args([
            "validate",
            "--input",
            input_path.to_str().expect("utf8 path"),
            "--output-dir",
            out_dir.to_str().expect("utf8 path"),
            "--today",
            "2024-06-15",
        ])
        .output()
        .expect("run command");

    assert_eq!(output.status.code(), Some(0));
    let summary = parse_json_line(&output.stdout);
    assert_eq!(summary["total_records"], Value::from(2));
    assert_eq!(summary["invalid_records"], Value::from(1));

    let reports = report_files(&out_dir);
    assert_eq!(reports.len(), 1);

    let report: Value = serde_json::from_str(
        &std::fs::read_to_string(out_dir.join(&reports[0])).expect("read report"),
    )
    .expect("report json");
    assert_eq!(report[0]["dados"]["nome"], Value::from("Bob"));
    assert_eq!(report[0]["erros"].as_array().expect("erros").len(), 5);
}

#[test]
fn validate_reads_records_from_stdin_by_default() {
    let dir = tempdir().expect("tempdir");

    let output = assert_cmd::cargo::cargo_bin_cmd!("cadval")
        .args(["validate", "--output-dir", dir.path().to_str().expect("utf8 path")])
        .write_stdin("[]")
        .output()
        .expect("run command");

    assert_eq!(output.status.code(), Some(0));
    let summary = parse_json_line(&output.stdout);
    assert_eq!(summary["total_records"], Value::from(0));
    assert_eq!(report_files(dir.path()).len(), 1);
}

#[test]
fn non_array_input_maps_to_exit_three_and_no_report() {
    let dir = tempdir().expect("tempdir");

    let output = assert_cmd::cargo::cargo_bin_cmd!("cadval")
        .args(["validate", "--output-dir", dir.path().to_str().expect("utf8 path")])
        .write_stdin(r#"{"nome":"Ana"}"#)
        .output()
        .expect("run command");

    assert_eq!(output.status.code(), Some(3));
    let error = parse_json_line(&output.stderr);
    assert_eq!(error["error"], Value::from("input_usage_error"));
    assert!(report_files(dir.path()).is_empty());
}

#[test]
fn malformed_json_maps_to_exit_three() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("cadval")
        .arg("validate")
        .write_stdin("[{")
        .output()
        .expect("run command");

    assert_eq!(output.status.code(), Some(3));
    let error = parse_json_line(&output.stderr);
    assert_eq!(error["error"], Value::from("input_usage_error"));
}

#[test]
fn missing_input_file_maps_to_exit_three() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("cadval")
        .args(["validate", "--input", "/definitely-missing/clientes.json"])
        .output()
        .expect("run command");

    assert_eq!(output.status.code(), Some(3));
    let error = parse_json_line(&output.stderr);
    assert_eq!(error["error"], Value::from("input_usage_error"));
    assert!(
        error["message"]
            .as_str()
            .expect("message")
            .contains("failed to open input file")
    );
}

#[test]
fn unknown_input_extension_maps_to_exit_three() {
    let dir = tempdir().expect("tempdir");
    let input_path = dir.path().join("clientes.dat");
    std::fs::write(&input_path, "[]").expect("write input");

    let output = assert_cmd::cargo::cargo_bin_cmd!("cadval")
        .args(["validate", "--input", input_path.to_str().expect("utf8 path")])
        .output()
        .expect("run command");

    assert_eq!(output.status.code(), Some(3));
    let error = parse_json_line(&output.stderr);
    assert_eq!(error["error"], Value::from("input_usage_error"));
}

#[test]
fn yaml_batch_is_accepted_via_from_flag() {
    let dir = tempdir().expect("tempdir");

    let output = assert_cmd::cargo::cargo_bin_cmd!("cadval")
        .args([
            "validate",
            "--from",
            "yaml",
            "--output-dir",
            dir.path().to_str().expect("utf8 path"),
            "--today",
            "2024-06-15",
        ])
        .write_stdin("- nome: Bob\n  estado_civil: S\n")
        .output()
        .expect("run command");

    assert_eq!(output.status.code(), Some(0));
    let summary = parse_json_line(&output.stdout);
    assert_eq!(summary["invalid_records"], Value::from(1));
}
