use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

fn tamago() -> Command {
    Command::cargo_bin("tamago").expect("tamago binary not built")
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).to_string()
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).to_string()
}

#[test]
fn repl_is_the_default_command() {
    let assert = tamago().write_stdin("21 + 21\n").assert().success();
    assert_eq!(
        stdout_of(&assert),
        "define i64 @main() {\nentry:\n\t%0 = add i64 21, 21\n\tret i64 %0\n}\n"
    );
}

#[test]
fn repl_reports_errors_per_line_and_continues() {
    let assert = tamago().arg("repl").write_stdin("+ ; *\n84 / 2\n").assert().success();
    let out = stdout_of(&assert);
    assert!(out.starts_with(
        "parse errors:\n\tno prefix parse function for + found\n\tno prefix parse function for * found\n"
    ));
    assert!(out.contains("%0 = sdiv i64 84, 2"), "got:\n{}", out);
}

#[test]
fn run_prints_each_line_value() {
    let td = tempdir().expect("tempdir");
    let src = td.path().join("calc.tg");
    fs::write(&src, "21 + 21\n\n43 - 1 - 1\n1 + 2 * 3\n").expect("write source");

    let assert = tamago().arg("run").arg(&src).assert().success();
    assert_eq!(stdout_of(&assert), "line 1: 42\nline 3: 41\nline 4: 7\n");
}

#[test]
fn run_fails_on_division_by_zero() {
    let td = tempdir().expect("tempdir");
    let src = td.path().join("zero.tg");
    fs::write(&src, "1 / 0\n2 * 3\n").expect("write source");

    let assert = tamago().arg("run").arg(&src).assert().code(1);
    let out = stdout_of(&assert);
    assert!(out.contains("line 1: division by zero"), "got:\n{}", out);
    assert!(out.contains("line 2: 6"));
    assert!(stderr_of(&assert).contains("(E_3): division by zero"));
}

#[test]
fn build_writes_ir_to_output_file() {
    let td = tempdir().expect("tempdir");
    let src = td.path().join("calc.tg");
    let out = td.path().join("calc.ll");
    fs::write(&src, "21 + 21\n").expect("write source");

    tamago().arg("build").arg(&src).arg("-o").arg(&out).assert().success();
    let ir = fs::read_to_string(&out).expect("read output");
    assert!(ir.contains("define i64 @main() {"));
    assert!(ir.contains("\t%0 = add i64 21, 21\n\tret i64 %0\n"));
}

#[test]
fn build_reports_diagnostics_and_exits_nonzero() {
    let td = tempdir().expect("tempdir");
    let src = td.path().join("bad.tg");
    fs::write(&src, "1 +\n2 * 2\n").expect("write source");

    let assert = tamago().arg("build").arg(&src).assert().code(1);
    let err = stderr_of(&assert);
    assert!(err.contains("no prefix parse function for EOF found"), "got:\n{}", err);
    assert!(err.contains(" --> 1:4"), "got:\n{}", err);
    assert!(stdout_of(&assert).contains("%0 = mul i64 2, 2"));
}

#[test]
fn build_dumps_tokens_as_json() {
    let td = tempdir().expect("tempdir");
    let src = td.path().join("calc.tg");
    fs::write(&src, "7 * 6\n").expect("write source");

    let assert = tamago()
        .args(["build", "--dump", "tokens", "--json"])
        .arg(&src)
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&assert)).expect("json dump");
    let tokens = value[0]["tokens"].as_array().expect("tokens array");
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1]["kind"], "Asterisk");
    assert_eq!(tokens[3]["kind"], "Eof");
}

#[test]
fn build_dumps_ast_as_text() {
    let td = tempdir().expect("tempdir");
    let src = td.path().join("calc.tg");
    fs::write(&src, "43 - 1 - 1\n").expect("write source");

    let assert = tamago().args(["build", "-d", "ast"]).arg(&src).assert().success();
    assert_eq!(stdout_of(&assert), "   1 | ((43 - 1) - 1)\n");
}

#[test]
fn missing_file_is_an_io_error() {
    let td = tempdir().expect("tempdir");
    let assert = tamago().arg("run").arg(td.path().join("nope.tg")).assert().code(1);
    assert!(stderr_of(&assert).contains("(E_1)"));
}

#[test]
fn run_keeps_going_past_invalid_utf8() {
    let td = tempdir().expect("tempdir");
    let src = td.path().join("mixed.tg");
    fs::write(&src, b"1 \xff 2\n21 + 21\n").expect("write source");

    let assert = tamago().arg("run").arg(&src).assert().success();
    assert_eq!(stdout_of(&assert), "line 1: 2\nline 2: 42\n");
}
