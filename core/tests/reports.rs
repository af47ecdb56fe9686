use tamago_core::reports::{E_LOWERING, E_RUNTIME, E_SYNTAX, Report, ReportCollector, compile_error_reports};
use tamago_core::vm::RuntimeError;
use tamago_core::{Level, TamagoErrorExt, compile_line, generate_error_report};

fn compile_err(src: &str) -> tamago_core::CompileError {
    match compile_line(src) {
        Ok(m) => panic!("Unexpected module: {}", m),
        Err(e) => e,
    }
}

#[test]
fn parse_errors_become_one_report_each() {
    let reports = compile_error_reports(&compile_err("+ ; *"));
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.code == Some(E_SYNTAX)));
    assert_eq!(reports[0].to_string(), "[ERROR] at 1:1 (E_2): no prefix parse function for + found");
}

#[test]
fn empty_program_report_carries_a_suggestion() {
    let reports = compile_error_reports(&compile_err(""));
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, Some(E_LOWERING));
    assert!(reports[0].suggestion.is_some());
    assert_eq!(reports[0].to_string(), "[ERROR] (E_6): empty program");
}

#[test]
fn rendering_points_at_the_offending_columns() {
    let src = "12 + *";
    let reports = compile_error_reports(&compile_err(src));
    console::set_colors_enabled(false);
    let rendered = reports[0].render_with_source(src);
    assert!(rendered.contains(" --> 1:6"), "got:\n{}", rendered);
    assert!(rendered.contains("12 + *"));
    assert!(rendered.contains("      |      ^"), "got:\n{}", rendered);
}

#[test]
fn collector_dedupes_and_counts() {
    let mut collector = ReportCollector::new();
    let err = compile_err("+");
    collector.extend(compile_error_reports(&err));
    collector.extend(compile_error_reports(&err));
    assert_eq!(collector.len(), 1);
    assert!(collector.has_errors());
    assert_eq!(collector.counts(), (0, 1, 0, 0));
    assert_eq!(collector.exit_code(), 1);

    collector.push(Report::from_error(&RuntimeError::MissingFunction("main".into()), Some(E_RUNTIME)));
    assert_eq!(collector.exit_code(), 2);
}

#[test]
fn empty_collector_exits_cleanly() {
    let collector = ReportCollector::new();
    assert!(!collector.has_errors());
    assert_eq!(collector.exit_code(), 0);
    assert_eq!(collector.render_all(|_| None), "");
}

#[test]
fn reports_serialize_to_json() {
    let reports = compile_error_reports(&compile_err("1 +"));
    let json = reports[0].to_json().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
    assert_eq!(value["message"], "no prefix parse function for EOF found");
    assert_eq!(value["severity"], "Error");
    assert_eq!(value["location"]["column"], 4);
}

#[test]
fn error_report_line_includes_level_and_location() {
    let err = compile_err("*").into_errors().remove(0);
    assert_eq!(err.level(), Level::Error);
    assert_eq!(
        generate_error_report(err.as_ref()),
        "TAMAGO | ERROR | 1:1 | no prefix parse function for * found"
    );
}
