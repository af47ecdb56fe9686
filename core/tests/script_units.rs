use std::fs;
use tempfile::tempdir;
use tamago_core::{Script, TamagoErrorExt, compile_script, run_module};

#[test]
fn script_loads_from_disk_and_splits_into_units() {
    let td = tempdir().expect("tempdir");
    let script_file = td.path().join("calc.tg");
    fs::write(&script_file, "21 + 21\n\n84 / 2\r\n   \n1 +\n").expect("write script");

    let script = Script::new(script_file.clone()).expect("Failed to load script file");
    assert_eq!(script.name, "calc.tg");

    let units: Vec<(usize, &str)> = script.units().collect();
    assert_eq!(units, vec![(1, "21 + 21"), (3, "84 / 2"), (5, "1 +")]);
}

#[test]
fn each_unit_compiles_independently() {
    let script = Script::from_source("<stdin>", "21 + 21\n1 +\n6 * 7\n");
    let results = compile_script(&script);
    assert_eq!(results.len(), 3);

    let (line, first) = &results[0];
    assert_eq!(*line, 1);
    let module = first.as_ref().expect("first line compiles");
    assert_eq!(run_module(module), Ok(42));

    let (line, second) = &results[1];
    assert_eq!(*line, 2);
    let err = second.as_ref().expect_err("second line fails");
    assert!(err.to_string().starts_with("parse errors:\n"));

    let (_, third) = &results[2];
    let module = third.as_ref().expect("third line compiles");
    assert!(module.to_string().contains("%0 = mul i64 6, 7"));
}

#[test]
fn diagnostics_use_the_script_line_number() {
    let script = Script::from_source("<stdin>", "1\n\n\n2 + *\n");
    let results = compile_script(&script);
    let err = match &results[1].1 {
        Ok(m) => panic!("Unexpected module: {}", m),
        Err(e) => e.clone(),
    };
    let boxed = err.into_errors();
    let loc = boxed[0].location().expect("location");
    assert_eq!(loc.line, 4);
    assert_eq!(loc.column, 5);
}

#[test]
fn missing_script_is_an_error() {
    let td = tempdir().expect("tempdir");
    match Script::new(td.path().join("nope.tg")) {
        Ok(s) => panic!("Unexpected script: {}", s),
        Err(e) => {
            assert_eq!(e.issuer(), "tamago.script");
            assert!(e.message().contains("nope.tg"));
        }
    }
}

#[test]
fn blank_script_is_empty() {
    assert!(Script::from_source("blank", "\n  \n\t\n").is_empty());
    assert_eq!(Script::from_source("blank", "\n  \n").units().count(), 0);
}

#[test]
fn invalid_utf8_only_affects_its_own_line() {
    let td = tempdir().expect("tempdir");
    let script_file = td.path().join("mixed.tg");
    fs::write(&script_file, b"1 \xff 2\n21 + 21\n").expect("write script");

    let script = Script::new(script_file).expect("Failed to load script file");
    let results = compile_script(&script);
    assert_eq!(results.len(), 2);

    let first = results[0].1.as_ref().expect("first line compiles");
    assert_eq!(run_module(first), Ok(2));
    let second = results[1].1.as_ref().expect("second line compiles");
    assert_eq!(run_module(second), Ok(42));
}
