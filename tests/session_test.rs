use randomizer::adapters::random::SequenceRandom;
use randomizer::{NumberBase, Session, TomlConfig};
use std::io::Cursor;

fn run_script(config: &TomlConfig, values: Vec<i64>, script: &str) -> (String, Session<SequenceRandom>) {
    let mut session = Session::new(config, SequenceRandom::new(values));
    let mut out = Vec::new();
    session.run(Cursor::new(script.to_string()), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), session)
}

#[test]
fn test_decimal_generate_and_convert() {
    let script = "digits 3\ncount 3\ngenerate\nconvert\nquit\n";
    let (output, session) = run_script(&TomlConfig::default(), vec![255, 7, 16], script);

    let panel = session.panel(NumberBase::Decimal);
    assert_eq!(panel.generated(), ["255", "007", "016"]);
    let converted: Vec<_> = panel.converted().iter().map(|r| r.output().unwrap()).collect();
    assert_eq!(converted, ["FF", "7", "10"]);
    assert!(output.contains("007\n"));
    assert!(output.contains("FF\n"));
}

#[test]
fn test_generate_without_selection_does_nothing() {
    let (output, session) = run_script(&TomlConfig::default(), vec![1], "count 1\ngenerate\n");
    assert!(output.contains("Select digits and count first"));
    assert!(session.panel(NumberBase::Decimal).generated().is_empty());
}

#[test]
fn test_tabs_keep_separate_state() {
    let script = "digits 2\ncount 1\ngenerate\ntab hex\ndigits 4\ncount 1\ngenerate\nconvert\ntab dec\nshow\n";
    let (output, session) = run_script(&TomlConfig::default(), vec![42, 0xBEEF], script);

    assert_eq!(session.active(), NumberBase::Decimal);
    assert_eq!(session.panel(NumberBase::Decimal).generated(), ["42"]);
    assert_eq!(session.panel(NumberBase::Hexadecimal).generated(), ["BEEF"]);
    assert_eq!(
        session.panel(NumberBase::Hexadecimal).converted()[0].output(),
        Some("48879")
    );
    assert!(output.contains("decimal tab (digits: 2, count: 1)"));
}

#[test]
fn test_rejected_selection_keeps_session_alive() {
    let script = "tab hex\ndigits 3\ndigits 19\nfrobnicate\ndigits 8\ncount 5\ngenerate\n";
    let (output, session) = run_script(&TomlConfig::default(), vec![1], script);

    assert!(output.contains("not a valid value for digit_width"));
    assert!(output.contains("unknown command 'frobnicate'"));
    let hex = session.panel(NumberBase::Hexadecimal);
    assert_eq!(hex.selected_width(), Some(8));
    assert_eq!(hex.generated().len(), 5);
    assert!(hex.generated().iter().all(|n| n == "00000001"));
}

#[test]
fn test_presets_and_prefix_from_config() {
    let config = TomlConfig::from_toml_str(
        r#"
[decimal]
digit_widths = [18]
counts = [2]

[output]
failure_prefix = "FAILED:"
"#,
    )
    .unwrap();

    let script = "digits 18\ncount 2\ngenerate\nconvert\noptions\n";
    let (output, session) = run_script(&config, vec![5], script);

    assert!(output.contains("Digits: [18]"));
    let panel = session.panel(NumberBase::Decimal);
    assert_eq!(panel.generated()[0], "000000000000000005");
    assert_eq!(panel.converted()[0].render("FAILED:"), "5");
}

#[test]
fn test_end_of_input_ends_session() {
    let (output, _) = run_script(&TomlConfig::default(), vec![1], "help\n\n");
    assert!(output.contains("Commands:"));
    assert!(output.ends_with('\n'));
}

#[test]
fn test_invalid_utf8_line_is_reported_and_skipped() {
    let mut session = Session::new(&TomlConfig::default(), SequenceRandom::new(vec![9]));
    let mut out = Vec::new();
    let script = b"digits 1\r\n\xff\xfe\ncount 1\ngenerate\n".to_vec();
    session.run(Cursor::new(script), &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Input is not valid UTF-8, line ignored"));
    assert_eq!(session.panel(NumberBase::Decimal).generated(), ["9"]);
}
