// tests/cli_tests.rs

use std::io::Cursor;

use tally_calc::cli::{execute_line, get_doc_category, get_docs_overview, run_lines, CliError, DocCategory, RunOptions};
use tally_calc::EvalConfig;

fn run(input: &str, options: &RunOptions) -> String {
    let mut evaluator = options.evaluator().unwrap();
    let mut output = Vec::new();
    run_lines(&mut evaluator, Cursor::new(input), &mut output, options, None).unwrap();
    String::from_utf8(output).unwrap()
}

// ============================================================================
// Plain Output
// ============================================================================

#[test]
fn test_single_line_contract() {
    let options = RunOptions::default();
    let mut evaluator = options.evaluator().unwrap();
    assert_eq!(execute_line(&mut evaluator, "(2+3)*4\r\n", &options).unwrap(), "20");
}

#[test]
fn test_error_is_printed_not_returned() {
    let options = RunOptions::default();
    let mut evaluator = options.evaluator().unwrap();
    assert_eq!(execute_line(&mut evaluator, "", &options).unwrap(), "SYNTAX ERROR");
    assert_eq!(execute_line(&mut evaluator, "√-4", &options).unwrap(), "ROOT OF NEGATIVE ERROR");
}

#[test]
fn test_precision() {
    let options = RunOptions {
        precision: Some(3),
        ..Default::default()
    };
    assert_eq!(run("2/3\n10/4\n", &options), "0.667\n2.5\n");
}

#[test]
fn test_ieee_option() {
    let options = RunOptions {
        config: EvalConfig::default().with_domain_checks(false),
        ..Default::default()
    };
    assert_eq!(run("1/0\n", &options), "inf\n");
}

#[test]
fn test_prompt_written_per_read() {
    let options = RunOptions::default();
    let mut evaluator = options.evaluator().unwrap();
    let mut output = Vec::new();
    let mut prompt = Vec::new();

    run_lines(
        &mut evaluator,
        Cursor::new("1\n2\n"),
        &mut output,
        &options,
        Some(&mut prompt),
    )
    .unwrap();

    assert_eq!(String::from_utf8(prompt).unwrap(), "> > > ");
    assert_eq!(String::from_utf8(output).unwrap(), "1\n2\n");
}

// ============================================================================
// JSON Output
// ============================================================================

#[test]
fn test_json_lines() {
    let options = RunOptions {
        json: true,
        ..Default::default()
    };
    let out = run("2+3\n2**3\n", &options);
    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["result"], 5.0);
    assert_eq!(lines[0]["display"], "5");
    assert_eq!(lines[1]["error"], "SYNTAX ERROR");
    assert_eq!(lines[1]["input"], "2**3");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_reserved_sqrt_symbol_rejected() {
    let options = RunOptions {
        config: EvalConfig::default().with_sqrt_symbol('a'),
        ..Default::default()
    };
    let err = options.evaluator().unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
    assert!(err.to_string().contains("'a'"));
}

#[test]
fn test_custom_sqrt_symbol_with_tokens() {
    let options = RunOptions {
        config: EvalConfig::default().with_sqrt_symbol('#'),
        show_tokens: true,
        ..Default::default()
    };
    assert_eq!(run("#81\n", &options), "tokens = # 81\n9\n");
}

// ============================================================================
// Docs
// ============================================================================

#[test]
fn test_docs_overview_lists_categories() {
    let overview = get_docs_overview();
    for name in ["numbers", "operators", "roots", "brackets", "answer", "errors"] {
        assert!(overview.contains(name), "missing {}", name);
        assert!(DocCategory::from_name(name).is_some());
        assert!(get_doc_category(name).is_ok());
    }
}

#[test]
fn test_unknown_doc_category() {
    assert!(matches!(
        get_doc_category("variables"),
        Err(CliError::UnknownCategory(_))
    ));
}
