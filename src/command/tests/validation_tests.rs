//! Tests for per-command argument rules.

use rstest::rstest;

use crate::command::domain::{ValidationError, validation};
use crate::process::domain::{LogType, LogsRequest, ProcessTarget};

fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| (*token).to_owned()).collect()
}

#[rstest]
fn process_target_joins_tokens_with_single_spaces() {
    let target = validation::process_target(&args(&["my", "app"])).expect("target is valid");

    assert_eq!(target, ProcessTarget::new("my app"));
}

#[rstest]
fn process_target_requires_a_token() {
    assert_eq!(
        validation::process_target(&[]),
        Err(ValidationError::MissingProcessIdentifier)
    );
}

#[rstest]
fn logs_accepts_minimum_line_count() {
    let request =
        validation::logs_request(&args(&["15", "out", "web"])).expect("15 lines is accepted");

    assert_eq!(
        request,
        LogsRequest::new(15, LogType::Out, ProcessTarget::new("web"))
    );
}

#[rstest]
#[case("10")]
#[case("14")]
#[case("0")]
#[case("-20")]
#[case("abc")]
#[case("15.5")]
#[case("")]
fn logs_rejects_bad_line_counts(#[case] lines: &str) {
    let error = validation::logs_request(&args(&[lines, "out", "web"]))
        .expect_err("line count should be rejected");

    assert_eq!(
        error,
        ValidationError::InvalidLineCount {
            provided: lines.to_owned(),
        }
    );
}

#[rstest]
#[case("4294967295", u32::MAX)]
#[case("4294967296", u32::MAX)]
#[case("99999999999999999999999", u32::MAX)]
#[case("+20", 20)]
fn logs_caps_oversized_line_counts(#[case] lines: &str, #[case] expected: u32) {
    let request = validation::logs_request(&args(&[lines, "out", "web"]))
        .expect("large counts are accepted");

    assert_eq!(request.lines, expected);
}

#[rstest]
#[case("err", LogType::Err)]
#[case("error", LogType::Error)]
#[case("out", LogType::Out)]
fn logs_accepts_known_log_types(#[case] raw: &str, #[case] expected: LogType) {
    let request = validation::logs_request(&args(&["100", raw, "web"])).expect("type is valid");

    assert_eq!(request.log_type, expected);
}

#[rstest]
#[case("warn")]
#[case("Out")]
#[case("stdout")]
fn logs_rejects_unknown_log_types(#[case] raw: &str) {
    let error = validation::logs_request(&args(&["100", raw, "web"]))
        .expect_err("log type should be rejected");

    assert_eq!(
        error,
        ValidationError::InvalidLogType {
            provided: raw.to_owned(),
        }
    );
}

#[rstest]
fn line_count_is_checked_before_log_type() {
    let error = validation::logs_request(&args(&["10", "warn", "web"]))
        .expect_err("both arguments are invalid");

    assert!(matches!(error, ValidationError::InvalidLineCount { .. }));
}

#[rstest]
fn logs_with_only_lines_reports_missing_log_type() {
    let error =
        validation::logs_request(&args(&["20"])).expect_err("log type is missing");

    assert_eq!(
        error,
        ValidationError::InvalidLogType {
            provided: String::new(),
        }
    );
}

#[rstest]
fn logs_requires_an_identifier() {
    let error = validation::logs_request(&args(&["20", "out"]))
        .expect_err("identifier is missing");

    assert_eq!(error, ValidationError::MissingProcessIdentifier);
}

#[rstest]
fn logs_rejects_extra_tokens() {
    let error = validation::logs_request(&args(&["20", "out", "my", "app"]))
        .expect_err("extra tokens should be rejected");

    assert_eq!(
        error,
        ValidationError::UnexpectedArguments {
            expected: 3,
            provided: 4,
        }
    );
}

#[rstest]
fn validation_messages_are_user_facing() {
    assert_eq!(
        ValidationError::InvalidLineCount {
            provided: "10".to_owned()
        }
        .to_string(),
        "Invalid number of lines! Make sure you provide a number and one whose value is 15 or above!"
    );
    assert_eq!(
        ValidationError::MissingArguments {
            prefix: ";".to_owned(),
            label: "stop".to_owned(),
        }
        .to_string(),
        "Invalid usage. Do `;help stop` to view proper usage."
    );
}
