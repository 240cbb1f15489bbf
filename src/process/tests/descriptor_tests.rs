//! Tests for `pm2 jlist` parsing.

use rstest::rstest;

use crate::process::domain::{ProcessDescriptor, parse_process_list};

#[rstest]
fn parses_entries_in_source_order() {
    let raw = r#"[
        {"pid": 101, "name": "web", "pm_id": 0,
         "monit": {"memory": 52428800, "cpu": 1.5},
         "pm2_env": {"status": "online", "restart_time": 2}},
        {"pid": 0, "name": "worker", "pm_id": 1,
         "monit": {"memory": 0, "cpu": 0},
         "pm2_env": {"status": "stopped"}}
    ]"#;

    let processes = parse_process_list(raw).expect("jlist output should parse");

    assert_eq!(
        processes,
        vec![
            ProcessDescriptor::new("web", 0, "online", 52_428_800),
            ProcessDescriptor::new("worker", 1, "stopped", 0),
        ]
    );
}

#[rstest]
fn missing_monitor_defaults_to_zero_memory() {
    let raw = r#"[{"name": "cron", "pm_id": 7, "pm2_env": {"status": "errored"}}]"#;

    let processes = parse_process_list(raw).expect("entry without monit should parse");

    assert_eq!(processes, vec![ProcessDescriptor::new("cron", 7, "errored", 0)]);
}

#[rstest]
fn empty_list_parses_to_no_processes() {
    let processes = parse_process_list("[]").expect("empty list should parse");

    assert!(processes.is_empty());
}

#[rstest]
#[case("")]
#[case("not json")]
#[case(r#"{"name": "web"}"#)]
#[case(r#"[{"pm_id": 1}]"#)]
fn rejects_output_that_is_not_a_process_array(#[case] raw: &str) {
    assert!(parse_process_list(raw).is_err());
}
