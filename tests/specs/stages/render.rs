//! Stage list rendering specs

use crate::prelude::*;

const BASE: [(&str, &str); 11] = [
    ("created", "Created"),
    ("documents", "Documents Uploaded"),
    ("review", "Under Review"),
    ("broker-approved", "Broker Approved"),
    ("commission-review", "Commission Review"),
    ("commission-approved", "Commission Approved"),
    ("commission-delivered", "Commission Delivered"),
    ("closing-scheduled", "Closing Scheduled"),
    ("closed", "Closed"),
    ("funds-received", "Funds Received"),
    ("payment-issued", "Payment Issued"),
];

/// Expected lines for the base sequence with `current_at` current
fn base_lines(current_at: Option<usize>) -> String {
    BASE.iter()
        .enumerate()
        .map(|(i, (id, label))| {
            let marker = match current_at {
                Some(c) if i < c => 'x',
                Some(c) if i == c => '>',
                _ => ' ',
            };
            stage_line(marker, id, label)
        })
        .collect()
}

#[test]
fn review_marks_earlier_stages_completed() {
    let (_project, cli) = talos();
    let expected = format!(
        "Progress: [####----------------] 20%\n{}",
        base_lines(Some(2))
    );
    cli.args(&["stages", "review"]).passes().stdout_eq(&expected);
}

#[test]
fn created_starts_at_zero() {
    let (_project, cli) = talos();
    let expected = format!(
        "Progress: [--------------------] 0%\n{}",
        base_lines(Some(0))
    );
    cli.args(&["stages", "created"]).passes().stdout_eq(&expected);
}

#[test]
fn payment_issued_fills_the_bar() {
    let (_project, cli) = talos();
    cli.args(&["stages", "payment-issued"])
        .passes()
        .stdout_has("Progress: [####################] 100%")
        .stdout_has(&stage_line('x', "closed", "Closed"))
        .stdout_has(&stage_line('>', "payment-issued", "Payment Issued"));
}

#[test]
fn lenient_unknown_status_renders_all_upcoming() {
    let (_project, cli) = talos();
    let expected = format!("Progress: [--------------------] 0%\n{}", base_lines(None));
    cli.args(&["stages", "escrow-hold", "--lenient"])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn json_output_carries_states_and_tones() {
    let (_project, cli) = talos();
    let json = cli
        .args(&["stages", "broker-approved", "-o", "json"])
        .passes()
        .json();

    assert_eq!(json["current"], "broker-approved");
    assert!(json["callout"].is_null());
    let stages = json["stages"].as_array().unwrap();
    assert_eq!(stages.len(), 11);
    assert_eq!(stages[0]["id"], "created");
    assert_eq!(stages[0]["state"], "completed");
    assert_eq!(stages[0]["tone"], "completed");
    assert_eq!(stages[3]["state"], "current");
    assert_eq!(stages[3]["tone"], "current");
    assert_eq!(stages[4]["state"], "upcoming");
    assert_eq!(stages[4]["label"], "Commission Review");
}
