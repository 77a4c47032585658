//! `talos walk` specs

use crate::prelude::*;

const TO_CLOSED: [&str; 8] = [
    "documents",
    "review",
    "broker-approved",
    "commission-review",
    "commission-approved",
    "commission-delivered",
    "closing-scheduled",
    "closed",
];

#[test]
fn walking_to_closed_notifies_once() {
    let (_project, cli) = talos();
    let mut args = vec!["walk"];
    args.extend(TO_CLOSED);

    let run = cli
        .args(&args)
        .passes()
        .stdout_has("[normal] Transaction Closed: txn-1 has closed\n")
        .stdout_has("Transaction txn-1 is at closed\n")
        .stdout_has(&stage_line('x', "closing-scheduled", "Closing Scheduled"))
        .stdout_has(&stage_line('>', "closed", "Closed"))
        .stdout_lacks("Status Changed");
    assert_eq!(run.stdout().matches("] Transaction Closed").count(), 1);
}

#[test]
fn attention_round_trip_returns_to_interrupted_stage() {
    let (_project, cli) = talos();
    cli.args(&[
        "walk",
        "documents",
        "review",
        "needs-attention",
        "review",
        "--attention",
        "approval",
        "--details",
        "Lender letter missing",
    ])
    .passes()
    .stdout_has(
        "[important] Needs Attention: txn-1 needs attention at Under Review: \
         Approval withheld (Lender letter missing)\n",
    )
    .stdout_has("[normal] Issue Resolved: txn-1 resumed at Under Review\n")
    .stdout_has("Transaction txn-1 is at review\n")
    .stdout_has(&stage_line('>', "review", "Under Review"))
    .stdout_lacks("needs-attention ");
}

#[test]
fn open_attention_shows_callout() {
    let (_project, cli) = talos();
    cli.args(&["walk", "documents", "needs-attention", "--attention", "documents"])
        .passes()
        .stdout_has("Transaction txn-1 is at needs-attention\n")
        .stdout_has(&stage_line('x', "documents", "Documents Uploaded"))
        .stdout_has("Needs attention: Missing or invalid documents\n");
}

#[test]
fn commission_detour_keeps_branch_visible() {
    let (_project, cli) = talos();
    cli.args(&[
        "walk",
        "documents",
        "review",
        "broker-approved",
        "commission-review",
        "needs-commission",
        "commission-review",
        "commission-approved",
        "--id",
        "t-42",
    ])
    .passes()
    .stdout_has("[important] Commission Details Needed: t-42 is waiting on commission details\n")
    .stdout_has("Transaction t-42 is at commission-approved\n")
    .stdout_has(&format!(
        "  [ ] {:<22} Needs Commission Details  (exception)\n",
        "needs-commission"
    ))
    .stdout_has(&stage_line('>', "commission-approved", "Commission Approved"));
}

#[test]
fn post_close_correction_is_critical() {
    let (_project, cli) = talos();
    let mut args = vec!["walk"];
    args.extend(TO_CLOSED);
    args.extend(["funds-received", "payment-issued", "post-close-initiated"]);

    cli.args(&args)
        .passes()
        .stdout_has("[normal] Payment Issued: Payment issued for txn-1\n")
        .stdout_has("[critical] Post-Close Correction: A post-close correction was opened for txn-1\n")
        .stdout_has(&stage_line('x', "payment-issued", "Payment Issued"))
        .stdout_has(&stage_line(
            '>',
            "post-close-initiated",
            "Post-Close Correction Initiated",
        ));
}

#[test]
fn json_output_includes_transaction_and_notifications() {
    let (_project, cli) = talos();
    let json = cli
        .args(&["walk", "documents", "needs-attention", "-o", "json"])
        .passes()
        .json();

    assert_eq!(json["transaction"]["status"], "needs-attention");
    assert_eq!(json["transaction"]["attention"]["interrupted"], "documents");
    assert_eq!(json["notifications"][0]["title"], "Needs Attention");
    assert_eq!(json["notifications"][0]["urgency"], "important");
    assert_eq!(json["progress"]["current"], "needs-attention");
}

#[test]
fn skipping_a_stage_fails() {
    let (_project, cli) = talos();
    cli.args(&["walk", "review"])
        .fails()
        .stderr_has("Cannot move from 'created' to 'review'");
}

#[test]
fn commission_request_outside_review_fails() {
    let (_project, cli) = talos();
    cli.args(&["walk", "documents", "needs-commission"])
        .fails()
        .stderr_has("Cannot move from 'documents' to 'needs-commission'");
}
