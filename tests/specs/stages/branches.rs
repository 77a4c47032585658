//! Branch and optional block specs

use crate::prelude::*;

#[test]
fn attention_splices_after_review_by_default() {
    let (_project, cli) = talos();
    let run = cli
        .args(&[
            "stages",
            "needs-attention",
            "--attention",
            "documents",
            "--details",
            "Purchase agreement unsigned",
        ])
        .passes();

    let stdout = run.stdout();
    let review = stdout.find("review ").unwrap();
    let attention = stdout.find("needs-attention").unwrap();
    let approved = stdout.find("broker-approved").unwrap();
    assert!(review < attention && attention < approved);

    run.stdout_has(&format!(
        "  [>] {:<22} Needs Attention  (exception)\n",
        "needs-attention"
    ))
    .stdout_has(&stage_line('x', "review", "Under Review"))
    .stdout_has(&stage_line(' ', "broker-approved", "Broker Approved"))
    .stdout_has("Needs attention: Missing or invalid documents\n  Purchase agreement unsigned\n");
}

#[test]
fn attention_follows_the_interrupted_stage() {
    let (_project, cli) = talos();
    let json = cli
        .args(&[
            "stages",
            "needs-attention",
            "--attention",
            "broker",
            "--interrupted",
            "closed",
            "-o",
            "json",
        ])
        .passes()
        .json();

    let stages = json["stages"].as_array().unwrap();
    let ids: Vec<&str> = stages.iter().map(|s| s["id"].as_str().unwrap()).collect();
    let closed = ids.iter().position(|id| *id == "closed").unwrap();
    assert_eq!(ids[closed + 1], "needs-attention");
    assert_eq!(stages[closed]["state"], "completed");
    assert_eq!(stages[closed + 1]["tone"], "attention");
    assert_eq!(stages[closed + 2]["state"], "upcoming");
    assert_eq!(json["callout"]["kind"], "attention");
    assert_eq!(json["callout"]["reason"], "Broker action required");
}

#[test]
fn needs_commission_shows_prompt() {
    let (_project, cli) = talos();
    cli.args(&["stages", "needs-commission"])
        .passes()
        .stdout_has(&stage_line('x', "commission-review", "Commission Review"))
        .stdout_has(&format!(
            "  [>] {:<22} Needs Commission Details  (exception)\n",
            "needs-commission"
        ))
        .stdout_has(&stage_line(' ', "commission-approved", "Commission Approved"))
        .stdout_has("Commission details are required");
}

#[test]
fn commission_branch_hidden_otherwise() {
    let (_project, cli) = talos();
    cli.args(&["stages", "commission-approved"])
        .passes()
        .stdout_lacks("needs-commission")
        .stdout_lacks("needs-attention");
}

#[test]
fn post_close_block_appends_after_payment() {
    let (_project, cli) = talos();
    let run = cli
        .args(&["stages", "post-close-review", "--post-close"])
        .passes()
        .stdout_has(&stage_line('x', "payment-issued", "Payment Issued"))
        .stdout_has(&stage_line(
            'x',
            "post-close-initiated",
            "Post-Close Correction Initiated",
        ))
        .stdout_has(&stage_line('>', "post-close-review", "Post-Close Review"))
        .stdout_lacks("invoice-generated");
    assert_eq!(run.stdout().matches("  [").count(), 15);
}

#[test]
fn both_optional_blocks_keep_their_order() {
    let (_project, cli) = talos();
    let run = cli
        .args(&[
            "stages",
            "invoice-generated",
            "--post-close",
            "--short-term",
        ])
        .passes();
    let stdout = run.stdout();
    let resolved = stdout.find("post-close-resolved").unwrap();
    let invoice = stdout.find("invoice-generated").unwrap();
    assert!(resolved < invoice);
    run.stdout_has(&stage_line(
        'x',
        "post-close-resolved",
        "Post-Close Resolved",
    ))
    .stdout_has(&stage_line(
        '>',
        "invoice-generated",
        "Advancement Invoice Generated",
    ));
}

#[test]
fn short_term_status_without_flag_marks_nothing_current() {
    let (_project, cli) = talos();
    cli.args(&["stages", "payment-received"])
        .passes()
        .stdout_lacks("[>]")
        .stdout_lacks("payment-received");
}
