//! Help and catalog listing specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let (_project, cli) = talos();
    cli.args(&["--help"])
        .passes()
        .stdout_has("stages")
        .stdout_has("statuses")
        .stdout_has("next")
        .stdout_has("walk");
}

#[test]
fn statuses_lists_every_status() {
    let (_project, cli) = talos();
    let run = cli.args(&["statuses"]).passes();
    let stdout = run.stdout();
    assert_eq!(stdout.lines().count(), 19);
    assert!(stdout.lines().next().unwrap().starts_with("created "));
    assert!(stdout.contains("needs-attention"));
    assert!(stdout.contains("branch"));
    assert!(stdout.contains("post-close"));
}

#[test]
fn statuses_json_carries_labels() {
    let (_project, cli) = talos();
    let json = cli.args(&["statuses", "-o", "json"]).passes().json();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 19);
    assert_eq!(items[1]["id"], "documents");
    assert_eq!(items[1]["label"], "Documents Uploaded");
    assert_eq!(items[1]["kind"], "base");
}

#[test]
fn next_lists_forward_moves_and_attention() {
    let (_project, cli) = talos();
    cli.args(&["next", "commission-review"])
        .passes()
        .stdout_eq("commission-approved\nneeds-commission\nneeds-attention (flag attention)\n");
}

#[test]
fn next_reports_terminal_status() {
    let (_project, cli) = talos();
    cli.args(&["next", "payment-received"])
        .passes()
        .stdout_eq("payment-received is terminal\n");
}

#[test]
fn completions_generate_for_bash() {
    let (_project, cli) = talos();
    cli.args(&["completions", "bash"])
        .passes()
        .stdout_has("talos");
}
