//! Error reporting specs

use crate::prelude::*;

#[test]
fn unknown_status_fails_with_suggestions() {
    let (_project, cli) = talos();
    cli.args(&["stages", "escrow-hold"])
        .fails()
        .stderr_has("error: Unknown status 'escrow-hold'")
        .stderr_has("talos statuses");
}

#[test]
fn unknown_status_in_next_fails() {
    let (_project, cli) = talos();
    cli.args(&["next", "nope"])
        .fails()
        .stderr_has("Unknown status 'nope'");
}

#[test]
fn unknown_attention_reason_is_a_usage_error() {
    let (_project, cli) = talos();
    cli.args(&["stages", "review", "--attention", "weather"])
        .fails()
        .stderr_has("unknown attention reason: weather");
}

#[test]
fn invalid_walk_step_names_allowed_moves() {
    let (_project, cli) = talos();
    cli.args(&["walk", "documents", "closed"])
        .fails()
        .stderr_has("Cannot move from 'documents' to 'closed'")
        .stderr_has("talos next documents");
}
