// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `talos completions` - shell completion scripts
//!
//! ```bash
//! talos completions zsh > ~/.zfunc/_talos
//! ```

use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

const BIN_NAME: &str = "talos";

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `C` into `out`
pub fn write_completions<C: CommandFactory>(shell: Shell, out: &mut dyn Write) {
    let mut cmd = C::command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
}

pub fn handle<C: CommandFactory>(args: CompletionsArgs) {
    write_completions::<C>(args.shell, &mut std::io::stdout().lock());
}
