//! `smile completions <shell>`.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

pub fn run_completions(shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "smile", &mut std::io::stdout());
}
