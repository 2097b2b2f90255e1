use std::io::{self, IsTerminal};

use crate::cli::core::LoopControl;
use crate::cli::io as cli_io;
use crate::cli::menus::MainMenu;
use crate::cli::output;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::config::Config;
use crate::errors::CliError;

const WELCOME: &str = "Welcome to the Expense Tracker!";
const COMMAND_PROMPT: &str = "Enter command:";

/// Starts a session on the process's stdin: line editing on a terminal,
/// plain line reads (and no colour) otherwise.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if io::stdin().is_terminal() {
        CliMode::Interactive
    } else {
        CliMode::Script
    };
    let config = Config::default().with_color(mode == CliMode::Interactive);

    let mut context = ShellContext::new(mode, config)?;
    run_session(&mut context)
}

/// Prints the menu, reads a command code, and dispatches until the user
/// exits or the input ends.
pub fn run_session(context: &mut ShellContext) -> Result<(), CliError> {
    output::set_color_enabled(context.config().color);
    tracing::info!(mode = ?context.mode(), "session started");
    cli_io::print_info(WELCOME);

    while context.is_running() {
        output::blank_line();
        output::info(MainMenu::render());

        let Some(line) = context.read_line(COMMAND_PROMPT)? else {
            context.finish();
            break;
        };
        if context.dispatch(&line)? == LoopControl::Exit {
            break;
        }
    }

    Ok(())
}
