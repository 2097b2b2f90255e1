//! Shell context helpers and command dispatch.

use std::io;

use rust_decimal::Decimal;

use crate::cli::commands::{self, CommandResult};
use crate::cli::io::{self as cli_io, EditorSource, LineSource, ScriptSource};
use crate::cli::menus::MenuCommand;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::config::Config;
use crate::currency::format_currency_value;
use crate::errors::CliError;
use crate::ledger::{Ledger, TransactionKind};

pub(crate) const GOODBYE: &str = "Exiting the Expense Tracker. Goodbye!";
const INVALID_COMMAND: &str = "Invalid command. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

impl ShellContext {
    /// Builds a context reading from the terminal editor or from stdin,
    /// depending on `mode`.
    pub fn new(mode: CliMode, config: Config) -> Result<Self, CliError> {
        let input: Box<dyn LineSource> = match mode {
            CliMode::Interactive => Box::new(EditorSource::new(&config)?),
            CliMode::Script => Box::new(ScriptSource::new(io::stdin().lock())),
        };
        Ok(Self::with_input(mode, config, input))
    }

    pub fn with_input(mode: CliMode, config: Config, input: Box<dyn LineSource>) -> Self {
        ShellContext {
            mode,
            config,
            ledger: Ledger::new(),
            input,
            running: true,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub(crate) fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        self.input.read_line(prompt)
    }

    /// Reads an answer to a sub-prompt; ended input counts as an empty answer
    /// so the running command still completes.
    pub(crate) fn read_answer(&mut self, prompt: &str) -> Result<String, CliError> {
        Ok(self.read_line(prompt)?.unwrap_or_default())
    }

    pub(crate) fn money(&self, amount: Decimal) -> String {
        format_currency_value(amount, &self.config.currency_symbol)
    }

    /// Runs the command bound to `code`. Validation failures are reported
    /// inside the command; only input failures surface as errors.
    pub fn dispatch(&mut self, code: &str) -> Result<LoopControl, CliError> {
        let code = code.trim();
        let Some(command) = MenuCommand::from_code(code) else {
            tracing::debug!(code, "unknown command code");
            cli_io::print_warning(INVALID_COMMAND);
            return Ok(LoopControl::Continue);
        };

        let result: CommandResult = match command {
            MenuCommand::ShowBalance => commands::summary::show_balance(self),
            MenuCommand::AddExpense => {
                commands::transaction::add_transaction(self, TransactionKind::Expense)
            }
            MenuCommand::AddIncome => {
                commands::transaction::add_transaction(self, TransactionKind::Income)
            }
            MenuCommand::CancelLast => commands::transaction::cancel_last(self),
            MenuCommand::ShowHistory => commands::transaction::show_history(self),
            MenuCommand::AddCategory => commands::category::add_category(self),
            MenuCommand::BalanceByCategory => commands::summary::show_balance_by_category(self),
            MenuCommand::Exit => {
                self.finish();
                return Ok(LoopControl::Exit);
            }
        };
        result?;
        Ok(LoopControl::Continue)
    }

    /// Prints the farewell and stops the loop.
    pub(crate) fn finish(&mut self) {
        cli_io::print_info(GOODBYE);
        self.running = false;
        tracing::info!(
            transactions = self.ledger.transaction_count(),
            "session finished"
        );
    }
}
