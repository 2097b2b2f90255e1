use crate::cli::commands::CommandResult;
use crate::cli::io as cli_io;
use crate::cli::shell_context::ShellContext;
use crate::core::services::SummaryService;
use crate::currency::format_amount;

pub(crate) fn show_balance(context: &mut ShellContext) -> CommandResult {
    let balance = SummaryService::balance(context.ledger());
    cli_io::print_info(format!("Current Balance: {}", context.money(balance)));
    Ok(())
}

pub(crate) fn show_balance_by_category(context: &mut ShellContext) -> CommandResult {
    match SummaryService::balance_by_category(context.ledger()) {
        Ok(totals) => {
            for total in totals {
                cli_io::print_info(format!("{}: {}", total.name, format_amount(total.total)));
            }
        }
        Err(err) => cli_io::print_error(err),
    }
    Ok(())
}
