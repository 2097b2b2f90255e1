use crate::cli::commands::CommandResult;
use crate::cli::io as cli_io;
use crate::cli::shell_context::ShellContext;
use crate::core::services::{CategoryService, TransactionService};
use crate::ledger::TransactionKind;

const AMOUNT_PROMPT: &str = "Enter amount:";
const CATEGORY_PROMPT: &str = "Enter category name (or press Enter for General):";

/// Asks for an amount, then (only if it is valid) for a category.
pub(crate) fn add_transaction(context: &mut ShellContext, kind: TransactionKind) -> CommandResult {
    let raw_amount = context.read_answer(AMOUNT_PROMPT)?;
    let amount = match TransactionService::validate_amount(&raw_amount) {
        Ok(amount) => amount,
        Err(err) => {
            cli_io::print_error(err);
            return Ok(());
        }
    };

    cli_io::print_info(format!(
        "Available categories: {}",
        CategoryService::joined_names(context.ledger())
    ));
    let raw_category = context.read_answer(CATEGORY_PROMPT)?;

    let recorded =
        TransactionService::record_validated(&mut context.ledger, kind, amount, &raw_category);
    let transaction = match recorded {
        Ok(transaction) => transaction,
        Err(err) => {
            cli_io::print_error(err);
            return Ok(());
        }
    };
    cli_io::print_success(format!(
        "{} of {} in '{}' category added successfully.",
        transaction.kind,
        context.money(transaction.amount),
        transaction.category
    ));
    Ok(())
}

pub(crate) fn cancel_last(context: &mut ShellContext) -> CommandResult {
    match TransactionService::cancel_last(&mut context.ledger) {
        Some(_) => cli_io::print_success("Last transaction canceled successfully."),
        None => cli_io::print_info("No transactions to cancel."),
    }
    Ok(())
}

pub(crate) fn show_history(context: &mut ShellContext) -> CommandResult {
    let history = TransactionService::history(context.ledger());
    if history.is_empty() {
        cli_io::print_info("Transaction history is empty.");
        return Ok(());
    }
    for transaction in history {
        cli_io::print_info(format!(
            "{}: {} in '{}' on {}",
            transaction.kind,
            context.money(transaction.amount),
            transaction.category,
            transaction.timestamp.format(&context.config().timestamp_format)
        ));
    }
    Ok(())
}
