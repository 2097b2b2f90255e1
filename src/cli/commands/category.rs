use crate::cli::commands::CommandResult;
use crate::cli::io as cli_io;
use crate::cli::shell_context::ShellContext;
use crate::core::services::CategoryService;

const NAME_PROMPT: &str = "Enter new category name:";

pub(crate) fn add_category(context: &mut ShellContext) -> CommandResult {
    let raw_name = context.read_answer(NAME_PROMPT)?;
    match CategoryService::add(&mut context.ledger, &raw_name) {
        Ok(category) => {
            cli_io::print_success(format!("Category '{}' added successfully.", category.name))
        }
        Err(err) => cli_io::print_error(err),
    }
    Ok(())
}
