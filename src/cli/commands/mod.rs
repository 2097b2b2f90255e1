//! Console handlers for the main-menu commands. Each handler reports its own
//! validation failures; only input failures are returned.

pub(crate) mod category;
pub(crate) mod summary;
pub(crate) mod transaction;

use crate::errors::CliError;

pub type CommandResult = Result<(), CliError>;
