pub(crate) mod commands;
pub mod core;
pub mod io;
pub mod menus;
pub mod output;
mod shell;
mod shell_context;

pub use self::core::LoopControl;
pub use shell::{run_cli, run_session};
pub use shell_context::{CliMode, ShellContext};
