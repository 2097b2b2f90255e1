use crate::cli::io::LineSource;
use crate::config::Config;
use crate::ledger::Ledger;

/// How the shell talks to its user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    /// Terminal session with line editing.
    Interactive,
    /// Piped input; prompts print as plain lines.
    Script,
}

/// Everything one shell session owns: its ledger, its settings, and the
/// line source it reads from.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) config: Config,
    pub(crate) ledger: Ledger,
    pub(crate) input: Box<dyn LineSource>,
    pub(crate) running: bool,
}
