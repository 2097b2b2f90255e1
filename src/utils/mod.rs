use std::sync::Once;

use tracing_subscriber::filter::Directive;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "expense_tracker=warn";

/// Installs the global tracing subscriber. Logs go to stderr so they never
/// mix with the menu output on stdout; `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
            if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }

        if let Err(err) = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            tracing::debug!(%err, "keeping the already installed tracing subscriber");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_parses() {
        assert!(DEFAULT_DIRECTIVE.parse::<Directive>().is_ok());
    }

    #[test]
    fn init_tracing_tolerates_an_existing_subscriber() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        init_tracing();
        init_tracing();
        tracing::debug!("still logging");
    }
}
