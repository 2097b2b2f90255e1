/// Timestamp layout used when rendering history lines.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const DEFAULT_HISTORY_SIZE: usize = 100;

/// Presentation settings for a single shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub currency_symbol: String,
    pub timestamp_format: String,
    pub color: bool,
    pub history_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.into(),
            color: true,
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl Config {
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }
}
