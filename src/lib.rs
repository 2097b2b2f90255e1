#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps an in-memory ledger of expenses and income, grouped
//! by category, behind a small numbered-menu shell.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Tracker tracing initialized.");
    });
}
