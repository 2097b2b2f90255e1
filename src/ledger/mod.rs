//! Ledger domain models: the running balance, transaction history, and
//! category registry.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use category::{Category, DEFAULT_CATEGORY_NAME};
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind};
