//! Business logic for recording, cancelling, and listing transactions.

use rust_decimal::Decimal;

use crate::core::services::{ServiceError, ServiceResult};
use crate::currency::{self, AmountError};
use crate::ledger::{Category, Ledger, Transaction, TransactionKind};

/// Validated entry points over the ledger's transaction history.
pub struct TransactionService;

impl TransactionService {
    /// Parses and validates a raw amount: it must be numeric (and fit in a
    /// `Decimal`) and strictly positive, checked in that order.
    pub fn validate_amount(raw: &str) -> ServiceResult<Decimal> {
        let amount = currency::parse_amount(raw).map_err(|err| match err {
            AmountError::Invalid => ServiceError::InvalidAmount {
                input: raw.trim().to_string(),
            },
            AmountError::OutOfRange => ServiceError::AmountOutOfRange,
        })?;
        if amount <= Decimal::ZERO {
            return Err(ServiceError::NonPositiveAmount { amount });
        }
        Ok(amount)
    }

    /// Resolves the category a new transaction is filed under. Blank input
    /// and names that match no registered category both resolve to "General";
    /// an unknown name is never rejected.
    pub fn resolve_category<'a>(ledger: &'a Ledger, raw: &str) -> &'a Category {
        if raw.trim().is_empty() {
            return ledger.default_category();
        }
        match ledger.find_category_by_name(raw) {
            Some(category) => category,
            None => {
                tracing::debug!(requested = raw, "unknown category, filing under default");
                ledger.default_category()
            }
        }
    }

    /// Validates `raw_amount`, resolves `raw_category`, and records the
    /// transaction. The ledger is untouched when validation fails or the
    /// balance could not absorb the amount exactly.
    pub fn record(
        ledger: &mut Ledger,
        kind: TransactionKind,
        raw_amount: &str,
        raw_category: &str,
    ) -> ServiceResult<Transaction> {
        let amount = Self::validate_amount(raw_amount)?;
        Self::record_validated(ledger, kind, amount, raw_category)
    }

    /// Records an amount already accepted by [`Self::validate_amount`].
    pub(crate) fn record_validated(
        ledger: &mut Ledger,
        kind: TransactionKind,
        amount: Decimal,
        raw_category: &str,
    ) -> ServiceResult<Transaction> {
        let category = Self::resolve_category(ledger, raw_category).name.clone();
        ledger
            .add_transaction(kind, amount, category)
            .cloned()
            .ok_or(ServiceError::AmountOutOfRange)
    }

    /// Removes the most recently recorded transaction, if any.
    pub fn cancel_last(ledger: &mut Ledger) -> Option<Transaction> {
        ledger.remove_last_transaction()
    }

    /// Transactions oldest first.
    pub fn history(ledger: &Ledger) -> &[Transaction] {
        ledger.transactions()
    }
}
