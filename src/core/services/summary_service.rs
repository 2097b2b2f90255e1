use rust_decimal::Decimal;

use super::{ServiceError, ServiceResult};
use crate::ledger::Ledger;

/// Net total of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub name: String,
    pub total: Decimal,
}

pub struct SummaryService;

impl SummaryService {
    /// Stored running balance; never recomputed from history.
    pub fn balance(ledger: &Ledger) -> Decimal {
        ledger.balance()
    }

    /// Signed totals for every registered category in registration order,
    /// zero included. Each category re-scans the full history, so the cost is
    /// categories × transactions.
    ///
    /// A category's running total can overflow even when the overall balance
    /// fits; that yields `AmountOutOfRange` instead of a partial listing.
    pub fn balance_by_category(ledger: &Ledger) -> ServiceResult<Vec<CategoryTotal>> {
        ledger
            .categories()
            .iter()
            .map(|category| {
                ledger
                    .transactions()
                    .iter()
                    .filter(|txn| txn.category == category.name)
                    .try_fold(Decimal::ZERO, |acc, txn| acc.checked_add(txn.signed_amount()))
                    .map(|total| CategoryTotal {
                        name: category.name.clone(),
                        total,
                    })
                    .ok_or(ServiceError::AmountOutOfRange)
            })
            .collect()
    }
}
