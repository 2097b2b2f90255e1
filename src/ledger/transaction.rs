use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Direction of a money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "Expense",
            TransactionKind::Income => "Income",
        }
    }

    /// Applies the kind's sign to an unsigned amount.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Expense => -amount,
            TransactionKind::Income => amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded expense or income. `category` is a copy of the category name
/// at creation time, not a reference to the category record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: u64,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category: String,
    pub timestamp: NaiveDateTime,
}

impl Transaction {
    pub fn new(
        id: u64,
        kind: TransactionKind,
        amount: Decimal,
        category: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            category: category.into(),
            timestamp,
        }
    }

    /// Effect of this transaction on the balance.
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn expense_is_negative_income_is_positive() {
        let amount = Decimal::new(1250, 2);
        let expense = Transaction::new(1, TransactionKind::Expense, amount, "General", at_noon());
        let income = Transaction::new(2, TransactionKind::Income, amount, "General", at_noon());
        assert_eq!(expense.signed_amount(), Decimal::new(-1250, 2));
        assert_eq!(income.signed_amount(), amount);
    }

    #[test]
    fn kind_displays_its_label() {
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
        assert_eq!(TransactionKind::Income.to_string(), "Income");
    }
}
