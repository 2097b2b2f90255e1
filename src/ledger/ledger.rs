use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;

use super::{
    category::{Category, DEFAULT_CATEGORY_NAME},
    transaction::{Transaction, TransactionKind},
};

const DEFAULT_CATEGORY_ID: u64 = 1;
const FIRST_TRANSACTION_ID: u64 = 1;

/// In-memory store for the running balance, the ordered transaction history,
/// and the category registry.
///
/// The balance always equals the signed sum of `transactions`; fields are
/// private so only the methods below can change either side.
#[derive(Debug, Clone)]
pub struct Ledger {
    balance: Decimal,
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    next_transaction_id: u64,
    next_category_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates an empty ledger holding only the default "General" category.
    pub fn new() -> Self {
        Self {
            balance: Decimal::ZERO,
            transactions: Vec::new(),
            categories: vec![Category::new(DEFAULT_CATEGORY_ID, DEFAULT_CATEGORY_NAME)],
            next_transaction_id: FIRST_TRANSACTION_ID,
            next_category_id: DEFAULT_CATEGORY_ID + 1,
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The permanent "General" category. It is created first and categories
    /// are never removed, so it always sits at the head of the registry.
    pub fn default_category(&self) -> &Category {
        &self.categories[0]
    }

    /// Appends a transaction stamped with the current local time.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        category: impl Into<String>,
    ) -> Option<&Transaction> {
        self.add_transaction_at(kind, amount, category, Local::now().naive_local())
    }

    /// Appends a transaction with an explicit timestamp and applies its
    /// signed amount to the balance.
    ///
    /// Returns `None` and leaves the ledger untouched when the new balance
    /// would overflow or could only be stored rounded, so cancelling always
    /// restores the previous balance exactly.
    pub fn add_transaction_at(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        category: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Option<&Transaction> {
        let signed = kind.signed(amount);
        let Some(balance) = self
            .balance
            .checked_add(signed)
            .filter(|next| next.checked_sub(self.balance) == Some(signed))
        else {
            tracing::debug!(%amount, balance = %self.balance, "amount does not fit the balance");
            return None;
        };

        let id = self.next_transaction_id;
        self.next_transaction_id += 1;

        let transaction = Transaction::new(id, kind, amount, category, timestamp);
        self.balance = balance;
        tracing::debug!(
            id,
            kind = %transaction.kind,
            amount = %transaction.amount,
            category = %transaction.category,
            "transaction recorded"
        );

        let index = self.transactions.len();
        self.transactions.push(transaction);
        Some(&self.transactions[index])
    }

    /// Pops the most recently appended transaction and reverses its effect on
    /// the balance. Returns `None` without touching anything when empty.
    pub fn remove_last_transaction(&mut self) -> Option<Transaction> {
        let removed = self.transactions.pop()?;
        // Exact: `add_transaction_at` only accepts amounts whose effect it
        // can subtract back without rounding.
        self.balance -= removed.signed_amount();
        tracing::debug!(id = removed.id, "transaction cancelled");
        Some(removed)
    }

    /// Registers a category under the next id. Uniqueness is checked by the
    /// caller.
    pub fn add_category(&mut self, name: impl Into<String>) -> &Category {
        let id = self.next_category_id;
        self.next_category_id += 1;

        let category = Category::new(id, name);
        tracing::debug!(id, name = %category.name, "category registered");

        let index = self.categories.len();
        self.categories.push(category);
        &self.categories[index]
    }

    pub fn find_category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.matches_name(name))
    }
}
