pub mod category_service;
pub mod summary_service;
pub mod transaction_service;

pub use category_service::CategoryService;
pub use summary_service::{CategoryTotal, SummaryService};
pub use transaction_service::TransactionService;

use rust_decimal::Decimal;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Recoverable validation failures. The display text is the message shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid amount. Please enter a positive number.")]
    InvalidAmount { input: String },
    #[error("Amount must be greater than 0.")]
    NonPositiveAmount { amount: Decimal },
    /// The amount, or a balance it feeds into, does not fit in a `Decimal`.
    #[error("Amount is out of the supported range.")]
    AmountOutOfRange,
    #[error("Invalid category name.")]
    EmptyCategoryName,
    #[error("Category '{0}' already exists.")]
    DuplicateCategoryName(String),
}
