//! Result and error types for the core library

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Core library error type.
///
/// Every variant is an expected, recoverable-by-caller condition. The
/// money-movement services guarantee that when one of these surfaces, no
/// account state has been mutated or persisted by the failed operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("account not found: {0}")]
    AccountNotFound(Uuid),

    #[error("insufficient funds: balance {balance} cannot cover {amount}")]
    InsufficientFunds { balance: Decimal, amount: Decimal },

    #[error("pay-in limit exceeded: {paid_in} already paid in, cannot accept {amount}")]
    PayInLimitExceeded { paid_in: Decimal, amount: Decimal },

    #[error("storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
