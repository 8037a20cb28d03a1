//! Coffer Core - account invariants and money-movement orchestration
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Account, User) and the error type
//! - **ports**: Trait definitions for external dependencies
//!   (AccountRepository, NotificationService)
//! - **services**: Money-movement orchestration (WithdrawMoney, TransferMoney)
//! - **adapters**: Concrete implementations (in-memory)
//!
//! The core is an in-process invariant-checking layer: it validates and
//! mutates accounts and hands persistence and alert delivery to the ports.
//! It is not a ledger; durable transaction logs, multi-currency support and
//! concurrent-access control are out of scope.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

use std::sync::Arc;

use ports::{AccountRepository, NotificationService};
use services::{TransferMoney, WithdrawMoney};

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{Account, User};

/// Main context for Coffer operations
///
/// This is the primary entry point for the business logic. It holds the
/// repository port and the two money-movement services, wired to the same
/// collaborators.
pub struct CofferContext {
    pub repository: Arc<dyn AccountRepository>,
    pub withdraw_money: WithdrawMoney,
    pub transfer_money: TransferMoney,
}

impl CofferContext {
    /// Create a new Coffer context
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        notifications: Arc<dyn NotificationService>,
    ) -> Self {
        let withdraw_money = WithdrawMoney::new(Arc::clone(&repository), Arc::clone(&notifications));
        let transfer_money = TransferMoney::new(Arc::clone(&repository), notifications);

        Self {
            repository,
            withdraw_money,
            transfer_money,
        }
    }
}
