//! Withdraw service - single-account debit orchestration

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::ports::{AccountRepository, NotificationService};

/// Orchestrates a single-account withdrawal: fetch, validate, advise,
/// debit, write back.
pub struct WithdrawMoney {
    repository: Arc<dyn AccountRepository>,
    notifications: Arc<dyn NotificationService>,
}

impl WithdrawMoney {
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        notifications: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            repository,
            notifications,
        }
    }

    /// Withdraw `amount` from the given account.
    ///
    /// A validation failure propagates before any mutation, so the stored
    /// account is untouched. The low-funds notification is advisory only
    /// and never affects the outcome.
    pub async fn execute(&self, account_id: Uuid, amount: Decimal) -> Result<()> {
        let mut account = self.repository.get_account_by_id(account_id).await?;

        account.ensure_sufficient_funds(amount)?;

        if account.is_breaching_low_funds(amount) {
            self.notifications
                .notify_funds_low(&account.user.email)
                .await;
        }

        account.debit(amount);

        self.repository.update(&account).await?;

        debug!(account_id = %account_id, amount = %amount, "withdrawal applied");
        Ok(())
    }
}
