//! Transfer service - two-account debit/credit orchestration

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::ports::{AccountRepository, NotificationService};

/// Orchestrates a transfer between two accounts.
///
/// Both failure-capable validations run before either account is mutated,
/// which is what gives the operation its all-or-nothing semantics: a
/// pay-in-limit failure on the destination leaves the source account exactly
/// as fetched, with nothing persisted. The write-back goes through
/// [`AccountRepository::update_all`] so the debit and the credit land in one
/// atomic persistence call.
pub struct TransferMoney {
    repository: Arc<dyn AccountRepository>,
    notifications: Arc<dyn NotificationService>,
}

impl TransferMoney {
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        notifications: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            repository,
            notifications,
        }
    }

    /// Move `amount` from one account to another.
    ///
    /// The notifications fired along the way are observational: the
    /// funds-low notice for the source is sent as soon as its predicate
    /// holds, even if the destination's pay-in check then fails the whole
    /// operation.
    pub async fn execute(
        &self,
        from_account_id: Uuid,
        to_account_id: Uuid,
        amount: Decimal,
    ) -> Result<()> {
        let mut from = self.repository.get_account_by_id(from_account_id).await?;
        let mut to = self.repository.get_account_by_id(to_account_id).await?;

        from.ensure_sufficient_funds(amount)?;

        if from.is_breaching_low_funds(amount) {
            self.notifications.notify_funds_low(&from.user.email).await;
        }

        to.ensure_pay_in_limit_not_exceeded(amount)?;

        if to.is_approaching_pay_in_limit(amount) {
            self.notifications
                .notify_approaching_pay_in_limit(&to.user.email)
                .await;
        }

        from.debit(amount);
        to.credit(amount);

        self.repository.update_all(&[from, to]).await?;

        debug!(
            from_account_id = %from_account_id,
            to_account_id = %to_account_id,
            amount = %amount,
            "transfer applied"
        );
        Ok(())
    }
}
