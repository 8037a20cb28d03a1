//! Account domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::User;

/// A customer account holding spendable funds plus two audit accumulators.
///
/// `withdrawn` and `paid_in` are running totals, not balances: `withdrawn`
/// grows more negative with every debit, `paid_in` grows with every credit
/// and is capped for the account's lifetime by [`Account::PAY_IN_LIMIT`].
/// Neither can be re-derived from `balance` alone, so the mutators keep them
/// in step with the balance on every movement.
///
/// Validation and mutation are split on purpose: [`debit`](Account::debit)
/// and [`credit`](Account::credit) perform no checks, so an orchestrating
/// service can run every validation for every affected account before
/// mutating any of them. Callers must not invoke a mutator without a prior
/// successful `ensure_*` call for the same amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub user: User,
    pub balance: Decimal,
    pub withdrawn: Decimal,
    pub paid_in: Decimal,
}

impl Account {
    /// Maximum lifetime `paid_in` total permitted.
    pub const PAY_IN_LIMIT: Decimal = Decimal::from_parts(4000, 0, 0, false, 0);
    /// Remaining pay-in headroom below which a credit triggers an advisory.
    pub const PAY_IN_LIMIT_APPROACH_WARNING: Decimal = Decimal::from_parts(500, 0, 0, false, 0);
    /// Post-withdrawal balance below which a debit triggers an advisory.
    pub const LOW_FUNDS_WARNING: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

    pub fn new(
        id: Uuid,
        user: User,
        balance: Decimal,
        withdrawn: Decimal,
        paid_in: Decimal,
    ) -> Self {
        Self {
            id,
            user,
            balance,
            withdrawn,
            paid_in,
        }
    }

    /// Check that a debit of `amount` would not overdraw the account.
    pub fn ensure_sufficient_funds(&self, amount: Decimal) -> Result<()> {
        if self.balance - amount < Decimal::ZERO {
            return Err(Error::InsufficientFunds {
                balance: self.balance,
                amount,
            });
        }
        Ok(())
    }

    /// True when a debit of `amount` would leave the balance below the
    /// low-funds warning margin.
    pub fn is_breaching_low_funds(&self, amount: Decimal) -> bool {
        self.balance - amount < Self::LOW_FUNDS_WARNING
    }

    /// Check that a credit of `amount` would not push `paid_in` past the
    /// lifetime pay-in limit. Exactly reaching the limit is allowed.
    pub fn ensure_pay_in_limit_not_exceeded(&self, amount: Decimal) -> Result<()> {
        if self.paid_in + amount > Self::PAY_IN_LIMIT {
            return Err(Error::PayInLimitExceeded {
                paid_in: self.paid_in,
                amount,
            });
        }
        Ok(())
    }

    /// True when a credit of `amount` would leave pay-in headroom below the
    /// approach-warning margin.
    pub fn is_approaching_pay_in_limit(&self, amount: Decimal) -> bool {
        Self::PAY_IN_LIMIT - self.paid_in - amount < Self::PAY_IN_LIMIT_APPROACH_WARNING
    }

    /// Apply a debit unconditionally. The caller must already have run a
    /// successful [`ensure_sufficient_funds`](Account::ensure_sufficient_funds)
    /// for the same amount.
    pub fn debit(&mut self, amount: Decimal) {
        self.balance -= amount;
        self.withdrawn -= amount;
    }

    /// Apply a credit unconditionally. The caller must already have run a
    /// successful
    /// [`ensure_pay_in_limit_not_exceeded`](Account::ensure_pay_in_limit_not_exceeded)
    /// for the same amount.
    pub fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
        self.paid_in += amount;
    }
}
