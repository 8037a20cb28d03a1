//! Account repository port - persistence abstraction

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::Account;

/// Account storage abstraction
///
/// The core depends only on this trait; adapters provide the actual
/// storage access logic. The repository owns the durable copy of every
/// account: a service holds a fetched `Account` value exclusively for the
/// duration of one operation and hands the mutated state back through a
/// write-back call.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Get an account by ID. Fails with [`Error::AccountNotFound`] when no
    /// such account exists.
    ///
    /// [`Error::AccountNotFound`]: crate::domain::result::Error::AccountNotFound
    async fn get_account_by_id(&self, id: Uuid) -> Result<Account>;

    /// Persist the full mutated state of an account. Must be idempotent
    /// under repeated identical calls.
    async fn update(&self, account: &Account) -> Result<()>;

    /// Persist several accounts in one all-or-nothing write.
    ///
    /// Transfers mutate two accounts and must never leave a debit persisted
    /// without its matching credit, so the atomicity guarantee lives here in
    /// the port contract: an implementation either persists every account in
    /// the slice or none of them.
    async fn update_all(&self, accounts: &[Account]) -> Result<()>;
}
