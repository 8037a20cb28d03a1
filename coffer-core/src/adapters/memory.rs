//! In-memory port implementations
//!
//! Thread-safe implementations backed by `tokio::sync::RwLock`, suitable
//! for tests and for embedding the core without a real storage or delivery
//! backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::Account;
use crate::ports::{AccountRepository, NotificationService};

/// Account repository holding all state in a `HashMap`.
///
/// `update_all` takes the write lock once and applies every account under
/// it, so the multi-account write is atomic with respect to readers.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<Uuid, Account>>,
    update_calls: AtomicUsize,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with an account (account-opening stand-in).
    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.insert(account.id, account);
    }

    /// Number of write-back calls received, counting `update_all` once.
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get_account_by_id(&self, id: Uuid) -> Result<Account> {
        self.accounts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(Error::AccountNotFound(id))
    }

    async fn update(&self, account: &Account) -> Result<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut accounts = self.accounts.write().await;
        if !accounts.contains_key(&account.id) {
            return Err(Error::AccountNotFound(account.id));
        }
        accounts.insert(account.id, account.clone());
        Ok(())
    }

    async fn update_all(&self, to_update: &[Account]) -> Result<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut accounts = self.accounts.write().await;
        // Validate every account before writing any, keeping the write
        // all-or-nothing.
        for account in to_update {
            if !accounts.contains_key(&account.id) {
                return Err(Error::AccountNotFound(account.id));
            }
        }
        for account in to_update {
            accounts.insert(account.id, account.clone());
        }
        Ok(())
    }
}

/// Notification service that records recipients instead of delivering.
#[derive(Default)]
pub struct RecordingNotificationService {
    funds_low: Mutex<Vec<String>>,
    approaching_pay_in_limit: Mutex<Vec<String>>,
}

impl RecordingNotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recipients of funds-low notices, in delivery order.
    pub fn funds_low_recipients(&self) -> Vec<String> {
        self.funds_low.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Recipients of approaching-pay-in-limit notices, in delivery order.
    pub fn approaching_pay_in_limit_recipients(&self) -> Vec<String> {
        self.approaching_pay_in_limit
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl NotificationService for RecordingNotificationService {
    async fn notify_funds_low(&self, email: &str) {
        self.funds_low
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(email.to_string());
    }

    async fn notify_approaching_pay_in_limit(&self, email: &str) {
        self.approaching_pay_in_limit
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(email.to_string());
    }
}
