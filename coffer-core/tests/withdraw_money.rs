//! Integration tests for the withdraw service
//!
//! The repository and notification collaborators are the in-memory adapters,
//! so every test can assert on persisted state and recorded notices.

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use coffer_core::adapters::{InMemoryAccountRepository, RecordingNotificationService};
use coffer_core::ports::AccountRepository;
use coffer_core::services::WithdrawMoney;
use coffer_core::{Account, Error, User};

// ============================================================================
// Test Helpers
// ============================================================================

struct Fixture {
    repository: Arc<InMemoryAccountRepository>,
    notifications: Arc<RecordingNotificationService>,
    withdraw: WithdrawMoney,
}

fn fixture() -> Fixture {
    let repository = Arc::new(InMemoryAccountRepository::new());
    let notifications = Arc::new(RecordingNotificationService::new());
    let withdraw = WithdrawMoney::new(repository.clone(), notifications.clone());
    Fixture {
        repository,
        notifications,
        withdraw,
    }
}

fn account_with_balance(email: &str, balance: i64) -> Account {
    Account::new(
        Uuid::new_v4(),
        User::new(Uuid::new_v4(), "Withdrawing User", email),
        Decimal::from(balance),
        Decimal::ZERO,
        Decimal::ZERO,
    )
}

// ============================================================================
// Failure Paths
// ============================================================================

#[tokio::test]
async fn test_unknown_account_fails_without_side_effects() {
    let fx = fixture();
    let missing = Uuid::new_v4();

    let err = fx
        .withdraw
        .execute(missing, Decimal::from(10))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::AccountNotFound(id) if id == missing));
    assert_eq!(fx.repository.update_calls(), 0);
    assert!(fx.notifications.funds_low_recipients().is_empty());
}

#[tokio::test]
async fn test_insufficient_funds_leaves_account_unpersisted() {
    let fx = fixture();
    let account = account_with_balance("short@user.com", 10);
    let account_id = account.id;
    fx.repository.insert(account).await;

    let err = fx
        .withdraw
        .execute(account_id, Decimal::from(20))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InsufficientFunds { .. }));

    let stored = fx.repository.get_account_by_id(account_id).await.unwrap();
    assert_eq!(stored.balance, Decimal::from(10));
    assert_eq!(stored.withdrawn, Decimal::ZERO);
    assert_eq!(fx.repository.update_calls(), 0);
    assert!(fx.notifications.funds_low_recipients().is_empty());
}

// ============================================================================
// Low-Funds Advisory
// ============================================================================

#[tokio::test]
async fn test_low_funds_notice_fired_once() {
    let fx = fixture();
    let account = account_with_balance("low@user.com", 600);
    let account_id = account.id;
    fx.repository.insert(account).await;

    // 600 - 200 = 400, below the 500 margin
    fx.withdraw
        .execute(account_id, Decimal::from(200))
        .await
        .unwrap();

    assert_eq!(fx.notifications.funds_low_recipients(), vec!["low@user.com"]);

    let stored = fx.repository.get_account_by_id(account_id).await.unwrap();
    assert_eq!(stored.balance, Decimal::from(400));
    assert_eq!(stored.withdrawn, Decimal::from(-200));
}

#[tokio::test]
async fn test_no_notice_when_funds_not_low() {
    let fx = fixture();
    let account = account_with_balance("flush@user.com", 1000);
    let account_id = account.id;
    fx.repository.insert(account).await;

    fx.withdraw
        .execute(account_id, Decimal::from(100))
        .await
        .unwrap();

    assert!(fx.notifications.funds_low_recipients().is_empty());
}

// ============================================================================
// Successful Withdrawal
// ============================================================================

#[tokio::test]
async fn test_withdrawal_is_persisted_exactly_once() {
    let fx = fixture();
    let account = account_with_balance("ok@user.com", 1000);
    let account_id = account.id;
    fx.repository.insert(account).await;

    fx.withdraw
        .execute(account_id, Decimal::from(250))
        .await
        .unwrap();

    assert_eq!(fx.repository.update_calls(), 1);

    let stored = fx.repository.get_account_by_id(account_id).await.unwrap();
    assert_eq!(stored.balance, Decimal::from(750));
    assert_eq!(stored.withdrawn, Decimal::from(-250));
    assert_eq!(stored.paid_in, Decimal::ZERO);
}

#[tokio::test]
async fn test_withdrawing_entire_balance_is_allowed() {
    let fx = fixture();
    let account = account_with_balance("drain@user.com", 500);
    let account_id = account.id;
    fx.repository.insert(account).await;

    fx.withdraw
        .execute(account_id, Decimal::from(500))
        .await
        .unwrap();

    let stored = fx.repository.get_account_by_id(account_id).await.unwrap();
    assert_eq!(stored.balance, Decimal::ZERO);
    // Emptying the account is also a low-funds situation.
    assert_eq!(
        fx.notifications.funds_low_recipients(),
        vec!["drain@user.com"]
    );
}
