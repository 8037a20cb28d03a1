//! Notification port - advisory alert delivery abstraction

use async_trait::async_trait;

/// Advisory alert delivery, keyed by recipient email.
///
/// Both calls are fire-and-forget: the core never inspects or reacts to the
/// delivery outcome, so neither method returns a result. Handling delivery
/// failure is the adapter's concern.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Warn the recipient that a withdrawal is leaving their balance low.
    async fn notify_funds_low(&self, email: &str);

    /// Warn the recipient that a credit is consuming most of their remaining
    /// lifetime pay-in allowance.
    async fn notify_approaching_pay_in_limit(&self, email: &str);
}
