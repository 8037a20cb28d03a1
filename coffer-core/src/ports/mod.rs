//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod notifications;
mod repository;

pub use notifications::NotificationService;
pub use repository::AccountRepository;
