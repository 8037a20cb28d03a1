//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies. The crate
//! ships only the in-memory pair; durable storage and real alert delivery
//! live with the embedding application.

pub mod memory;

pub use memory::{InMemoryAccountRepository, RecordingNotificationService};
