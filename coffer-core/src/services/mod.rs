//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a single money-movement use case.

mod transfer;
mod withdraw;

pub use transfer::TransferMoney;
pub use withdraw::WithdrawMoney;
