//! CL8Y Faucet Contract - Capped Test Token Faucet
//!
//! Mints a fixed amount of a test token to whoever asks, through a ledger
//! contract that has bound this faucet as its only minter.
//!
//! # Claim Rules
//! - Faucet must not be paused (admin-controlled switch)
//! - 24h cooldown between claims of the same account
//! - Lifetime cap per account; a claim that would exceed it is rejected
//!
//! # Events
//! - `claim_made { account, amount, timestamp }` on every successful claim
//! - `pause_state_changed { paused }` on every `SetPaused`

pub mod contract;
pub mod eligibility;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::eligibility::{evaluate_claim, remaining_allowance};
pub use crate::error::ContractError;
