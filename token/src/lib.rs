//! Faucet Token - Mint-Only Ledger for the Capped Faucet
//!
//! A minimal CW20-compatible ledger. Balances and total supply only ever grow,
//! and only through `Mint`, which is restricted to a single minter address.
//!
//! # Wiring
//! 1. Deployer instantiates the token (deployer becomes admin)
//! 2. Deployer instantiates the faucet with the token address
//! 3. Admin calls `BindMinter` with the faucet address (one-time)
//!
//! `Mint` and the `Balance`/`TokenInfo`/`Minter` queries share their wire
//! format with CW20, so the faucet drives this ledger through `cw20` types.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
