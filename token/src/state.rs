use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:cl8y-faucet-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Token metadata and running supply
#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Sum of all balances; increased together with the recipient balance on mint
    pub total_supply: Uint128,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// Deployer; the only address allowed to bind the minter
pub const ADMIN: Item<Addr> = Item::new("admin");

/// Absent until bound. Never rebound once set.
pub const MINTER: Item<Addr> = Item::new("minter");

/// account => balance
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balance");
