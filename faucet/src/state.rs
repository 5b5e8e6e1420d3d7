use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:cl8y-faucet";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One whole token at 18 decimals
const TOKEN_UNIT: u128 = 1_000_000_000_000_000_000;

pub const CLAIM_AMOUNT: u128 = 10 * TOKEN_UNIT;
pub const LIFETIME_CAP: u128 = 50 * TOKEN_UNIT;
pub const COOLDOWN_SECONDS: u64 = 86_400; // 24 hours

/// Faucet configuration, fixed at instantiation
#[cw_serde]
pub struct Config {
    /// Only address allowed to pause/unpause
    pub admin: Addr,
    /// Ledger contract the faucet mints through
    pub token: Addr,
    /// Minted per successful claim
    pub claim_amount: Uint128,
    /// Maximum cumulative amount any single account can claim
    pub lifetime_cap: Uint128,
    /// Minimum seconds between two claims of the same account
    pub cooldown_seconds: u64,
}

impl Config {
    /// Config with the compiled-in claim amount, lifetime cap and cooldown.
    pub fn new(admin: Addr, token: Addr) -> Self {
        Self {
            admin,
            token,
            claim_amount: Uint128::new(CLAIM_AMOUNT),
            lifetime_cap: Uint128::new(LIFETIME_CAP),
            cooldown_seconds: COOLDOWN_SECONDS,
        }
    }
}

/// Per-account claim history. Created on the first successful claim.
#[cw_serde]
pub struct ClaimRecord {
    /// Block time (seconds) of the latest successful claim
    pub last_claim: u64,
    /// Never exceeds `Config::lifetime_cap`
    pub total_claimed: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const PAUSED: Item<bool> = Item::new("paused");

/// account => claim record
pub const CLAIMS: Map<&Addr, ClaimRecord> = Map::new("claims");
