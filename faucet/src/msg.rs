use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Ledger contract to mint through. The sender becomes admin.
    pub token: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Claim the fixed amount for the sender (24h cooldown, lifetime cap)
    Claim {},
    /// Admin: pause or resume claims
    SetPaused { paused: bool },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Whether `address` could claim at the current block time
    #[returns(CanClaimResponse)]
    CanClaim { address: String },
    /// Amount `address` can still claim over its lifetime
    #[returns(RemainingAllowanceResponse)]
    RemainingAllowance { address: String },
    #[returns(IsPausedResponse)]
    IsPaused {},
    /// Raw claim history of `address`
    #[returns(ClaimRecordResponse)]
    ClaimRecord { address: String },
    /// Returns the timestamp (seconds) when the cooldown of `address` ends.
    /// Returns 0 if the address has never claimed.
    #[returns(ClaimableAtResponse)]
    ClaimableAt { address: String },
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct CanClaimResponse {
    pub can_claim: bool,
    /// Rejection message when `can_claim` is false
    pub reason: Option<String>,
}

#[cw_serde]
pub struct RemainingAllowanceResponse {
    pub remaining: Uint128,
}

#[cw_serde]
pub struct IsPausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct ClaimRecordResponse {
    /// `None` if the address has never claimed
    pub last_claim: Option<u64>,
    pub total_claimed: Uint128,
}

#[cw_serde]
pub struct ClaimableAtResponse {
    pub claimable_at: u64,
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub token: Addr,
    pub claim_amount: Uint128,
    pub lifetime_cap: Uint128,
    pub cooldown_seconds: u64,
}
