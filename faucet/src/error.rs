use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    // ========================================================================
    // Claim Rejections
    // ========================================================================

    #[error("Faucet is paused")]
    Paused,

    #[error("Cooldown not elapsed: claimable at {claimable_at}")]
    CooldownNotElapsed { claimable_at: u64 },

    #[error("Lifetime limit reached: claimed {total_claimed} of {lifetime_cap}")]
    LifetimeLimitReached {
        total_claimed: Uint128,
        lifetime_cap: Uint128,
    },

    #[error("Block time {now} is earlier than last claim at {last_claim}")]
    ClockRegression { last_claim: u64, now: u64 },
}
