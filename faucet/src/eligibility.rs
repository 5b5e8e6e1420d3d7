//! Claim eligibility rules.
//!
//! `evaluate_claim` is the single source of truth for whether a claim goes
//! through: the `Claim` handler commits its result and the `CanClaim` query
//! only inspects it, so the two can never disagree for the same state and
//! block time.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. faucet not paused
//! 2. cooldown elapsed since the account's last claim (equality passes)
//! 3. cumulative total stays within the lifetime cap (no partial top-up)

use cosmwasm_std::Uint128;

use crate::error::ContractError;
use crate::state::{ClaimRecord, Config};

/// Evaluate a claim by an account with claim history `record` at block time
/// `now` (seconds). Returns the record to store if the claim is allowed.
pub fn evaluate_claim(
    config: &Config,
    paused: bool,
    record: Option<&ClaimRecord>,
    now: u64,
) -> Result<ClaimRecord, ContractError> {
    if paused {
        return Err(ContractError::Paused);
    }

    let total_claimed = match record {
        None => Uint128::zero(),
        Some(record) => {
            if now < record.last_claim {
                return Err(ContractError::ClockRegression {
                    last_claim: record.last_claim,
                    now,
                });
            }
            if now - record.last_claim < config.cooldown_seconds {
                return Err(ContractError::CooldownNotElapsed {
                    claimable_at: claimable_at(config, Some(record)),
                });
            }
            record.total_claimed
        }
    };

    let new_total = total_claimed.checked_add(config.claim_amount)?;
    if new_total > config.lifetime_cap {
        return Err(ContractError::LifetimeLimitReached {
            total_claimed,
            lifetime_cap: config.lifetime_cap,
        });
    }

    Ok(ClaimRecord {
        last_claim: now,
        total_claimed: new_total,
    })
}

/// Amount the account may still receive over its lifetime.
pub fn remaining_allowance(config: &Config, record: Option<&ClaimRecord>) -> Uint128 {
    let claimed = record.map(|r| r.total_claimed).unwrap_or_default();
    config.lifetime_cap.saturating_sub(claimed)
}

/// Earliest block time at which the cooldown has elapsed; 0 if never claimed.
pub fn claimable_at(config: &Config, record: Option<&ClaimRecord>) -> u64 {
    record
        .map(|r| r.last_claim.saturating_add(config.cooldown_seconds))
        .unwrap_or(0)
}
