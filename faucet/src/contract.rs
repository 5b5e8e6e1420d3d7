use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, Event, MessageInfo,
    Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;

use crate::eligibility::{claimable_at, evaluate_claim, remaining_allowance};
use crate::error::ContractError;
use crate::msg::{
    CanClaimResponse, ClaimRecordResponse, ClaimableAtResponse, ConfigResponse, ExecuteMsg,
    InstantiateMsg, IsPausedResponse, QueryMsg, RemainingAllowanceResponse,
};
use crate::state::{Config, CLAIMS, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, PAUSED};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = deps.api.addr_validate(&msg.token)?;
    let config = Config::new(info.sender, token);
    CONFIG.save(deps.storage, &config)?;
    PAUSED.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("token", config.token)
        .add_attribute("claim_amount", config.claim_amount)
        .add_attribute("lifetime_cap", config.lifetime_cap)
        .add_attribute("cooldown_seconds", config.cooldown_seconds.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Claim {} => execute_claim(deps, env, info),
        ExecuteMsg::SetPaused { paused } => execute_set_paused(deps, info, paused),
    }
}

/// Record the claim and mint through the ledger.
///
/// The mint runs as a message after this handler returns; if it fails the
/// host reverts the whole transaction, including the record written here.
fn execute_claim(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let paused = PAUSED.load(deps.storage)?;
    let now = env.block.time.seconds();

    let record = CLAIMS.may_load(deps.storage, &info.sender)?;
    let updated = evaluate_claim(&config, paused, record.as_ref(), now)?;
    CLAIMS.save(deps.storage, &info.sender, &updated)?;

    let mint_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: info.sender.to_string(),
            amount: config.claim_amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(mint_msg)
        .add_event(claim_made_event(
            info.sender.as_str(),
            config.claim_amount,
            now,
        ))
        .add_attribute("action", "claim")
        .add_attribute("user", info.sender)
        .add_attribute("amount", config.claim_amount)
        .add_attribute("total_claimed", updated.total_claimed))
}

fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    PAUSED.save(deps.storage, &paused)?;

    Ok(Response::new()
        .add_event(pause_state_changed_event(paused))
        .add_attribute("action", "set_paused")
        .add_attribute("paused", paused.to_string()))
}

// ============================================================================
// Events
// ============================================================================

fn claim_made_event(account: &str, amount: Uint128, timestamp: u64) -> Event {
    Event::new("claim_made")
        .add_attribute("account", account)
        .add_attribute("amount", amount)
        .add_attribute("timestamp", timestamp.to_string())
}

fn pause_state_changed_event(paused: bool) -> Event {
    Event::new("pause_state_changed").add_attribute("paused", paused.to_string())
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CanClaim { address } => to_json_binary(&query_can_claim(deps, env, address)?),
        QueryMsg::RemainingAllowance { address } => {
            to_json_binary(&query_remaining_allowance(deps, address)?)
        }
        QueryMsg::IsPaused {} => to_json_binary(&query_is_paused(deps)?),
        QueryMsg::ClaimRecord { address } => to_json_binary(&query_claim_record(deps, address)?),
        QueryMsg::ClaimableAt { address } => to_json_binary(&query_claimable_at(deps, address)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

fn query_can_claim(deps: Deps, env: Env, address: String) -> StdResult<CanClaimResponse> {
    let user = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    let paused = PAUSED.load(deps.storage)?;
    let record = CLAIMS.may_load(deps.storage, &user)?;
    let now = env.block.time.seconds();

    let response = match evaluate_claim(&config, paused, record.as_ref(), now) {
        Ok(_) => CanClaimResponse {
            can_claim: true,
            reason: None,
        },
        Err(err) => CanClaimResponse {
            can_claim: false,
            reason: Some(err.to_string()),
        },
    };
    Ok(response)
}

fn query_remaining_allowance(deps: Deps, address: String) -> StdResult<RemainingAllowanceResponse> {
    let user = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    let record = CLAIMS.may_load(deps.storage, &user)?;

    Ok(RemainingAllowanceResponse {
        remaining: remaining_allowance(&config, record.as_ref()),
    })
}

fn query_is_paused(deps: Deps) -> StdResult<IsPausedResponse> {
    Ok(IsPausedResponse {
        paused: PAUSED.load(deps.storage)?,
    })
}

fn query_claim_record(deps: Deps, address: String) -> StdResult<ClaimRecordResponse> {
    let user = deps.api.addr_validate(&address)?;
    let record = CLAIMS.may_load(deps.storage, &user)?;

    Ok(match record {
        Some(record) => ClaimRecordResponse {
            last_claim: Some(record.last_claim),
            total_claimed: record.total_claimed,
        },
        None => ClaimRecordResponse {
            last_claim: None,
            total_claimed: Uint128::zero(),
        },
    })
}

fn query_claimable_at(deps: Deps, address: String) -> StdResult<ClaimableAtResponse> {
    let user = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    let record = CLAIMS.may_load(deps.storage, &user)?;

    Ok(ClaimableAtResponse {
        claimable_at: claimable_at(&config, record.as_ref()),
    })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        token: config.token,
        claim_amount: config.claim_amount,
        lifetime_cap: config.lifetime_cap,
        cooldown_seconds: config.cooldown_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CLAIM_AMOUNT, COOLDOWN_SECONDS};
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{from_json, SubMsg};

    fn instantiate_faucet(deps: DepsMut) {
        instantiate(
            deps,
            mock_env(),
            mock_info("admin", &[]),
            InstantiateMsg {
                token: "token".to_string(),
            },
        )
        .unwrap();
    }

    #[test]
    fn test_instantiate() {
        let mut deps = mock_dependencies();
        instantiate_faucet(deps.as_mut());

        let config: ConfigResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap()).unwrap();
        assert_eq!(config.admin.as_str(), "admin");
        assert_eq!(config.token.as_str(), "token");
        assert_eq!(config.cooldown_seconds, COOLDOWN_SECONDS);

        let paused: IsPausedResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::IsPaused {}).unwrap()).unwrap();
        assert!(!paused.paused);

        let version = cw2::get_contract_version(&deps.storage).unwrap();
        assert_eq!(version.contract, CONTRACT_NAME);
    }

    #[test]
    fn test_claim_dispatches_mint_and_event() {
        let mut deps = mock_dependencies();
        instantiate_faucet(deps.as_mut());
        let env = mock_env();

        let res = execute(
            deps.as_mut(),
            env.clone(),
            mock_info("alice", &[]),
            ExecuteMsg::Claim {},
        )
        .unwrap();

        let expected_mint = SubMsg::new(WasmMsg::Execute {
            contract_addr: "token".to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Mint {
                recipient: "alice".to_string(),
                amount: Uint128::new(CLAIM_AMOUNT),
            })
            .unwrap(),
            funds: vec![],
        });
        assert_eq!(res.messages, vec![expected_mint]);

        assert_eq!(res.events.len(), 1);
        let event = &res.events[0];
        assert_eq!(event.ty, "claim_made");
        assert_eq!(event.attributes[0].value, "alice");
        assert_eq!(event.attributes[1].value, CLAIM_AMOUNT.to_string());
        assert_eq!(
            event.attributes[2].value,
            env.block.time.seconds().to_string()
        );

        let record = CLAIMS
            .load(&deps.storage, &cosmwasm_std::Addr::unchecked("alice"))
            .unwrap();
        assert_eq!(record.last_claim, env.block.time.seconds());
        assert_eq!(record.total_claimed, Uint128::new(CLAIM_AMOUNT));
    }

    #[test]
    fn test_rejected_claim_leaves_no_record() {
        let mut deps = mock_dependencies();
        instantiate_faucet(deps.as_mut());

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::SetPaused { paused: true },
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &[]),
            ExecuteMsg::Claim {},
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Paused);

        let record: ClaimRecordResponse = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::ClaimRecord {
                    address: "alice".to_string(),
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(record.last_claim, None);
        assert_eq!(record.total_claimed, Uint128::zero());
    }

    #[test]
    fn test_set_paused_admin_only() {
        let mut deps = mock_dependencies();
        instantiate_faucet(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &[]),
            ExecuteMsg::SetPaused { paused: true },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
        assert!(!PAUSED.load(&deps.storage).unwrap());

        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::SetPaused { paused: true },
        )
        .unwrap();
        assert!(PAUSED.load(&deps.storage).unwrap());
        assert_eq!(res.events[0].ty, "pause_state_changed");
        assert_eq!(res.events[0].attributes[0].value, "true");
    }

    #[test]
    fn test_can_claim_reports_reason() {
        let mut deps = mock_dependencies();
        instantiate_faucet(deps.as_mut());

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &[]),
            ExecuteMsg::Claim {},
        )
        .unwrap();

        let res: CanClaimResponse = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::CanClaim {
                    address: "alice".to_string(),
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert!(!res.can_claim);
        let expected = ContractError::CooldownNotElapsed {
            claimable_at: mock_env().block.time.seconds() + COOLDOWN_SECONDS,
        };
        assert_eq!(res.reason, Some(expected.to_string()));
    }
}
