use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use cw20::{BalanceResponse, MinterResponse, TokenInfoResponse};

use crate::error::ContractError;
use crate::msg::{AdminResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{
    TokenInfo, ADMIN, BALANCES, CONTRACT_NAME, CONTRACT_VERSION, MINTER, TOKEN_INFO,
};

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
    validate_token_info(&msg)?;

    ADMIN.save(deps.storage, &info.sender)?;
    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply: Uint128::zero(),
        },
    )?;

    let mut response = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", info.sender)
        .add_attribute("symbol", msg.symbol);

    if let Some(minter) = msg.minter {
        let minter = deps.api.addr_validate(&minter)?;
        MINTER.save(deps.storage, &minter)?;
        response = response.add_attribute("minter", minter);
    }

    Ok(response)
}

fn validate_token_info(msg: &InstantiateMsg) -> Result<(), ContractError> {
    if !(3..=50).contains(&msg.name.len()) {
        return Err(ContractError::InvalidTokenInfo {
            reason: "name must be 3-50 characters".to_string(),
        });
    }
    if !(3..=12).contains(&msg.symbol.len()) {
        return Err(ContractError::InvalidTokenInfo {
            reason: "symbol must be 3-12 characters".to_string(),
        });
    }
    if msg.decimals > 18 {
        return Err(ContractError::InvalidTokenInfo {
            reason: "decimals must not exceed 18".to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::BindMinter { minter } => execute_bind_minter(deps, info, minter),
    }
}

fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let minter = MINTER.may_load(deps.storage)?;
    if minter.as_ref() != Some(&info.sender) {
        return Err(ContractError::UnauthorizedMinter);
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info.total_supply.checked_add(amount)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;

    BALANCES.update(
        deps.storage,
        &recipient_addr,
        |balance| -> Result<_, ContractError> {
            Ok(balance.unwrap_or_default().checked_add(amount)?)
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}

fn execute_bind_minter(
    deps: DepsMut,
    info: MessageInfo,
    minter: String,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }

    if let Some(existing) = MINTER.may_load(deps.storage)? {
        return Err(ContractError::MinterAlreadyBound {
            minter: existing.to_string(),
        });
    }

    let minter_addr = deps.api.addr_validate(&minter)?;
    MINTER.save(deps.storage, &minter_addr)?;

    Ok(Response::new()
        .add_attribute("action", "bind_minter")
        .add_attribute("minter", minter_addr))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Minter {} => to_json_binary(&query_minter(deps)?),
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
    }
}

fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(BalanceResponse { balance })
}

fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

fn query_minter(deps: Deps) -> StdResult<Option<MinterResponse>> {
    let minter = MINTER.may_load(deps.storage)?;
    Ok(minter.map(|m| MinterResponse {
        minter: m.to_string(),
        cap: None,
    }))
}

fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    let admin = ADMIN.load(deps.storage)?;
    Ok(AdminResponse {
        admin: admin.to_string(),
    })
}
