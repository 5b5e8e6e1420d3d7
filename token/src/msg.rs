use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw20::{BalanceResponse, MinterResponse, TokenInfoResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Bind the minter at deploy time when its address is already known.
    /// Otherwise the admin binds it later with `BindMinter`.
    pub minter: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint `amount` to `recipient` (same wire format as `Cw20ExecuteMsg::Mint`).
    /// Only the bound minter may call this.
    Mint { recipient: String, amount: Uint128 },
    /// Admin: bind the address allowed to mint. One-time.
    BindMinter { minter: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Balance of `address`, zero if it never received tokens
    #[returns(BalanceResponse)]
    Balance { address: String },
    /// Name, symbol, decimals and total supply
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    /// The bound minter, or `None` before `BindMinter`
    #[returns(Option<MinterResponse>)]
    Minter {},
    /// Returns the admin address
    #[returns(AdminResponse)]
    Admin {},
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: String,
}
