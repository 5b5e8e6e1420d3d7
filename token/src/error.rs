use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only the bound minter can mint")]
    UnauthorizedMinter,

    #[error("Minter already bound to {minter}")]
    MinterAlreadyBound { minter: String },

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Invalid token info: {reason}")]
    InvalidTokenInfo { reason: String },
}
