use thiserror::Error;

use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;

use crate::state::LotteryState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized.")]
    Unauthorized,

    #[error("Proxy address is not valid")]
    InvalidProxyAddress,

    #[error("Every fee tier must resolve to a positive amount")]
    InvalidFeeTable {},

    #[error("Every duration tier must resolve to a positive number of seconds")]
    InvalidDurationTable {},

    #[error("The lottery has already started")]
    AlreadyStarted {},

    #[error("Sent fee ({sent}) is lower than the required entrance fee ({required})")]
    InsufficientFee { sent: Uint128, required: Uint128 },

    #[error("The lottery is not open for new players. Current state : {status}")]
    NotOpen { status: LotteryState },

    #[error("Upkeep is not needed, the round is not ready to be decided")]
    UpkeepNotNeeded {},

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and cheat the randomness
    #[error("Unauthorized Receive execution")]
    UnauthorizedReceive,

    #[error("No outstanding randomness request matches id {request_id}")]
    NonexistentRequest { request_id: String },

    #[error("Received invalid randomness")]
    InvalidRandomness,

    #[error("Unreachable code, something weird happened")]
    Unreachable {},
}
