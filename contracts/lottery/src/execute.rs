use cosmwasm_std::{
    coins, ensure_eq, BankMsg, Coin, DepsMut, Env, MessageInfo, Response, Uint128,
};
use cw_utils::may_pay;
use nois::NoisCallback;

use crate::{
    error::ContractError,
    state::{DurationTier, FeeTier, LotteryState, CONFIG, LOTTERY},
    utils::{next_request_id, pick_winner, randomness_request_msg},
};

/// Open a new round. The starter picks both tiers, pays the resolved
/// entrance fee and becomes the first player.
pub fn execute_start_lottery(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    fee_tier: FeeTier,
    duration_tier: DurationTier,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut lottery = LOTTERY.load(deps.storage)?;

    if lottery.state != LotteryState::Closed {
        return Err(ContractError::AlreadyStarted {});
    }

    let sent = may_pay(&info, &config.denom)?;
    let required = config.fee_table.fee_for(fee_tier);
    if sent < required {
        return Err(ContractError::InsufficientFee { sent, required });
    }

    lottery.state = LotteryState::Open;
    lottery.fee_tier = Some(fee_tier);
    lottery.duration_tier = Some(duration_tier);
    lottery.entrance_fee = required;
    lottery.duration = config.duration_table.duration_for(duration_tier);
    lottery.start_timestamp = Some(env.block.time);
    lottery.players.push(info.sender.clone());
    lottery.balance += sent;
    LOTTERY.save(deps.storage, &lottery)?;

    Ok(Response::new()
        .add_attribute("action", "start_lottery")
        .add_attribute("fee_tier", fee_tier.to_string())
        .add_attribute("duration_tier", duration_tier.to_string())
        .add_attribute("starter", info.sender))
}

/// Enter the open round. One paid entry is one ticket, the same address may
/// buy several.
pub fn execute_join_lottery(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut lottery = LOTTERY.load(deps.storage)?;

    // Calculating rounds are rejected too: a winner pick is already in flight
    if lottery.state != LotteryState::Open {
        return Err(ContractError::NotOpen {
            status: lottery.state,
        });
    }

    let sent = may_pay(&info, &config.denom)?;
    if sent < lottery.entrance_fee {
        return Err(ContractError::InsufficientFee {
            sent,
            required: lottery.entrance_fee,
        });
    }

    lottery.players.push(info.sender.clone());
    lottery.balance += sent;
    LOTTERY.save(deps.storage, &lottery)?;

    Ok(Response::new()
        .add_attribute("action", "join_lottery")
        .add_attribute("player", info.sender))
}

/// Plain transfer to the pot, accepted in every state. The sender is not
/// registered as a player.
pub fn execute_deposit(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut lottery = LOTTERY.load(deps.storage)?;

    let sent = may_pay(&info, &config.denom)?;
    lottery.balance += sent;
    LOTTERY.save(deps.storage, &lottery)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_received")
        .add_attribute("amount", sent))
}

/// Keeper entry point. Re-validates the upkeep predicate against committed
/// state (defense against stale or duplicate triggers), freezes the round and
/// requests randomness from the proxy. This is the only path out of `Open`.
pub fn execute_perform_upkeep(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut lottery = LOTTERY.load(deps.storage)?;

    if !lottery.check_upkeep(env.block.time) {
        return Err(ContractError::UpkeepNotNeeded {});
    }

    let request_id = next_request_id(deps.storage)?;
    lottery.state = LotteryState::Calculating;
    lottery.pending_request_id = Some(request_id.clone());
    LOTTERY.save(deps.storage, &lottery)?;

    let randomness_msg = randomness_request_msg(&config, &request_id)?;

    Ok(Response::new()
        .add_message(randomness_msg)
        .add_attribute("action", "perform_upkeep")
        .add_attribute("request_id", request_id))
}

/// Randomness fulfillment, the terminal transition of a round. Picks the
/// winner, pays out the whole pot and resets the round in one commit; a
/// failing payout aborts the fulfillment entirely.
pub fn execute_receive_nois(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    callback: NoisCallback,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut lottery = LOTTERY.load(deps.storage)?;

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and cheat the
    // randomness by sending a value directly to this contract
    ensure_eq!(
        info.sender,
        config.nois_proxy_addr,
        ContractError::UnauthorizedReceive
    );

    let request_id = callback.job_id;
    match &lottery.pending_request_id {
        Some(pending) if *pending == request_id => {}
        _ => return Err(ContractError::NonexistentRequest { request_id }),
    }

    let randomness: [u8; 32] = callback
        .randomness
        .to_array()
        .map_err(|_| ContractError::InvalidRandomness)?;

    let winner = pick_winner(&randomness, &lottery.players)?;
    let prize = lottery.balance;

    lottery.latest_winner = Some(winner.clone());
    lottery.players = vec![];
    lottery.balance = Uint128::zero();
    lottery.pending_request_id = None;
    lottery.state = LotteryState::Closed;
    LOTTERY.save(deps.storage, &lottery)?;

    let payout = BankMsg::Send {
        to_address: winner.to_string(),
        amount: coins(prize.u128(), config.denom),
    };

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("action", "winner_picked")
        .add_attribute("winner", winner)
        .add_attribute("amount", prize))
}

/// A parameter is only modified if it is specified in the called message.
/// The fee and duration tables are fixed at instantiation on purpose.
pub fn execute_update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: Option<String>,
    nois_proxy_addr: Option<String>,
    nois_proxy_coin: Option<Coin>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.owner, ContractError::Unauthorized);

    if let Some(owner) = owner {
        config.owner = deps.api.addr_validate(&owner)?;
    }
    if let Some(proxy) = nois_proxy_addr {
        config.nois_proxy_addr = deps
            .api
            .addr_validate(&proxy)
            .map_err(|_| ContractError::InvalidProxyAddress)?;
    }
    if let Some(coin) = nois_proxy_coin {
        config.nois_proxy_coin = coin;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "update_config"))
}
