use cosmwasm_std::{Addr, Deps, Env, StdResult, Timestamp, Uint128};

use crate::{
    msg::{ConfigResponse, LotteryResponse},
    state::{DurationTier, FeeTier, CONFIG, LOTTERY},
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    Ok(CONFIG.load(deps.storage)?.into())
}

pub fn query_lottery(deps: Deps) -> StdResult<LotteryResponse> {
    let lottery = LOTTERY.load(deps.storage)?;
    Ok(LotteryResponse {
        status: lottery.status(),
        lottery,
    })
}

pub fn query_check_upkeep(deps: Deps, env: Env) -> StdResult<bool> {
    let lottery = LOTTERY.load(deps.storage)?;
    Ok(lottery.check_upkeep(env.block.time))
}

pub fn query_entrance_fee(deps: Deps) -> StdResult<Uint128> {
    Ok(LOTTERY.load(deps.storage)?.entrance_fee)
}

pub fn query_duration_time(deps: Deps) -> StdResult<u64> {
    Ok(LOTTERY.load(deps.storage)?.duration)
}

pub fn query_start_timestamp(deps: Deps) -> StdResult<Option<Timestamp>> {
    Ok(LOTTERY.load(deps.storage)?.start_timestamp)
}

pub fn query_players(deps: Deps) -> StdResult<Vec<Addr>> {
    Ok(LOTTERY.load(deps.storage)?.players)
}

pub fn query_player_count(deps: Deps) -> StdResult<u32> {
    Ok(LOTTERY.load(deps.storage)?.players.len() as u32)
}

pub fn query_balance(deps: Deps) -> StdResult<Uint128> {
    Ok(LOTTERY.load(deps.storage)?.balance)
}

pub fn query_latest_winner(deps: Deps) -> StdResult<Option<Addr>> {
    Ok(LOTTERY.load(deps.storage)?.latest_winner)
}

pub fn query_fee_for_tier(deps: Deps, tier: FeeTier) -> StdResult<Uint128> {
    Ok(CONFIG.load(deps.storage)?.fee_table.fee_for(tier))
}

pub fn query_duration_for_tier(deps: Deps, tier: DurationTier) -> StdResult<u64> {
    Ok(CONFIG.load(deps.storage)?.duration_table.duration_for(tier))
}
