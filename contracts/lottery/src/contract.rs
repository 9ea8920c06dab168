use cosmwasm_std::{
    ensure, entry_point, to_json_binary, Deps, DepsMut, Env, MessageInfo, QueryResponse, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::{
    error::ContractError,
    execute::{
        execute_deposit, execute_join_lottery, execute_perform_upkeep, execute_receive_nois,
        execute_start_lottery, execute_update_config,
    },
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    query::{
        query_balance, query_check_upkeep, query_config, query_duration_for_tier,
        query_duration_time, query_entrance_fee, query_fee_for_tier, query_latest_winner,
        query_lottery, query_player_count, query_players, query_start_timestamp,
    },
    state::{Config, Lottery, CONFIG, LOTTERY, NATIVE_DENOM, REQUEST_NONCE},
};

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    msg.validate()?;

    let nois_proxy_addr = deps
        .api
        .addr_validate(&msg.nois_proxy_addr)
        .map_err(|_| ContractError::InvalidProxyAddress)?;

    let fee_table = msg.fee_table.unwrap_or_default();
    ensure!(
        !fee_table.low.is_zero() && !fee_table.medium.is_zero() && !fee_table.high.is_zero(),
        ContractError::InvalidFeeTable {}
    );
    let duration_table = msg.duration_table.unwrap_or_default();
    ensure!(
        duration_table.fast > 0 && duration_table.medium > 0 && duration_table.long > 0,
        ContractError::InvalidDurationTable {}
    );

    let config = Config {
        name: msg.name,
        owner: deps
            .api
            .addr_validate(&msg.owner.unwrap_or_else(|| info.sender.to_string()))?,
        denom: msg.denom.unwrap_or_else(|| NATIVE_DENOM.to_string()),
        nois_proxy_addr,
        nois_proxy_coin: msg.nois_proxy_coin,
        fee_table,
        duration_table,
    };

    CONFIG.save(deps.storage, &config)?;
    LOTTERY.save(deps.storage, &Lottery::default())?;
    REQUEST_NONCE.save(deps.storage, &0u64)?;
    set_contract_version(
        deps.storage,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )?;
    Ok(Response::default())
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::StartLottery {
            fee_tier,
            duration_tier,
        } => execute_start_lottery(deps, env, info, fee_tier, duration_tier),
        ExecuteMsg::JoinLottery {} => execute_join_lottery(deps, env, info),
        ExecuteMsg::Deposit {} => execute_deposit(deps, info),
        ExecuteMsg::PerformUpkeep {} => execute_perform_upkeep(deps, env, info),
        ExecuteMsg::NoisReceive { callback } => execute_receive_nois(deps, env, info, callback),
        ExecuteMsg::UpdateConfig {
            owner,
            nois_proxy_addr,
            nois_proxy_coin,
        } => execute_update_config(deps, env, info, owner, nois_proxy_addr, nois_proxy_coin),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::Lottery {} => to_json_binary(&query_lottery(deps)?)?,
        QueryMsg::CheckUpkeep {} => to_json_binary(&query_check_upkeep(deps, env)?)?,
        QueryMsg::State {} => to_json_binary(&query_lottery(deps)?.status)?,
        QueryMsg::EntranceFee {} => to_json_binary(&query_entrance_fee(deps)?)?,
        QueryMsg::DurationTime {} => to_json_binary(&query_duration_time(deps)?)?,
        QueryMsg::StartTimestamp {} => to_json_binary(&query_start_timestamp(deps)?)?,
        QueryMsg::Players {} => to_json_binary(&query_players(deps)?)?,
        QueryMsg::PlayerCount {} => to_json_binary(&query_player_count(deps)?)?,
        QueryMsg::Balance {} => to_json_binary(&query_balance(deps)?)?,
        QueryMsg::LatestWinner {} => to_json_binary(&query_latest_winner(deps)?)?,
        QueryMsg::FeeForTier { tier } => to_json_binary(&query_fee_for_tier(deps, tier)?)?,
        QueryMsg::DurationForTier { tier } => {
            to_json_binary(&query_duration_for_tier(deps, tier)?)?
        }
    };
    Ok(response)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(
        deps.storage,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )?;
    Ok(Response::default())
}
