use anyhow::Result as AnyResult;
use cosmwasm_std::{coin, Addr, HexBinary};
use cw_multi_test::{App, AppResponse, Executor};
use tiered_lottery::{
    msg::{ExecuteMsg, LotteryResponse, QueryMsg},
    state::{DurationTier, FeeTier, NATIVE_DENOM},
};

use crate::common_setup::nois_proxy;

pub fn start_lottery(
    app: &mut App,
    lottery: &Addr,
    sender: &Addr,
    fee_tier: FeeTier,
    duration_tier: DurationTier,
    amount: u128,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        sender.clone(),
        lottery.clone(),
        &ExecuteMsg::StartLottery {
            fee_tier,
            duration_tier,
        },
        &[coin(amount, NATIVE_DENOM)],
    )
}

pub fn join_lottery(
    app: &mut App,
    lottery: &Addr,
    sender: &Addr,
    amount: u128,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        sender.clone(),
        lottery.clone(),
        &ExecuteMsg::JoinLottery {},
        &[coin(amount, NATIVE_DENOM)],
    )
}

pub fn deposit(
    app: &mut App,
    lottery: &Addr,
    sender: &Addr,
    amount: u128,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        sender.clone(),
        lottery.clone(),
        &ExecuteMsg::Deposit {},
        &[coin(amount, NATIVE_DENOM)],
    )
}

pub fn perform_upkeep(app: &mut App, lottery: &Addr, sender: &Addr) -> AnyResult<AppResponse> {
    app.execute_contract(
        sender.clone(),
        lottery.clone(),
        &ExecuteMsg::PerformUpkeep {},
        &[],
    )
}

/// Have the mock proxy deliver the beacon for an outstanding job, which in
/// turn calls `NoisReceive` on the lottery contract.
pub fn trigger_randomness(
    app: &mut App,
    proxy: &Addr,
    job_id: &str,
    randomness: HexBinary,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        Addr::unchecked("beacon-operator"),
        proxy.clone(),
        &nois_proxy::ExecuteMsg::TriggerJob {
            job_id: job_id.to_string(),
            randomness,
        },
        &[],
    )
}

/// Call `NoisReceive` on the lottery directly, with an arbitrary sender.
/// Used to exercise the proxy gate and the correlation checks.
pub fn deliver_callback(
    app: &mut App,
    lottery: &Addr,
    sender: &Addr,
    job_id: &str,
    randomness: HexBinary,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        sender.clone(),
        lottery.clone(),
        &ExecuteMsg::NoisReceive {
            callback: nois::NoisCallback {
                job_id: job_id.to_string(),
                published: app.block_info().time,
                randomness,
            },
        },
        &[],
    )
}

/// A 32-byte beacon whose low 8 bytes encode `value` big-endian, so the
/// winner index is `value % players.len()`.
pub fn randomness_with_value(value: u64) -> HexBinary {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&value.to_be_bytes());
    HexBinary::from(bytes.as_slice())
}

pub fn lottery_info(app: &App, lottery: &Addr) -> LotteryResponse {
    app.wrap()
        .query_wasm_smart(lottery, &QueryMsg::Lottery {})
        .unwrap()
}

pub fn check_upkeep(app: &App, lottery: &Addr) -> bool {
    app.wrap()
        .query_wasm_smart(lottery, &QueryMsg::CheckUpkeep {})
        .unwrap()
}

pub fn native_balance(app: &App, addr: &Addr) -> u128 {
    app.wrap()
        .query_balance(addr, NATIVE_DENOM)
        .unwrap()
        .amount
        .u128()
}

/// Attribute lookup over every event of a response.
pub fn wasm_attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
