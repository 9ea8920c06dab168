use cosmwasm_std::{Addr, HexBinary, Uint128};
use cw_multi_test::App;
use tiered_lottery::{
    error::ContractError,
    state::{DurationTier, FeeTier, LotteryState, LotteryStatus, FEE_LOW},
};

use crate::{
    common_setup::{
        helpers::{assert_error, plus_block_seconds},
        msg::LotteryContracts,
        setup_accounts_and_block::{setup_accounts, setup_lottery_participants, INITIAL_BALANCE},
        setup_lottery::proper_lottery_instantiate,
    },
    lottery::setup::helpers::{
        deliver_callback, join_lottery, lottery_info, native_balance, perform_upkeep,
        randomness_with_value, start_lottery, trigger_randomness, wasm_attr,
    },
};

/// Runs a four player round up to the point where randomness is outstanding.
fn round_in_calculating() -> (App, LotteryContracts, [Addr; 4]) {
    let (mut app, contracts) = proper_lottery_instantiate();
    let (_, keeper) = setup_accounts(&mut app);
    let (one, two, three, four) = setup_lottery_participants(&mut app);

    start_lottery(
        &mut app,
        &contracts.lottery,
        &one,
        FeeTier::Low,
        DurationTier::Fast,
        FEE_LOW,
    )
    .unwrap();
    for player in [&two, &three, &four] {
        join_lottery(&mut app, &contracts.lottery, player, FEE_LOW).unwrap();
    }
    plus_block_seconds(&mut app, 30);
    perform_upkeep(&mut app, &contracts.lottery, &keeper).unwrap();

    (app, contracts, [one, two, three, four])
}

#[test]
fn error_only_the_proxy_may_deliver() {
    let (mut app, contracts, players) = round_in_calculating();

    let res = deliver_callback(
        &mut app,
        &contracts.lottery,
        &players[0],
        "lottery-1",
        randomness_with_value(0),
    );
    assert_error(res, ContractError::UnauthorizedReceive.to_string());
}

#[test]
fn error_callback_without_outstanding_request() {
    let (mut app, contracts) = proper_lottery_instantiate();

    // proxy sender, but nothing was ever requested
    let proxy = contracts.nois_proxy.clone();
    let res = deliver_callback(
        &mut app,
        &contracts.lottery,
        &proxy,
        "lottery-1",
        randomness_with_value(0),
    );
    assert_error(
        res,
        ContractError::NonexistentRequest {
            request_id: "lottery-1".to_string(),
        }
        .to_string(),
    );
}

#[test]
fn error_callback_with_wrong_request_id() {
    let (mut app, contracts, _) = round_in_calculating();

    let proxy = contracts.nois_proxy.clone();
    let res = deliver_callback(
        &mut app,
        &contracts.lottery,
        &proxy,
        "lottery-9",
        randomness_with_value(0),
    );
    assert_error(
        res,
        ContractError::NonexistentRequest {
            request_id: "lottery-9".to_string(),
        }
        .to_string(),
    );

    // the round stays frozen, waiting for the real beacon
    let info = lottery_info(&app, &contracts.lottery);
    assert_eq!(info.lottery.state, LotteryState::Calculating);
    assert_eq!(info.lottery.pending_request_id, Some("lottery-1".to_string()));
}

#[test]
fn error_beacon_of_wrong_size() {
    let (mut app, contracts, _) = round_in_calculating();

    let proxy = contracts.nois_proxy.clone();
    let res = deliver_callback(
        &mut app,
        &contracts.lottery,
        &proxy,
        "lottery-1",
        HexBinary::from([0xaau8; 16].as_slice()),
    );
    assert_error(res, ContractError::InvalidRandomness.to_string());
}

#[test]
fn fulfillment_pays_the_winner_and_resets() {
    let (mut app, contracts, players) = round_in_calculating();
    let [_, two, _, _] = &players;

    let pot = FEE_LOW * 4;
    assert_eq!(native_balance(&app, &contracts.lottery), pot);

    // low 8 bytes encode 1, so the winner is players[1 % 4]
    let res = trigger_randomness(
        &mut app,
        &contracts.nois_proxy,
        "lottery-1",
        randomness_with_value(1),
    )
    .unwrap();
    assert_eq!(wasm_attr(&res, "action").unwrap(), "winner_picked");
    assert_eq!(wasm_attr(&res, "winner").unwrap(), two.to_string());
    assert_eq!(wasm_attr(&res, "amount").unwrap(), pot.to_string());

    // the whole pot moved to the winner
    assert_eq!(native_balance(&app, &contracts.lottery), 0);
    assert_eq!(native_balance(&app, two), INITIAL_BALANCE - FEE_LOW + pot);

    let info = lottery_info(&app, &contracts.lottery);
    assert_eq!(info.status, LotteryStatus::Closed);
    assert!(info.lottery.players.is_empty());
    assert!(info.lottery.balance.is_zero());
    assert_eq!(info.lottery.pending_request_id, None);
    assert_eq!(info.lottery.latest_winner, Some(two.clone()));
    assert_eq!(info.lottery.entrance_fee, Uint128::new(FEE_LOW));
}

#[test]
fn latest_winner_survives_the_next_round() {
    let (mut app, contracts, players) = round_in_calculating();
    let [one, _, three, _] = &players;

    trigger_randomness(
        &mut app,
        &contracts.nois_proxy,
        "lottery-1",
        randomness_with_value(2),
    )
    .unwrap();

    let info = lottery_info(&app, &contracts.lottery);
    assert_eq!(info.lottery.latest_winner, Some(three.clone()));

    // the next round keeps reporting the previous winner
    start_lottery(
        &mut app,
        &contracts.lottery,
        one,
        FeeTier::High,
        DurationTier::Long,
        1_000_000,
    )
    .unwrap();
    let info = lottery_info(&app, &contracts.lottery);
    assert_eq!(info.status, LotteryStatus::Open);
    assert_eq!(info.lottery.latest_winner, Some(three.clone()));
}
