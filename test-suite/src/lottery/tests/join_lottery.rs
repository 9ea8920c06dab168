use cosmwasm_std::Uint128;
use tiered_lottery::{
    error::ContractError,
    state::{DurationTier, FeeTier, LotteryState, FEE_LOW, FEE_MEDIUM},
};

use crate::{
    common_setup::{
        helpers::{assert_error, plus_block_seconds},
        setup_accounts_and_block::setup_lottery_participants,
        setup_lottery::proper_lottery_instantiate,
    },
    lottery::setup::helpers::{
        join_lottery, lottery_info, perform_upkeep, start_lottery, wasm_attr,
    },
};

#[test]
fn players_are_kept_in_join_order() {
    let (mut app, contracts) = proper_lottery_instantiate();
    let (one, two, three, _) = setup_lottery_participants(&mut app);

    start_lottery(
        &mut app,
        &contracts.lottery,
        &one,
        FeeTier::Low,
        DurationTier::Fast,
        FEE_LOW,
    )
    .unwrap();
    let res = join_lottery(&mut app, &contracts.lottery, &two, FEE_LOW).unwrap();
    assert_eq!(wasm_attr(&res, "action").unwrap(), "join_lottery");
    assert_eq!(wasm_attr(&res, "player").unwrap(), two.to_string());
    join_lottery(&mut app, &contracts.lottery, &three, FEE_LOW).unwrap();

    let info = lottery_info(&app, &contracts.lottery);
    assert_eq!(info.lottery.players, vec![one, two, three]);
    assert_eq!(info.lottery.balance, Uint128::new(FEE_LOW * 3));
}

#[test]
fn same_address_buys_multiple_tickets() {
    let (mut app, contracts) = proper_lottery_instantiate();
    let (one, _, _, _) = setup_lottery_participants(&mut app);

    start_lottery(
        &mut app,
        &contracts.lottery,
        &one,
        FeeTier::Low,
        DurationTier::Fast,
        FEE_LOW,
    )
    .unwrap();
    join_lottery(&mut app, &contracts.lottery, &one, FEE_LOW).unwrap();

    let info = lottery_info(&app, &contracts.lottery);
    assert_eq!(info.lottery.players, vec![one.clone(), one]);
}

#[test]
fn error_join_before_any_round() {
    let (mut app, contracts) = proper_lottery_instantiate();
    let (one, _, _, _) = setup_lottery_participants(&mut app);

    let res = join_lottery(&mut app, &contracts.lottery, &one, FEE_LOW);
    assert_error(
        res,
        ContractError::NotOpen {
            status: LotteryState::Closed,
        }
        .to_string(),
    );
}

#[test]
fn error_join_while_calculating() {
    let (mut app, contracts) = proper_lottery_instantiate();
    let (one, two, _, _) = setup_lottery_participants(&mut app);

    start_lottery(
        &mut app,
        &contracts.lottery,
        &one,
        FeeTier::Low,
        DurationTier::Fast,
        FEE_LOW,
    )
    .unwrap();
    plus_block_seconds(&mut app, 30);
    perform_upkeep(&mut app, &contracts.lottery, &two).unwrap();

    let res = join_lottery(&mut app, &contracts.lottery, &two, FEE_LOW);
    assert_error(
        res,
        ContractError::NotOpen {
            status: LotteryState::Calculating,
        }
        .to_string(),
    );
}

#[test]
fn error_join_below_round_fee() {
    let (mut app, contracts) = proper_lottery_instantiate();
    let (one, two, _, _) = setup_lottery_participants(&mut app);

    start_lottery(
        &mut app,
        &contracts.lottery,
        &one,
        FeeTier::Medium,
        DurationTier::Fast,
        FEE_MEDIUM,
    )
    .unwrap();

    let res = join_lottery(&mut app, &contracts.lottery, &two, FEE_LOW);
    assert_error(
        res,
        ContractError::InsufficientFee {
            sent: Uint128::new(FEE_LOW),
            required: Uint128::new(FEE_MEDIUM),
        }
        .to_string(),
    );

    // the failed join left no trace
    let info = lottery_info(&app, &contracts.lottery);
    assert_eq!(info.lottery.players, vec![one]);
    assert_eq!(info.lottery.balance, Uint128::new(FEE_MEDIUM));
}
