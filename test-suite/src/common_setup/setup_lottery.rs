use cosmwasm_std::{coin, Addr};
use cw_multi_test::{App, Executor};
use tiered_lottery::{msg::InstantiateMsg, state::NOIS_AMOUNT};

use crate::common_setup::{
    contract_boxes::{contract_lottery, contract_nois_proxy, custom_mock_app},
    helpers::setup_block_time,
    msg::LotteryContracts,
    nois_proxy,
    setup_accounts_and_block::mint_native,
};

pub const OWNER_ADDR: &str = "owner";
pub const LOTTERY_NAME: &str = "tiered lottery";
pub const NOIS_DENOM: &str = "unois";

pub fn proper_lottery_instantiate() -> (App, LotteryContracts) {
    lottery_instantiate_with(None, None)
}

pub fn lottery_instantiate_with(
    fee_table: Option<tiered_lottery::state::FeeTable>,
    duration_table: Option<tiered_lottery::state::DurationTable>,
) -> (App, LotteryContracts) {
    let mut app = custom_mock_app();
    setup_block_time(&mut app, 1_647_032_400_000_000_000, Some(10_000));

    let proxy_code_id = app.store_code(contract_nois_proxy());
    let lottery_code_id = app.store_code(contract_lottery());

    let nois_proxy_addr = app
        .instantiate_contract(
            proxy_code_id,
            Addr::unchecked(OWNER_ADDR),
            &nois_proxy::InstantiateMsg {
                payment: coin(NOIS_AMOUNT, NOIS_DENOM),
            },
            &[],
            "nois-proxy",
            None,
        )
        .unwrap();

    let lottery_addr = app
        .instantiate_contract(
            lottery_code_id,
            Addr::unchecked(OWNER_ADDR),
            &InstantiateMsg {
                name: LOTTERY_NAME.to_string(),
                owner: Some(OWNER_ADDR.to_string()),
                nois_proxy_addr: nois_proxy_addr.to_string(),
                nois_proxy_coin: coin(NOIS_AMOUNT, NOIS_DENOM),
                denom: None,
                fee_table,
                duration_table,
            },
            &[],
            "lottery",
            Some(OWNER_ADDR.to_string()),
        )
        .unwrap();

    // The contract pays the proxy per randomness request, give it a few
    // requests worth of nois funds (mirrors funding the deployed contract)
    mint_native(&mut app, &lottery_addr, NOIS_AMOUNT * 10, NOIS_DENOM);

    (
        app,
        LotteryContracts {
            lottery: lottery_addr,
            nois_proxy: nois_proxy_addr,
        },
    )
}
