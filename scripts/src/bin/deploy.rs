use std::path::Path;

use cosmwasm_std::coin;
use cw_orch::prelude::*;
use scripts::{front_end, lottery::Lottery, ELGAFAR_1, NOIS_PROXY_ADDR, NOIS_TOKEN};
use tiered_lottery::msg::InstantiateMsg;

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let chain = Daemon::builder().chain(ELGAFAR_1).build()?;

    let lottery = Lottery::new(chain.clone());

    lottery.upload()?;
    lottery.instantiate(
        &InstantiateMsg {
            name: "Tiered Lottery".to_string(),
            owner: None,
            nois_proxy_addr: NOIS_PROXY_ADDR.to_string(),
            nois_proxy_coin: coin(1_000_000, NOIS_TOKEN),
            denom: None,
            fee_table: None,
            duration_table: None,
        },
        None,
        None,
    )?;

    if std::env::var("UPDATE_FRONT_END").as_deref() == Ok("true") {
        front_end::update_contract_addresses(
            Path::new("front_end/contractAddresses.json"),
            ELGAFAR_1.chain_id,
            lottery.address()?.as_str(),
        )?;
        // generated by `cargo run --bin schema` in contracts/lottery
        front_end::update_schema(
            Path::new("contracts/lottery/schema/tiered-lottery.json"),
            Path::new("front_end/schema"),
        )?;
    }

    Ok(())
}
