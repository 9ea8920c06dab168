use cosmwasm_std::{coins, Uint128};
use cw_orch::prelude::*;
use scripts::{lottery::Lottery, ELGAFAR_1};
use tiered_lottery::msg::{ExecuteMsg, QueryMsg};

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let chain = Daemon::builder().chain(ELGAFAR_1).build()?;

    let lottery = Lottery::new(chain);

    let entrance_fee: Uint128 = lottery.query(&QueryMsg::EntranceFee {})?;
    lottery.execute(
        &ExecuteMsg::JoinLottery {},
        Some(&coins(entrance_fee.u128(), "ustars")),
    )?;

    let count: u32 = lottery.query(&QueryMsg::PlayerCount {})?;
    println!("joined, the round now has {count} tickets");

    Ok(())
}
