use cosmwasm_std::{Addr, Uint128};
use cw_orch::prelude::*;
use scripts::{lottery::Lottery, ELGAFAR_1};
use tiered_lottery::{
    msg::QueryMsg,
    state::LotteryStatus,
};

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let chain = Daemon::builder().chain(ELGAFAR_1).build()?;

    let lottery = Lottery::new(chain);

    let status: LotteryStatus = lottery.query(&QueryMsg::State {})?;
    let players: Vec<Addr> = lottery.query(&QueryMsg::Players {})?;
    let balance: Uint128 = lottery.query(&QueryMsg::Balance {})?;
    let upkeep_needed: bool = lottery.query(&QueryMsg::CheckUpkeep {})?;
    let latest_winner: Option<Addr> = lottery.query(&QueryMsg::LatestWinner {})?;

    println!("status: {status}");
    println!("players: {players:?}");
    println!("balance: {balance}");
    println!("upkeep needed: {upkeep_needed}");
    println!("latest winner: {latest_winner:?}");

    Ok(())
}
