use cosmwasm_std::{coins, Timestamp};
use cw_orch::prelude::*;
use scripts::{lottery::Lottery, ELGAFAR_1};
use tiered_lottery::{
    msg::{ExecuteMsg, QueryMsg},
    state::{DurationTier, FeeTier},
};

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let chain = Daemon::builder().chain(ELGAFAR_1).build()?;

    let lottery = Lottery::new(chain);

    // A fast low-fee round, so the randomness round trip shows up quickly
    lottery.execute(
        &ExecuteMsg::StartLottery {
            fee_tier: FeeTier::Low,
            duration_tier: DurationTier::Fast,
        },
        Some(&coins(100_000, "ustars")),
    )?;

    let start: Option<Timestamp> = lottery.query(&QueryMsg::StartTimestamp {})?;
    let duration: u64 = lottery.query(&QueryMsg::DurationTime {})?;
    println!("round started at {start:?}, runs {duration} seconds");

    Ok(())
}
