use cosmwasm_std::Addr;
use cw_orch::prelude::*;
use scripts::{lottery::Lottery, ELGAFAR_1};
use tiered_lottery::msg::{ExecuteMsg, QueryMsg};

/// Triggers upkeep by hand instead of waiting for a keeper. The winner lands
/// once the nois proxy delivers the randomness over IBC, check back with the
/// status script.
pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let chain = Daemon::builder().chain(ELGAFAR_1).build()?;

    let lottery = Lottery::new(chain);

    let upkeep_needed: bool = lottery.query(&QueryMsg::CheckUpkeep {})?;
    anyhow::ensure!(upkeep_needed, "the round is not ready to be decided yet");

    lottery.execute(&ExecuteMsg::PerformUpkeep {}, None)?;

    let latest_winner: Option<Addr> = lottery.query(&QueryMsg::LatestWinner {})?;
    println!("latest winner so far: {latest_winner:?}");

    Ok(())
}
