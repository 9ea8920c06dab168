use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, StdError, StdResult, Timestamp, Uint128};
use nois::NoisCallback;

use crate::state::{
    Config, DurationTable, DurationTier, FeeTable, FeeTier, Lottery, LotteryStatus,
};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub owner: Option<String>,
    pub nois_proxy_addr: String,
    pub nois_proxy_coin: Coin,
    /// Denom entrance fees are paid in. Defaults to the chain native denom.
    pub denom: Option<String>,
    /// Per-network fee table, canonical 0.1/0.5/1 scheme when omitted
    pub fee_table: Option<FeeTable>,
    /// Per-network duration table
    pub duration_table: Option<DurationTable>,
}

impl InstantiateMsg {
    pub fn validate(&self) -> StdResult<()> {
        if !is_valid_name(&self.name) {
            return Err(StdError::generic_err(
                "Name is not in the expected format (3-50 UTF-8 bytes)",
            ));
        }
        Ok(())
    }
}

fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.len() < 3 || bytes.len() > 50 {
        return false;
    }
    true
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Open a new round. Payable: the sender pays the entrance fee of the
    /// chosen tier and becomes the first player.
    StartLottery {
        fee_tier: FeeTier,
        duration_tier: DurationTier,
    },
    /// Enter the open round. Payable with the round entrance fee.
    JoinLottery {},
    /// Plain transfer to the pot. Does not register the sender as a player.
    Deposit {},
    /// Keeper trigger: freeze the round and request randomness
    PerformUpkeep {},
    NoisReceive {
        callback: NoisCallback,
    },
    // Admin messages
    UpdateConfig {
        owner: Option<String>,
        nois_proxy_addr: Option<String>,
        nois_proxy_coin: Option<Coin>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(LotteryResponse)]
    Lottery {},
    #[returns(bool)]
    CheckUpkeep {},
    #[returns(LotteryStatus)]
    State {},
    #[returns(Uint128)]
    EntranceFee {},
    #[returns(u64)]
    DurationTime {},
    #[returns(Option<Timestamp>)]
    StartTimestamp {},
    #[returns(Vec<Addr>)]
    Players {},
    #[returns(u32)]
    PlayerCount {},
    #[returns(Uint128)]
    Balance {},
    #[returns(Option<Addr>)]
    LatestWinner {},
    #[returns(Uint128)]
    FeeForTier { tier: FeeTier },
    #[returns(u64)]
    DurationForTier { tier: DurationTier },
}

#[cw_serde]
pub struct ConfigResponse {
    pub name: String,
    pub owner: Addr,
    pub denom: String,
    pub nois_proxy_addr: Addr,
    pub nois_proxy_coin: Coin,
    pub fee_table: FeeTable,
    pub duration_table: DurationTable,
}

impl From<Config> for ConfigResponse {
    fn from(config: Config) -> Self {
        Self {
            name: config.name,
            owner: config.owner,
            denom: config.denom,
            nois_proxy_addr: config.nois_proxy_addr,
            nois_proxy_coin: config.nois_proxy_coin,
            fee_table: config.fee_table,
            duration_table: config.duration_table,
        }
    }
}

#[cw_serde]
pub struct LotteryResponse {
    pub status: LotteryStatus,
    pub lottery: Lottery,
}

#[cw_serde]
pub struct MigrateMsg {}
