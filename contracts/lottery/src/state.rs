use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Timestamp, Uint128};
use cw_storage_plus::Item;

pub const CONFIG: Item<Config> = Item::new("config");
pub const LOTTERY: Item<Lottery> = Item::new("lottery");
pub const REQUEST_NONCE: Item<u64> = Item::new("request_nonce");

pub const NATIVE_DENOM: &str = "ustars";
pub const NOIS_AMOUNT: u128 = 500_000;

// Canonical fee table (native denom, 6 decimals): 0.1 / 0.5 / 1 unit.
pub const FEE_LOW: u128 = 100_000;
pub const FEE_MEDIUM: u128 = 500_000;
pub const FEE_HIGH: u128 = 1_000_000;

// Round durations in seconds.
pub const DURATION_FAST: u64 = 30;
pub const DURATION_MEDIUM: u64 = 300;
pub const DURATION_LONG: u64 = 3_600;

#[cw_serde]
#[derive(Copy)]
pub enum FeeTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FeeTier::Low => write!(f, "low"),
            FeeTier::Medium => write!(f, "medium"),
            FeeTier::High => write!(f, "high"),
        }
    }
}

#[cw_serde]
#[derive(Copy)]
pub enum DurationTier {
    Fast,
    Medium,
    Long,
}

impl fmt::Display for DurationTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DurationTier::Fast => write!(f, "fast"),
            DurationTier::Medium => write!(f, "medium"),
            DurationTier::Long => write!(f, "long"),
        }
    }
}

/// Entrance fee per tier, fixed at instantiation and read-only afterwards.
#[cw_serde]
pub struct FeeTable {
    pub low: Uint128,
    pub medium: Uint128,
    pub high: Uint128,
}

impl Default for FeeTable {
    fn default() -> Self {
        Self {
            low: Uint128::new(FEE_LOW),
            medium: Uint128::new(FEE_MEDIUM),
            high: Uint128::new(FEE_HIGH),
        }
    }
}

impl FeeTable {
    pub fn fee_for(&self, tier: FeeTier) -> Uint128 {
        match tier {
            FeeTier::Low => self.low,
            FeeTier::Medium => self.medium,
            FeeTier::High => self.high,
        }
    }
}

/// Round duration per tier, fixed at instantiation and read-only afterwards.
#[cw_serde]
pub struct DurationTable {
    pub fast: u64,
    pub medium: u64,
    pub long: u64,
}

impl Default for DurationTable {
    fn default() -> Self {
        Self {
            fast: DURATION_FAST,
            medium: DURATION_MEDIUM,
            long: DURATION_LONG,
        }
    }
}

impl DurationTable {
    pub fn duration_for(&self, tier: DurationTier) -> u64 {
        match tier {
            DurationTier::Fast => self.fast,
            DurationTier::Medium => self.medium,
            DurationTier::Long => self.long,
        }
    }
}

#[cw_serde]
pub struct Config {
    /// The name of the smart contract
    pub name: String,
    /// The admin of the smart contract
    pub owner: Addr,
    /// Denom the entrance fees and the pot are denominated in
    pub denom: String,
    /// Address of the nois proxy providing randomness
    pub nois_proxy_addr: Addr,
    /// Price paid to the proxy for one randomness request
    pub nois_proxy_coin: Coin,
    pub fee_table: FeeTable,
    pub duration_table: DurationTable,
}

#[cw_serde]
#[derive(Copy)]
pub enum LotteryState {
    Closed,
    Open,
    Calculating,
}

impl fmt::Display for LotteryState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LotteryState::Closed => write!(f, "closed"),
            LotteryState::Open => write!(f, "open"),
            LotteryState::Calculating => write!(f, "calculating"),
        }
    }
}

/// What the status queries report. `NotStarted` is a display alias of
/// `Closed` for a contract that never ran a round.
#[cw_serde]
#[derive(Copy)]
pub enum LotteryStatus {
    NotStarted,
    Closed,
    Open,
    Calculating,
}

impl fmt::Display for LotteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LotteryStatus::NotStarted => write!(f, "not_started"),
            LotteryStatus::Closed => write!(f, "closed"),
            LotteryStatus::Open => write!(f, "open"),
            LotteryStatus::Calculating => write!(f, "calculating"),
        }
    }
}

/// The singleton round. The same storage is reused round over round, only
/// `latest_winner` survives the reset into `Closed`.
#[cw_serde]
pub struct Lottery {
    pub state: LotteryState,
    pub fee_tier: Option<FeeTier>,
    pub duration_tier: Option<DurationTier>,
    /// Resolved entrance fee of the current round
    pub entrance_fee: Uint128,
    /// Resolved duration (seconds) of the current round
    pub duration: u64,
    pub start_timestamp: Option<Timestamp>,
    /// Entrants in join order, one entry per paid ticket
    pub players: Vec<Addr>,
    /// Everything received for the current round, direct deposits included
    pub balance: Uint128,
    /// Correlation id of the single outstanding randomness request
    pub pending_request_id: Option<String>,
    pub latest_winner: Option<Addr>,
}

impl Default for Lottery {
    fn default() -> Self {
        Self {
            state: LotteryState::Closed,
            fee_tier: None,
            duration_tier: None,
            entrance_fee: Uint128::zero(),
            duration: 0,
            start_timestamp: None,
            players: vec![],
            balance: Uint128::zero(),
            pending_request_id: None,
            latest_winner: None,
        }
    }
}

impl Lottery {
    pub fn status(&self) -> LotteryStatus {
        match self.state {
            LotteryState::Closed if self.start_timestamp.is_none() => LotteryStatus::NotStarted,
            LotteryState::Closed => LotteryStatus::Closed,
            LotteryState::Open => LotteryStatus::Open,
            LotteryState::Calculating => LotteryStatus::Calculating,
        }
    }

    /// The upkeep predicate. True iff the round is open, the configured
    /// duration has fully elapsed, somebody plays and the pot is funded.
    /// Read-only, so keepers can probe it without committing a transaction.
    pub fn check_upkeep(&self, now: Timestamp) -> bool {
        let elapsed = match self.start_timestamp {
            Some(start) => now >= start.plus_seconds(self.duration),
            None => false,
        };
        matches!(self.state, LotteryState::Open)
            && elapsed
            && !self.players.is_empty()
            && !self.balance.is_zero()
    }
}
