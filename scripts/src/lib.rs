use cw_orch::daemon::{ChainInfo, ChainKind, NetworkInfo};

pub mod front_end;
pub mod lottery;

pub const STARGAZE_NETWORK: NetworkInfo = NetworkInfo {
    id: "stargaze",
    pub_address_prefix: "stars",
    coin_type: 118u32,
};

/// https://github.com/cosmos/chain-registry/blob/master/testnets/stargazetestnet/chain.json
pub const ELGAFAR_1: ChainInfo = ChainInfo {
    kind: ChainKind::Testnet,
    chain_id: "elgafar-1",
    gas_denom: "ustars",
    gas_price: 0.04,
    grpc_urls: &["http://grpc-1.elgafar-1.stargaze-apis.com:26660"],
    network_info: STARGAZE_NETWORK,
    lcd_url: None,
    fcd_url: None,
};

/// Nois proxy deployed on elgafar-1 and the IBC denom its fee is paid in
pub const NOIS_PROXY_ADDR: &str =
    "stars1atcndw8yfrulzux6vg6wtw2c0u4y5wvy9423255h472f4x3gn8dq0v8j45";
pub const NOIS_TOKEN: &str = "ibc/ACCAF790E082E772691A20B0208FB972AD3A01C2DE0D7E8C479CCABF6C9F39B1";
