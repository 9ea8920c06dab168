use cosmwasm_std::Addr;

#[derive(Clone, Debug)]
pub struct LotteryContracts {
    pub lottery: Addr,
    pub nois_proxy: Addr,
}
