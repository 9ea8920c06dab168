use cosmwasm_std::Empty;
use cw_multi_test::{App, Contract, ContractWrapper};

use crate::common_setup::nois_proxy;

pub fn custom_mock_app() -> App {
    App::default()
}

pub fn contract_lottery() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        tiered_lottery::contract::execute,
        tiered_lottery::contract::instantiate,
        tiered_lottery::contract::query,
    )
    .with_migrate(tiered_lottery::contract::migrate);
    Box::new(contract)
}

pub fn contract_nois_proxy() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        nois_proxy::execute,
        nois_proxy::instantiate,
        nois_proxy::query,
    );
    Box::new(contract)
}
