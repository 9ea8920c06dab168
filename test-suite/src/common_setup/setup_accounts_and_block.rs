use cosmwasm_std::{coin, Addr};
use cw_multi_test::{App, BankSudo, SudoMsg};
use tiered_lottery::state::NATIVE_DENOM;

pub const INITIAL_BALANCE: u128 = 100_000_000_000_000;

pub fn mint_native(router: &mut App, to: &Addr, amount: u128, denom: &str) {
    router
        .sudo(SudoMsg::Bank(BankSudo::Mint {
            to_address: to.to_string(),
            amount: vec![coin(amount, denom)],
        }))
        .unwrap();
}

pub fn setup_accounts(router: &mut App) -> (Addr, Addr) {
    let owner = Addr::unchecked("owner");
    let keeper = Addr::unchecked("keeper");
    mint_native(router, &owner, INITIAL_BALANCE, NATIVE_DENOM);
    mint_native(router, &keeper, INITIAL_BALANCE, NATIVE_DENOM);
    (owner, keeper)
}

pub fn setup_lottery_participants(router: &mut App) -> (Addr, Addr, Addr, Addr) {
    let one = Addr::unchecked("addr-one");
    let two = Addr::unchecked("addr-two");
    let three = Addr::unchecked("addr-three");
    let four = Addr::unchecked("addr-four");
    for addr in [&one, &two, &three, &four] {
        mint_native(router, addr, INITIAL_BALANCE, NATIVE_DENOM);
    }
    (one, two, three, four)
}
