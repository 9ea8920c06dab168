use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, Storage, WasmMsg};
use nois::ProxyExecuteMsg;

use crate::{
    error::ContractError,
    state::{Config, REQUEST_NONCE},
};

/// Draw a fresh correlation id for a randomness request. Ids are strictly
/// increasing so a stale callback can never match a newer request.
pub fn next_request_id(storage: &mut dyn Storage) -> StdResult<String> {
    let nonce = REQUEST_NONCE.may_load(storage)?.unwrap_or(0) + 1;
    REQUEST_NONCE.save(storage, &nonce)?;
    Ok(format!("lottery-{nonce}"))
}

pub fn randomness_request_msg(config: &Config, job_id: &str) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: config.nois_proxy_addr.to_string(),
        // GetNextRandomness requests the randomness from the proxy.
        // The job id is needed to know what randomness we are referring to
        // upon reception in the callback.
        msg: to_json_binary(&ProxyExecuteMsg::GetNextRandomness {
            job_id: job_id.to_string(),
        })?,
        funds: vec![config.nois_proxy_coin.clone()], // Pay from the contract
    }
    .into())
}

/// Winner selection: the low 8 bytes of the beacon (big-endian) modulo the
/// number of tickets. Calculating rounds always hold at least one player.
pub fn pick_winner(randomness: &[u8; 32], players: &[Addr]) -> Result<Addr, ContractError> {
    if players.is_empty() {
        return Err(ContractError::Unreachable {});
    }
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&randomness[24..]);
    let value = u64::from_be_bytes(tail);
    let index = (value % players.len() as u64) as usize;
    Ok(players[index].clone())
}
