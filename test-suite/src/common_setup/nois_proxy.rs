use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, CosmosMsg, Deps, DepsMut, Env, HexBinary, MessageInfo,
    Response, StdError, StdResult, Timestamp, WasmMsg,
};
use cw_storage_plus::{Item, Map};
use nois::NoisCallback;

const PAYMENT: Item<Coin> = Item::new("payment");
const JOBS: Map<String, Addr> = Map::new("jobs");

#[cw_serde]
pub struct InstantiateMsg {
    /// Coin a requester has to attach per randomness request
    pub payment: Coin,
}

/// The first two variants match the wire format of `nois::ProxyExecuteMsg`,
/// so the contract under test talks to this mock unchanged. `TriggerJob` is
/// a test bypass delivering the beacon for a registered job, which lets the
/// tests pick both the delivery time and the randomness value.
#[cw_serde]
pub enum ExecuteMsg {
    GetNextRandomness {
        job_id: String,
    },
    GetRandomnessAfter {
        after: Timestamp,
        job_id: String,
    },
    TriggerJob {
        job_id: String,
        randomness: HexBinary,
    },
}

#[cw_serde]
pub enum QueryMsg {
    Payment {},
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    PAYMENT.save(deps.storage, &msg.payment)?;
    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, StdError> {
    match msg {
        ExecuteMsg::GetNextRandomness { job_id } => {
            let payment = PAYMENT.load(deps.storage)?;
            if info.funds != vec![payment] {
                return Err(StdError::generic_err("Nois not enough funds sent to proxy"));
            }
            JOBS.save(deps.storage, job_id, &info.sender)?;
            Ok(Response::new())
        }
        ExecuteMsg::GetRandomnessAfter { .. } => {
            Err(StdError::generic_err("not supported by the mock proxy"))
        }
        ExecuteMsg::TriggerJob { job_id, randomness } => {
            let requester = JOBS.load(deps.storage, job_id.clone())?;
            JOBS.remove(deps.storage, job_id.clone());

            Ok(
                Response::new().add_message(CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr: requester.to_string(),
                    msg: to_json_binary(&tiered_lottery::msg::ExecuteMsg::NoisReceive {
                        callback: NoisCallback {
                            job_id,
                            published: env.block.time,
                            randomness,
                        },
                    })?,
                    funds: vec![],
                })),
            )
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Payment {} => to_json_binary(&PAYMENT.load(deps.storage)?),
    }
}
