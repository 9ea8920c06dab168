use cw_orch::prelude::*;
use tiered_lottery::msg::*;

#[cw_orch::interface(InstantiateMsg, ExecuteMsg, QueryMsg, MigrateMsg, id = "tiered-lottery")]
pub struct Lottery;

impl<Chain: CwEnv> Uploadable for Lottery<Chain> {
    /// Return the path to the wasm file corresponding to the contract
    fn wasm(&self) -> WasmPath {
        artifacts_dir_from_workspace!()
            .find_wasm_path("tiered_lottery")
            .unwrap()
    }
}
