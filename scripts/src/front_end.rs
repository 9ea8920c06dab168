//! Keeps a front end deployment file in sync with the chain. The addresses
//! file maps a chain id to the list of lottery addresses deployed there, the
//! last entry being the current one.

use std::{fs, path::Path};

use serde_json::{json, Map, Value};

pub fn update_contract_addresses(
    addresses_file: &Path,
    chain_id: &str,
    lottery_addr: &str,
) -> anyhow::Result<()> {
    let mut contract_addresses: Map<String, Value> = if addresses_file.exists() {
        serde_json::from_str(&fs::read_to_string(addresses_file)?)?
    } else {
        Map::new()
    };

    match contract_addresses.get_mut(chain_id) {
        Some(Value::Array(chain_addresses)) => {
            let known = chain_addresses
                .iter()
                .any(|addr| addr.as_str() == Some(lottery_addr));
            if !known {
                // replace the previous deployment with the new one
                chain_addresses.pop();
                chain_addresses.push(json!(lottery_addr));
            }
        }
        _ => {
            contract_addresses.insert(chain_id.to_string(), json!([lottery_addr]));
        }
    }

    fs::write(
        addresses_file,
        serde_json::to_string(&contract_addresses)?,
    )?;
    Ok(())
}

/// Copies the generated json schema next to the front end sources.
pub fn update_schema(schema_file: &Path, front_end_schema_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(front_end_schema_dir)?;
    let target = front_end_schema_dir.join("lottery.json");
    fs::copy(schema_file, target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn creates_the_addresses_file() {
        let file = temp_file("lottery-addresses-create.json");
        let _ = fs::remove_file(&file);

        update_contract_addresses(&file, "elgafar-1", "stars1lottery").unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(written["elgafar-1"], json!(["stars1lottery"]));
        let _ = fs::remove_file(&file);
    }

    #[test]
    fn replaces_the_latest_address_on_redeploy() {
        let file = temp_file("lottery-addresses-replace.json");
        fs::write(&file, r#"{"elgafar-1":["stars1old"]}"#).unwrap();

        update_contract_addresses(&file, "elgafar-1", "stars1new").unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(written["elgafar-1"], json!(["stars1new"]));
        let _ = fs::remove_file(&file);
    }

    #[test]
    fn copies_the_schema_for_the_front_end() {
        let schema_file = temp_file("lottery-schema-source.json");
        let schema_dir = temp_file("lottery-schema-out");
        fs::write(&schema_file, r#"{"contract_name":"tiered-lottery"}"#).unwrap();
        let _ = fs::remove_dir_all(&schema_dir);

        update_schema(&schema_file, &schema_dir).unwrap();

        let copied = fs::read_to_string(schema_dir.join("lottery.json")).unwrap();
        assert_eq!(copied, r#"{"contract_name":"tiered-lottery"}"#);

        let _ = fs::remove_file(&schema_file);
        let _ = fs::remove_dir_all(&schema_dir);
    }

    #[test]
    fn keeps_a_known_address_and_other_chains() {
        let file = temp_file("lottery-addresses-keep.json");
        fs::write(
            &file,
            r#"{"elgafar-1":["stars1lottery"],"stargaze-1":["stars1mainnet"]}"#,
        )
        .unwrap();

        update_contract_addresses(&file, "elgafar-1", "stars1lottery").unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(written["elgafar-1"], json!(["stars1lottery"]));
        assert_eq!(written["stargaze-1"], json!(["stars1mainnet"]));
        let _ = fs::remove_file(&file);
    }
}
