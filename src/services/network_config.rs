use crate::{errors::AppError, models::network_config::NetworkConfig};

/// Get network configuration based on chain ID
pub fn get_network_config(chain_id: u64) -> Result<NetworkConfig, AppError> {
    match chain_id {
        8453 => Ok(NetworkConfig {
            chain_id: 8453,
            name: "Base".to_string(),
            symbol: "ETH".to_string(),
            block_explorer: "https://basescan.org".to_string(),
        }),
        84532 => Ok(NetworkConfig {
            chain_id: 84532,
            name: "Base Sepolia Testnet".to_string(),
            symbol: "ETH".to_string(),
            block_explorer: "https://sepolia.basescan.org".to_string(),
        }),
        _ => Err(AppError::UnsupportedChain(chain_id)),
    }
}

/// Block-explorer link for a submitted transaction.
pub fn explorer_tx_url(chain_id: u64, tx_hash: &str) -> Result<String, AppError> {
    let network = get_network_config(chain_id)?;
    Ok(format!("{}/tx/{}", network.block_explorer, tx_hash))
}
