use serde::{Deserialize, Serialize};

pub const BASE_CHAIN_ID: u64 = 8453;

/// Chain-qualified asset identifier. Renders to and parses from CAIP-19:
/// `eip155:<chain>/slip44:60` for the native asset,
/// `eip155:<chain>/erc20:<contract>` for a contract asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenReference {
    pub chain_id: u64,
    pub asset: Asset,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Asset {
    Native,
    Erc20 { contract: String, decimals: u8 },
}

impl TokenReference {
    pub fn native(chain_id: u64) -> Self {
        Self {
            chain_id,
            asset: Asset::Native,
        }
    }

    pub fn erc20(chain_id: u64, contract: &str, decimals: u8) -> Self {
        Self {
            chain_id,
            asset: Asset::Erc20 {
                contract: contract.to_string(),
                decimals,
            },
        }
    }

    pub fn decimals(&self) -> u8 {
        match &self.asset {
            Asset::Native => 18,
            Asset::Erc20 { decimals, .. } => *decimals,
        }
    }

    pub fn caip19(&self) -> String {
        match &self.asset {
            Asset::Native => format!("eip155:{}/slip44:60", self.chain_id),
            Asset::Erc20 { contract, .. } => {
                format!("eip155:{}/erc20:{}", self.chain_id, contract)
            }
        }
    }
}

impl Default for TokenReference {
    fn default() -> Self {
        TokenReference::native(BASE_CHAIN_ID)
    }
}
