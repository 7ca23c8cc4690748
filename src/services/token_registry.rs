use crate::{
    errors::AppError,
    models::token::{TokenReference, BASE_CHAIN_ID},
    services::address::is_valid_address,
};

// USDC on Base mainnet
const USDC_BASE_CONTRACT: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
const USDC_DECIMALS: u8 = 6;

/// Resolve a `token` query value into a chain-qualified asset reference.
/// Accepts a known symbol (`eth`, `usdc`) or a CAIP-19 string; anything
/// else is rejected rather than guessed, since moving the wrong asset is
/// not recoverable.
pub fn resolve_token(input: &str) -> Result<TokenReference, AppError> {
    match input.to_ascii_lowercase().as_str() {
        "eth" | "native" => Ok(TokenReference::native(BASE_CHAIN_ID)),
        "usdc" => Ok(TokenReference::erc20(
            BASE_CHAIN_ID,
            USDC_BASE_CONTRACT,
            USDC_DECIMALS,
        )),
        _ => parse_caip19(input),
    }
}

/// Decimals for a registered contract. Unknown contracts are rejected:
/// without decimals the amount cannot be converted to smallest units.
fn registered_decimals(contract: &str) -> Option<u8> {
    if contract.eq_ignore_ascii_case(USDC_BASE_CONTRACT) {
        Some(USDC_DECIMALS)
    } else {
        None
    }
}

fn parse_caip19(input: &str) -> Result<TokenReference, AppError> {
    let unsupported = || AppError::UnsupportedToken(input.to_string());

    let (chain_part, asset_part) = input.split_once('/').ok_or_else(unsupported)?;
    let chain_id = chain_part
        .strip_prefix("eip155:")
        .and_then(|id| id.parse::<u64>().ok())
        .ok_or_else(unsupported)?;

    let (namespace, reference) = asset_part.split_once(':').ok_or_else(unsupported)?;
    match namespace {
        // slip44:60 is the native asset
        "slip44" if reference == "60" => Ok(TokenReference::native(chain_id)),
        "erc20" => {
            if !is_valid_address(reference) {
                return Err(AppError::InvalidAddress(reference.to_string()));
            }
            let decimals = registered_decimals(reference).ok_or_else(unsupported)?;
            Ok(TokenReference::erc20(chain_id, reference, decimals))
        }
        _ => Err(unsupported()),
    }
}
