use std::str::FromStr;

use chrono::{DateTime, Utc};
use ethers::types::{Address, U256};
use ethers::utils::parse_units;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{intent::PaymentIntent, token::TokenReference},
    services::network_config,
};

/// Payment-call request handed to the wallet-signing boundary. `value` is
/// in the token's smallest unit.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentCall {
    pub to: Address,
    pub value: U256,
    pub token: TokenReference,
}

#[derive(Clone, Debug, Serialize)]
pub struct PaymentReceipt {
    pub transaction_hash: String,
    pub explorer_url: String,
    pub submitted_at: DateTime<Utc>,
}

pub struct WalletService;

impl WalletService {
    /// Convert a gated intent into the opaque call request the signing
    /// boundary accepts. The decimal amount string converts to smallest
    /// units using the asset's decimals.
    pub fn build_call(intent: &PaymentIntent) -> Result<PaymentCall, AppError> {
        let to = Address::from_str(&intent.recipient_address)
            .map_err(|_| AppError::InvalidAddress(intent.recipient_address.clone()))?;
        let value = parse_units(&intent.amount, u32::from(intent.token.decimals()))
            .map_err(|_| AppError::InvalidAmount(intent.amount.clone()))?;
        Ok(PaymentCall {
            to,
            value: U256::from(value),
            token: intent.token.clone(),
        })
    }

    /// Hand the call to the external signer. Signing internals are not
    /// inspected here; the result is a transaction hash or an opaque
    /// error.
    // TODO: wire a real signer once the host exposes one; mocked like the
    // upstream wallet service for now.
    pub async fn submit_payment(&self, call: PaymentCall) -> Result<PaymentReceipt, AppError> {
        let transaction_hash = format!(
            "0x{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        );
        let explorer_url = network_config::explorer_tx_url(call.token.chain_id, &transaction_hash)?;
        log::info!(
            "submitted payment of {} ({}) to {:#x}",
            call.value,
            call.token.caip19(),
            call.to
        );
        Ok(PaymentReceipt {
            transaction_hash,
            explorer_url,
            submitted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::intent::IntentMode;
    use crate::models::token::BASE_CHAIN_ID;

    fn intent(amount: &str, token: TokenReference) -> PaymentIntent {
        PaymentIntent {
            recipient_address: "0x742d35Cc6634C0532925a3b8D4bC5DbFADbE7c72".to_string(),
            recipient_display_name: String::new(),
            amount: amount.to_string(),
            token,
            mode: IntentMode::Manual,
        }
    }

    #[test]
    fn native_amount_converts_to_wei() {
        let call =
            WalletService::build_call(&intent("0.01", TokenReference::native(BASE_CHAIN_ID)))
                .unwrap();
        assert_eq!(call.value, U256::exp10(16));
    }

    #[test]
    fn erc20_amount_uses_token_decimals() {
        let usdc = TokenReference::erc20(
            BASE_CHAIN_ID,
            "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
            6,
        );
        let call = WalletService::build_call(&intent("2.5", usdc)).unwrap();
        assert_eq!(call.value, U256::from(2_500_000u64));
    }

    #[test]
    fn malformed_amount_is_rejected() {
        let err = WalletService::build_call(&intent("abc", TokenReference::default()))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)));
    }

    #[actix_web::test]
    async fn receipt_links_to_block_explorer() {
        let call =
            WalletService::build_call(&intent("1", TokenReference::native(BASE_CHAIN_ID)))
                .unwrap();
        let receipt = WalletService.submit_payment(call).await.unwrap();
        assert!(receipt.transaction_hash.starts_with("0x"));
        assert_eq!(receipt.transaction_hash.len(), 66);
        assert!(receipt
            .explorer_url
            .starts_with("https://basescan.org/tx/0x"));
    }
}
