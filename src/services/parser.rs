use std::collections::HashMap;

use crate::{
    errors::AppError,
    models::{
        contact::ContactRecord,
        intent::{CandidateIntent, IntentMode},
    },
    services::{address::is_valid_address, token_registry},
};

/// Query keys this service interprets; everything else is ignored.
pub const RECOGNIZED_KEYS: [&str; 5] = ["address", "amount", "name", "mode", "token"];

/// What to do when the query string carries no recipient. The manual
/// landing requires one upfront; contact- and NFC-initiated flows expect
/// partial links and leave the field for the user to fill in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecipientPolicy {
    RequireUpfront,
    AwaitInput,
}

/// Parse the query parameters carried across a page navigation into an
/// unvalidated candidate intent.
pub fn parse_query(
    params: &HashMap<String, String>,
    policy: RecipientPolicy,
) -> Result<CandidateIntent, AppError> {
    let field = |key: &str| params.get(key).map(String::as_str).filter(|v| !v.is_empty());

    let recipient_address = match field("address") {
        Some(address) => {
            if !is_valid_address(address) {
                return Err(AppError::InvalidAddress(address.to_string()));
            }
            Some(address.to_string())
        }
        None if policy == RecipientPolicy::RequireUpfront => {
            return Err(AppError::MissingRecipient)
        }
        None => None,
    };

    let token = field("token").map(token_registry::resolve_token).transpose()?;

    Ok(CandidateIntent {
        recipient_address,
        recipient_display_name: field("name").map(str::to_string),
        amount: field("amount").map(str::to_string),
        token,
        // advisory field, unrecognized values normalize to Manual
        mode: field("mode").map(IntentMode::parse),
    })
}

/// NFC payloads arrive as URL query parameters; field semantics are the
/// query parser's. The candidate is stamped `Nfc` regardless of any
/// `mode` value in the payload, and the recipient is always awaited
/// rather than required.
pub fn parse_nfc(params: &HashMap<String, String>) -> Result<CandidateIntent, AppError> {
    let mut candidate = parse_query(params, RecipientPolicy::AwaitInput)?;
    candidate.mode = Some(IntentMode::Nfc);
    Ok(candidate)
}

/// Turn a selected contact into a candidate intent. The wallet address is
/// untrusted free text and is re-validated here; an invalid address is an
/// error, never a silently dropped contact.
pub fn parse_contact(contact: &ContactRecord) -> Result<CandidateIntent, AppError> {
    if !is_valid_address(&contact.wallet_address) {
        return Err(AppError::InvalidAddress(contact.wallet_address.clone()));
    }
    Ok(CandidateIntent {
        recipient_address: Some(contact.wallet_address.clone()),
        recipient_display_name: Some(contact.name.clone()),
        amount: None,
        token: None,
        mode: Some(IntentMode::Contact),
    })
}
