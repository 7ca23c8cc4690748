use serde::{Deserialize, Serialize};

use crate::models::token::TokenReference;

/// Provenance of a payment intent. Drives display copy only; validation
/// rules are identical across modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentMode {
    Manual,
    Contact,
    Nfc,
}

impl IntentMode {
    /// Tolerant parse: the field is advisory, so unrecognized values fall
    /// back to `Manual` rather than erroring.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "manual" => IntentMode::Manual,
            "contact" => IntentMode::Contact,
            "nfc" => IntentMode::Nfc,
            _ => IntentMode::Manual,
        }
    }

    pub fn display(&self) -> ModeDisplay {
        match self {
            IntentMode::Manual => ModeDisplay {
                title: "Send Payment",
                subtitle: "Enter a recipient on Base",
            },
            IntentMode::Contact => ModeDisplay {
                title: "Pay a Contact",
                subtitle: "Secure payment on Base",
            },
            IntentMode::Nfc => ModeDisplay {
                title: "NFC Payment",
                subtitle: "Secure payment on Base",
            },
        }
    }
}

impl Default for IntentMode {
    fn default() -> Self {
        IntentMode::Manual
    }
}

/// Header copy shown for each mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModeDisplay {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Raw, unvalidated candidate produced by one of the intent-source parsers.
/// `None` means the source did not supply the field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateIntent {
    pub recipient_address: Option<String>,
    pub recipient_display_name: Option<String>,
    pub amount: Option<String>,
    pub token: Option<TokenReference>,
    pub mode: Option<IntentMode>,
}

/// The canonical, resolved description of a payment the user is about to
/// authorize. Constructed fresh per session, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub recipient_address: String,
    pub recipient_display_name: String,
    pub amount: String,
    pub token: TokenReference,
    pub mode: IntentMode,
}

impl PaymentIntent {
    /// Short display form, e.g. `0x742d...7c72`.
    pub fn short_recipient(&self) -> String {
        let addr = &self.recipient_address;
        if addr.len() < 10 {
            return addr.clone();
        }
        format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
    }
}

impl From<PaymentIntent> for CandidateIntent {
    fn from(intent: PaymentIntent) -> Self {
        CandidateIntent {
            recipient_address: Some(intent.recipient_address),
            recipient_display_name: Some(intent.recipient_display_name),
            amount: Some(intent.amount),
            token: Some(intent.token),
            mode: Some(intent.mode),
        }
    }
}
