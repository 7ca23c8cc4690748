use crate::models::intent::{CandidateIntent, PaymentIntent};
use crate::models::token::TokenReference;

/// Merge a candidate with the default rules into a canonical intent.
/// Pure and total: fields present in the candidate are copied verbatim,
/// absent ones get their documented defaults (empty strings, the native
/// asset, `Manual`). Validation happened upstream in the parsers or is
/// deferred to the submit gate.
pub fn resolve(candidate: CandidateIntent) -> PaymentIntent {
    PaymentIntent {
        recipient_address: candidate.recipient_address.unwrap_or_default(),
        recipient_display_name: candidate.recipient_display_name.unwrap_or_default(),
        amount: candidate.amount.unwrap_or_default(),
        token: candidate.token.unwrap_or_default(),
        mode: candidate.mode.unwrap_or_default(),
    }
}
