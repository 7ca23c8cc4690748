use serde::{Deserialize, Serialize};

/// Contact as delivered by the external contacts source. `wallet_address`
/// is untrusted free text and must be re-validated before use.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub wallet_address: String,
}

impl ContactRecord {
    /// Uppercase initials for avatar display, e.g. "John Doe" -> "JD".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}
