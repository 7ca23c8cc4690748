use crate::{errors::AppError, models::contact::ContactRecord};

/// Read-only view over the already-authenticated external contacts
/// source. The OAuth flow and remote fetch live outside this service.
#[derive(Clone, Debug, Default)]
pub struct ContactDirectory {
    contacts: Vec<ContactRecord>,
}

impl ContactDirectory {
    pub fn new(contacts: Vec<ContactRecord>) -> Self {
        Self { contacts }
    }

    // Mock directory standing in for the external contacts fetch.
    pub fn seeded() -> Self {
        Self::new(vec![
            ContactRecord {
                id: "c-1".to_string(),
                name: "Jane Roe".to_string(),
                email: "jane.roe@example.com".to_string(),
                wallet_address: "0x742d35Cc6634C0532925a3b8D4bC5DbFADbE7c72".to_string(),
            },
            ContactRecord {
                id: "c-2".to_string(),
                name: "Sam Lee".to_string(),
                email: "sam.lee@example.com".to_string(),
                wallet_address: "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913".to_string(),
            },
        ])
    }

    pub async fn list_contacts(&self) -> Result<Vec<ContactRecord>, AppError> {
        Ok(self.contacts.clone())
    }
}
