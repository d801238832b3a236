use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The acting identity, as supplied by the external session provider.
/// The core never authenticates; it trusts this value once the account
/// middleware has placed it in the request extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
}

impl Account {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}
