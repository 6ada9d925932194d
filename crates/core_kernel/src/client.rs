//! Client reference carried through requests and invoices
//!
//! The invoicing domains never look inside a client beyond copying it from
//! the request onto the issued invoice.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::identifiers::ClientId;

/// Opaque, immutable reference to the client being invoiced
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClientData {
    id: ClientId,
    name: String,
}

impl ClientData {
    /// Creates a client reference
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the name is blank
    pub fn new(id: ClientId, name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::validation("client name must not be blank"));
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize)]
struct ClientDataRaw {
    id: ClientId,
    name: String,
}

impl<'de> Deserialize<'de> for ClientData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = ClientDataRaw::deserialize(deserializer)?;
        ClientData::new(raw.id, raw.name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        let result = ClientData::new(ClientId::new(), "   ");
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_client_data_keeps_identity() {
        let id = ClientId::new();
        let client = ClientData::new(id, "Acme Pharmacy").unwrap();
        assert_eq!(client.id(), id);
        assert_eq!(client.name(), "Acme Pharmacy");
    }

    #[test]
    fn test_deserialize_rejects_blank_name() {
        let json = format!(r#"{{"id":"{}","name":"  "}}"#, uuid::Uuid::new_v4());
        let result = serde_json::from_str::<ClientData>(&json);
        let error = result.unwrap_err().to_string();
        assert!(error.contains("client name must not be blank"), "{}", error);
    }

    #[test]
    fn test_deserialize_accepts_valid_client() {
        let client = ClientData::new(ClientId::new(), "Acme Pharmacy").unwrap();
        let json = serde_json::to_string(&client).unwrap();
        assert_eq!(serde_json::from_str::<ClientData>(&json).unwrap(), client);
    }
}
