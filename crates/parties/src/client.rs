use serde::{Deserialize, Serialize};

use salesbook_core::{AggregateId, Entity};

/// Client identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub AggregateId);

impl ClientId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ClientId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Snapshot of a client as seen by the documents that reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientData {
    client_id: ClientId,
    name: String,
}

impl ClientData {
    pub fn new(client_id: ClientId, name: impl Into<String>) -> Self {
        Self {
            client_id,
            name: name.into(),
        }
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for ClientData {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.client_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesbook_core::{IdGenerator, SequentialIds};

    #[test]
    fn exposes_identity_and_name() {
        let client_id = ClientId::new(SequentialIds::new().next_id());
        let client = ClientData::new(client_id, "ACME");

        assert_eq!(client.client_id(), client_id);
        assert_eq!(client.id(), &client_id);
        assert_eq!(client.name(), "ACME");
    }

    #[test]
    fn serializes_with_flat_id() {
        let client_id = ClientId::new(SequentialIds::new().next_id());
        let json = serde_json::to_value(ClientData::new(client_id, "ACME")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "client_id": "00000000-0000-0000-0000-000000000001",
                "name": "ACME",
            })
        );
    }
}
