//! Client domain models.

use serde::{Deserialize, Serialize};

/// A brokerage client. Owns zero or more positions and at most one margin
/// account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
}

/// Payload for creating a client. Clients are created by onboarding flows
/// (sample-data seeding in this service); the margin engine only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
}
