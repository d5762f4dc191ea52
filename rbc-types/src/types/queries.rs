//! Types returned by ledger queries.

use crate::types::primitives::AccountAddress;
use serde::{Deserialize, Serialize};

/// Directory entry for an authorized recipient. Serializes to the
/// `{address, name, description}` object of the JSON export surface.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RecipientInfo {
    /// The recipient account, rendered as fixed-length lowercase hex.
    pub address: AccountAddress,
    /// Human-readable display name. Never empty.
    pub name: String,
    /// Human-readable description. Never empty.
    pub description: String,
}

/// One page of the recipient directory enumeration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RecipientPage {
    /// At most `size` entries, in the directory's current enumeration order.
    pub recipients: Vec<RecipientInfo>,
    /// Cursor to pass to the next call. Advancing by the returned count from
    /// cursor 0 until an empty page visits every current member exactly once.
    pub next_cursor: u64,
}
