//! The enumerable directory of authorized payout recipients.
//!
//! Entries are kept in a dense vector that defines the enumeration order,
//! with a reverse index from address to position. Insertion appends; removal
//! swap-removes, so enumeration order is insertion order until the first
//! removal and is not stable across removals. Membership, metadata and
//! enumeration order are all carried by the same record, so they cannot get
//! out of sync.

use rbc_types::types::primitives::AccountAddress;
use rbc_types::types::queries::{RecipientInfo, RecipientPage};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub(crate) struct RecipientDirectory {
    /// Records in enumeration order.
    records: Vec<RecipientInfo>,
    /// Position of each member in `records`.
    positions: HashMap<AccountAddress, usize>,
}

impl RecipientDirectory {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_member(&self, account: &AccountAddress) -> bool {
        self.positions.contains_key(account)
    }

    pub fn get(&self, account: &AccountAddress) -> Option<&RecipientInfo> {
        self.positions
            .get(account)
            .and_then(|position| self.records.get(*position))
    }

    /// Append a record. Returns `false` without changing anything if the
    /// address is already a member.
    pub fn insert(&mut self, record: RecipientInfo) -> bool {
        if self.is_member(&record.address) {
            return false;
        }
        self.positions.insert(record.address, self.records.len());
        self.records.push(record);
        true
    }

    /// Remove a member by filling its slot with the current last record and
    /// truncating. Returns `false` if the address is not a member.
    pub fn remove(&mut self, account: &AccountAddress) -> bool {
        let Some(position) = self.positions.remove(account) else {
            return false;
        };
        self.records.swap_remove(position);
        if let Some(moved) = self.records.get(position) {
            self.positions.insert(moved.address, position);
        }
        true
    }

    /// One page of the enumeration starting at `cursor` in current order.
    ///
    /// A cursor at or past the member count yields an empty page with the
    /// cursor pinned to the count. Otherwise at most `size` entries are
    /// returned and the next cursor advances by the returned count.
    pub fn page(&self, cursor: u64, size: u64) -> RecipientPage {
        let count = self.records.len() as u64;
        if cursor >= count {
            return RecipientPage {
                recipients: Vec::new(),
                next_cursor: count,
            };
        }
        let returned = size.min(count - cursor);
        let start = cursor as usize;
        let recipients = self.records[start..start + returned as usize].to_vec();
        RecipientPage {
            recipients,
            next_cursor: cursor + returned,
        }
    }

    /// All current records in enumeration order.
    pub fn all(&self) -> &[RecipientInfo] {
        &self.records
    }
}
