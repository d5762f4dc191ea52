//! Membership sets for the capabilities administered directly by the ledger.
//!
//! Only the administrator and operator sets live here. Recipient membership
//! is owned by the recipient directory, so that directory metadata and
//! capability membership cannot diverge; the generic grant/revoke entry
//! points are structurally unable to touch it.

use rbc_types::types::primitives::AccountAddress;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub(crate) struct CapabilityRegistry {
    administrators: HashSet<AccountAddress>,
    operators: HashSet<AccountAddress>,
}

impl CapabilityRegistry {
    pub fn is_administrator(&self, account: &AccountAddress) -> bool {
        self.administrators.contains(account)
    }

    pub fn is_operator(&self, account: &AccountAddress) -> bool {
        self.operators.contains(account)
    }

    /// Returns whether membership actually changed.
    pub fn insert_administrator(&mut self, account: AccountAddress) -> bool {
        self.administrators.insert(account)
    }

    /// Returns whether membership actually changed.
    pub fn remove_administrator(&mut self, account: &AccountAddress) -> bool {
        self.administrators.remove(account)
    }

    /// Returns whether membership actually changed.
    pub fn insert_operator(&mut self, account: AccountAddress) -> bool {
        self.operators.insert(account)
    }

    /// Returns whether membership actually changed.
    pub fn remove_operator(&mut self, account: &AccountAddress) -> bool {
        self.operators.remove(account)
    }
}
