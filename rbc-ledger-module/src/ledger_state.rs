//! State owned by the credit ledger: balances, allowances, supply counters,
//! capability membership and the recipient directory.
//!
//! The low-level balance primitives here maintain the supply invariant
//! `total_supply == total_minted − total_burned == Σ balances` across every
//! successful mutation; operation-level checks live in
//! [`crate::ledger_module`].

use crate::capability_registry::CapabilityRegistry;
use crate::ledger_module::{LedgerStateInvariantError, LedgerUpdateError, StateError};
use crate::recipient_directory::RecipientDirectory;
use rbc_types::types::capabilities::Capability;
use rbc_types::types::primitives::{AccountAddress, CreditAmount};
use std::collections::HashMap;

/// The complete mutable state of one ledger instance.
///
/// The state is plain data and cheap to clone; the execution environment
/// snapshots it to provide all-or-nothing rollback around each operation.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    /// Credit balance per account. Absent means zero.
    balances: HashMap<AccountAddress, CreditAmount>,
    /// Remaining allowance per (owner, spender) pair. Absent means zero;
    /// [`CreditAmount::MAX`] means unlimited and is never decremented.
    allowances: HashMap<(AccountAddress, AccountAddress), CreditAmount>,
    total_supply: CreditAmount,
    total_minted: CreditAmount,
    total_burned: CreditAmount,
    pub(crate) capabilities: CapabilityRegistry,
    pub(crate) directory: RecipientDirectory,
    initialized: bool,
    payout_latch: bool,
}

impl LedgerState {
    /// A fresh, uninitialized ledger. No account holds any capability until
    /// [`crate::ledger_module::initialize`] has run.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Whether `account` currently holds `capability`. Recipient membership
    /// is answered by the directory, the single source of truth for it.
    pub fn has_capability(&self, account: &AccountAddress, capability: Capability) -> bool {
        match capability {
            Capability::Administrator => self.capabilities.is_administrator(account),
            Capability::Operator => self.capabilities.is_operator(account),
            Capability::Recipient => self.directory.is_member(account),
        }
    }

    pub fn balance_of(&self, account: &AccountAddress) -> CreditAmount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    pub fn total_supply(&self) -> CreditAmount {
        self.total_supply
    }

    pub fn total_minted(&self) -> CreditAmount {
        self.total_minted
    }

    pub fn total_burned(&self) -> CreditAmount {
        self.total_burned
    }

    pub fn allowance(&self, owner: &AccountAddress, spender: &AccountAddress) -> CreditAmount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// All accounts with a non-zero balance, in no particular order.
    pub fn account_balances(&self) -> impl Iterator<Item = (&AccountAddress, CreditAmount)> {
        self.balances.iter().map(|(account, amount)| (account, *amount))
    }

    pub(crate) fn set_allowance(
        &mut self,
        owner: AccountAddress,
        spender: AccountAddress,
        amount: CreditAmount,
    ) {
        if amount.is_zero() {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }

    /// Consume `amount` from the allowance `owner` granted `spender`. The
    /// unlimited sentinel is left untouched.
    pub(crate) fn consume_allowance(
        &mut self,
        owner: &AccountAddress,
        spender: &AccountAddress,
        amount: CreditAmount,
    ) -> Result<(), StateError> {
        let available = self.allowance(owner, spender);
        if available == CreditAmount::MAX {
            return Ok(());
        }
        let remaining = available
            .checked_sub(amount)
            .ok_or(StateError::InsufficientAllowance {
                available,
                required: amount,
            })?;
        self.set_allowance(*owner, *spender, remaining);
        Ok(())
    }

    /// Mint primitive: increase `account`'s balance, total supply and total
    /// minted by `amount`.
    pub(crate) fn credit(
        &mut self,
        account: &AccountAddress,
        amount: CreditAmount,
    ) -> Result<(), StateError> {
        let overflow = || StateError::MintWouldOverflow {
            requested: amount,
            current_supply: self.total_supply,
        };
        let minted = self.total_minted.checked_add(amount).ok_or_else(overflow)?;
        let supply = self.total_supply.checked_add(amount).ok_or_else(overflow)?;
        let balance = self
            .balance_of(account)
            .checked_add(amount)
            .ok_or_else(overflow)?;
        self.total_minted = minted;
        self.total_supply = supply;
        self.balances.insert(*account, balance);
        Ok(())
    }

    /// Burn primitive: decrease `account`'s balance and total supply by
    /// `amount` and increase total burned.
    pub(crate) fn debit_burn(
        &mut self,
        account: &AccountAddress,
        amount: CreditAmount,
    ) -> Result<(), LedgerUpdateError> {
        let available = self.balance_of(account);
        let balance = available
            .checked_sub(amount)
            .ok_or(StateError::InsufficientBalance {
                available,
                required: amount,
            })?;
        // Total supply covers every balance and total burned never passes
        // total minted, so neither counter can wrap once the balance check
        // passed; wrapping here means the state is corrupt.
        let supply = self.total_supply.checked_sub(amount).ok_or_else(|| {
            LedgerStateInvariantError("Total supply underflow at burn".to_string())
        })?;
        let burned = self.total_burned.checked_add(amount).ok_or_else(|| {
            LedgerStateInvariantError("Total burned overflow at burn".to_string())
        })?;
        self.total_supply = supply;
        self.total_burned = burned;
        if balance.is_zero() {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, balance);
        }
        Ok(())
    }

    /// Acquire the mutual-exclusion latch shared by the payout operations.
    pub(crate) fn try_acquire_payout_latch(&mut self) -> Result<(), StateError> {
        if self.payout_latch {
            return Err(StateError::ReentrantCall);
        }
        self.payout_latch = true;
        Ok(())
    }

    pub(crate) fn release_payout_latch(&mut self) {
        self.payout_latch = false;
    }
}
