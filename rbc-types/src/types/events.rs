//! Events produced by ledger operations. Events generally represent
//! observable changes to the ledger state and are emitted through the
//! reserve kernel's event sink.

use crate::types::capabilities::Capability;
use crate::types::primitives::{AccountAddress, CreditAmount, ReserveAmount};

/// An observable effect of a successfully executed ledger operation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LedgerEvent {
    /// Credits were minted to an account.
    Minted(MintedEvent),
    /// An account burned credits from its own balance.
    Burned(BurnedEvent),
    /// An allowance was set.
    Approved(ApprovedEvent),
    /// Reserve currency was added to the ledger's collateral pool.
    CollateralDeposited(CollateralDepositedEvent),
    /// Reserve currency was withdrawn from the ledger's collateral pool.
    CollateralWithdrawn(CollateralWithdrawnEvent),
    /// An account was added to the recipient directory.
    RecipientAdded(RecipientAddedEvent),
    /// An account was removed from the recipient directory.
    RecipientRemoved(RecipientRemovedEvent),
    /// An account was granted a capability it did not hold before.
    CapabilityGranted(CapabilityGrantedEvent),
    /// A capability was revoked from an account that held it.
    CapabilityRevoked(CapabilityRevokedEvent),
    /// Credits were redeemed as a reserve-currency payout to a recipient.
    Paid(PaidEvent),
}

/// Credits were minted to `account`, increasing total supply.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MintedEvent {
    pub account: AccountAddress,
    pub amount: CreditAmount,
}

/// `account` burned credits from its own balance, decreasing total supply.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BurnedEvent {
    pub account: AccountAddress,
    pub amount: CreditAmount,
}

/// `owner` set the allowance of `spender` to `amount`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ApprovedEvent {
    pub owner: AccountAddress,
    pub spender: AccountAddress,
    pub amount: CreditAmount,
}

/// An operator attached `amount` of reserve currency to the ledger.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CollateralDepositedEvent {
    pub operator: AccountAddress,
    pub amount: ReserveAmount,
}

/// An operator withdrew `amount` of reserve currency to `to`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CollateralWithdrawnEvent {
    pub operator: AccountAddress,
    pub to: AccountAddress,
    pub amount: ReserveAmount,
}

/// `account` was registered in the recipient directory.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RecipientAddedEvent {
    pub account: AccountAddress,
    pub name: String,
}

/// `account` was removed from the recipient directory.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RecipientRemovedEvent {
    pub account: AccountAddress,
}

/// `account` was granted `capability`. Emitted only on an actual membership
/// change.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CapabilityGrantedEvent {
    pub capability: Capability,
    pub account: AccountAddress,
}

/// `capability` was revoked from `account`. Emitted only on an actual
/// membership change.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CapabilityRevokedEvent {
    pub capability: Capability,
    pub account: AccountAddress,
}

/// `spender` redeemed `amount` of `from`'s credits as a reserve payout to
/// `recipient`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PaidEvent {
    pub from: AccountAddress,
    pub spender: AccountAddress,
    pub recipient: AccountAddress,
    pub amount: CreditAmount,
}
