//! Operation entry points of the credit ledger.
//!
//! Every mutating operation takes the ledger state, a reserve kernel and the
//! transaction execution context, checks its preconditions before touching
//! any state, and emits its observable effects through the kernel's event
//! sink. When an operation returns an error, the surrounding execution
//! environment must discard all state changes and logged events of that
//! operation.

use crate::ledger_state::LedgerState;
use rbc_kernel_interface::error::ReserveTransferFailedError;
use rbc_types::types::capabilities::Capability;
use rbc_types::types::primitives::{AccountAddress, CreditAmount, ReserveAmount};

mod capabilities;
mod collateral;
mod directory;
mod initialize;
mod payment;
mod queries;
mod supply;

pub use capabilities::{grant_capability, revoke_capability};
pub use collateral::{deposit_collateral, withdraw_collateral};
pub use directory::{add_recipients, remove_recipients};
pub use initialize::initialize;
pub use payment::transfer_from;
pub use queries::{
    allowance, balance_of, collateral_ratio, get_recipient, get_recipients, has_capability,
    recipient_count, recipient_json, recipients_json, total_burned, total_minted, total_supply,
    RecipientQueryError,
};
pub use supply::{approve, bulk_mint, burn, mint};

/// The caller is not entitled to the attempted operation.
#[derive(Debug, thiserror::Error)]
pub enum AuthorizationError {
    #[error("Account {account} does not hold the {required} capability")]
    MissingCapability {
        account: AccountAddress,
        required: Capability,
    },
    #[error("The recipient capability can only be changed through the recipient directory")]
    RecipientCapabilityRestricted,
    #[error("Cannot pay from self")]
    PaymentFromSelf,
}

/// The operation input is malformed.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Amount must be non-zero")]
    ZeroAmount,
    #[error("Account address must be non-zero")]
    ZeroAccountAddress,
    #[error("Recipient name must be non-empty")]
    EmptyName,
    #[error("Recipient description must be non-empty")]
    EmptyDescription,
    #[error("Argument arrays must have equal length: expected {expected}, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("Argument arrays must be non-empty")]
    EmptyBatch,
    #[error("Recipient {0} already exists")]
    RecipientAlreadyExists(AccountAddress),
    #[error("Recipient {0} not found")]
    RecipientNotFound(AccountAddress),
}

/// The current ledger or reserve state does not admit the operation.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance {
        available: CreditAmount,
        required: CreditAmount,
    },
    #[error("Insufficient allowance: available {available}, required {required}")]
    InsufficientAllowance {
        available: CreditAmount,
        required: CreditAmount,
    },
    #[error("Insufficient collateral: available {available}, required {required}")]
    InsufficientCollateral {
        available: ReserveAmount,
        required: ReserveAmount,
    },
    #[error("Minting {requested} would overflow the current supply of {current_supply}")]
    MintWouldOverflow {
        requested: CreditAmount,
        current_supply: CreditAmount,
    },
    #[error("Reentrant call rejected by the payout latch")]
    ReentrantCall,
}

/// An invariant of the ledger state that should be enforced is broken. This
/// is generally an error that should never happen and is unrecoverable.
#[derive(Debug, thiserror::Error)]
#[error("Ledger state invariant broken: {0}")]
pub struct LedgerStateInvariantError(pub String);

/// Represents the reasons why a ledger update operation can fail.
#[derive(Debug, thiserror::Error)]
pub enum LedgerUpdateError {
    #[error("{0}")]
    Authorization(#[from] AuthorizationError),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    State(#[from] StateError),
    #[error("{0}")]
    TransferFailure(#[from] ReserveTransferFailedError),
    #[error("{0}")]
    StateInvariantViolation(#[from] LedgerStateInvariantError),
}

/// Represents the reasons why [`initialize`] can fail.
#[derive(Debug, thiserror::Error)]
pub enum LedgerInitializationError {
    #[error("The ledger is already initialized")]
    AlreadyInitialized,
    #[error("The administrator address must be non-zero")]
    ZeroAdministratorAddress,
}

/// Check that `account` holds `required` before any state is touched.
pub(crate) fn require_capability(
    state: &LedgerState,
    account: AccountAddress,
    required: Capability,
) -> Result<(), AuthorizationError> {
    if state.has_capability(&account, required) {
        Ok(())
    } else {
        Err(AuthorizationError::MissingCapability { account, required })
    }
}

/// Run `operation` while holding the payout latch shared by the operations
/// that perform an external reserve transfer. The latch is released on every
/// exit path; nested acquisition is rejected.
pub(crate) fn with_payout_latch<T>(
    state: &mut LedgerState,
    operation: impl FnOnce(&mut LedgerState) -> Result<T, LedgerUpdateError>,
) -> Result<T, LedgerUpdateError> {
    state.try_acquire_payout_latch()?;
    let result = operation(state);
    state.release_payout_latch();
    result
}
