//! Interface/context for transaction execution.

use rbc_types::types::primitives::{AccountAddress, ReserveAmount};

/// Context of the current external invocation, supplied by the execution
/// environment. This is the abstraction seen by every ledger entry point.
pub trait TransactionExecution {
    /// The account initiating the current invocation.
    fn sender_address(&self) -> AccountAddress;

    /// The reserve-currency amount attached to the current invocation. The
    /// environment credits the attached value to the ledger before the
    /// operation runs; value-bearing operations only validate and record it.
    fn attached_value(&self) -> ReserveAmount;
}
