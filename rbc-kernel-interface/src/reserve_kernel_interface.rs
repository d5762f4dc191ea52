//! Reserve kernel interface for the credit ledger. This is the boundary seen
//! by the ledger module. The kernel owns the reserve currency held by the
//! ledger and provides the primitive to pay it out, together with the event
//! sink for observable ledger effects.
//!
//! The kernel is assumed to execute every ledger operation atomically: when
//! an operation returns an error, all of the calls made to the kernel during
//! that operation must be rolled back by the caller.

use crate::error::ReserveTransferFailedError;
use rbc_types::types::events::LedgerEvent;
use rbc_types::types::primitives::{AccountAddress, ReserveAmount};

/// Queries provided by the reserve kernel.
pub trait ReserveKernelQueries {
    /// The reserve currency currently held by the ledger itself. This is the
    /// ledger's externally observable currency balance, read on demand; it is
    /// not tracked as ledger state.
    fn reserve_balance(&self) -> ReserveAmount;
}

/// Operations provided by the reserve kernel.
pub trait ReserveKernelOperations: ReserveKernelQueries {
    /// Transfer `amount` of the ledger's reserve currency to `to`.
    ///
    /// The destination may reject the transfer, in which case the containing
    /// ledger operation must be aborted in its entirety.
    ///
    /// # Errors
    ///
    /// - [`ReserveTransferFailedError`] The destination rejected the
    ///   transfer, or the environment could not perform it.
    fn transfer_reserve(
        &mut self,
        to: &AccountAddress,
        amount: ReserveAmount,
    ) -> Result<(), ReserveTransferFailedError>;

    /// Log a ledger event.
    ///
    /// Events logged during an operation that ultimately fails must be
    /// discarded together with the rest of the rollback.
    fn log_event(&mut self, event: LedgerEvent);
}
