//! Atomic execution of ledger operations.
//!
//! The ledger module requires its caller to roll back all state changes and
//! logged events of an operation that returns an error. [`execute`] provides
//! that guarantee for in-memory state: the ledger state is snapshotted before
//! the operation and restored on failure, and events are buffered and only
//! forwarded to the underlying kernel when the operation succeeds.
//!
//! Reserve transfers cannot be buffered the same way, since the operation
//! observes their outcome; the ledger operations are ordered so that a
//! rejected transfer is itself the failure that aborts the operation, before
//! any event is committed.

use log::debug;
use rbc_kernel_interface::error::ReserveTransferFailedError;
use rbc_kernel_interface::reserve_kernel_interface::{
    ReserveKernelOperations, ReserveKernelQueries,
};
use rbc_kernel_interface::transaction_execution_interface::TransactionExecution;
use rbc_ledger_module::ledger_module::LedgerUpdateError;
use rbc_ledger_module::ledger_state::LedgerState;
use rbc_types::types::events::LedgerEvent;
use rbc_types::types::primitives::{AccountAddress, ReserveAmount};
use std::mem;

/// Context of one external invocation: the caller identity and the reserve
/// value attached to the call.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionContext {
    sender: AccountAddress,
    attached_value: ReserveAmount,
}

impl ExecutionContext {
    pub fn with_sender(sender: AccountAddress) -> Self {
        Self {
            sender,
            attached_value: ReserveAmount(0),
        }
    }

    pub fn with_attached_value(sender: AccountAddress, attached_value: ReserveAmount) -> Self {
        Self {
            sender,
            attached_value,
        }
    }
}

impl TransactionExecution for ExecutionContext {
    fn sender_address(&self) -> AccountAddress {
        self.sender
    }

    fn attached_value(&self) -> ReserveAmount {
        self.attached_value
    }
}

/// Kernel wrapper that withholds events until the operation commits.
pub struct BufferedKernel<'a, K> {
    inner: &'a mut K,
    events: Vec<LedgerEvent>,
}

impl<'a, K: ReserveKernelOperations> BufferedKernel<'a, K> {
    fn new(inner: &'a mut K) -> Self {
        Self {
            inner,
            events: Vec::new(),
        }
    }

    fn commit(&mut self) {
        for event in mem::take(&mut self.events) {
            self.inner.log_event(event);
        }
    }
}

impl<K: ReserveKernelQueries> ReserveKernelQueries for BufferedKernel<'_, K> {
    fn reserve_balance(&self) -> ReserveAmount {
        self.inner.reserve_balance()
    }
}

impl<K: ReserveKernelOperations> ReserveKernelOperations for BufferedKernel<'_, K> {
    fn transfer_reserve(
        &mut self,
        to: &AccountAddress,
        amount: ReserveAmount,
    ) -> Result<(), ReserveTransferFailedError> {
        self.inner.transfer_reserve(to, amount)
    }

    fn log_event(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}

/// Run one ledger operation atomically against `state` and `kernel`.
///
/// On success the operation's buffered events are forwarded to `kernel` and
/// its state changes stand. On failure the ledger state is restored to the
/// snapshot taken before the operation and no event reaches the kernel.
pub fn execute<K, T, F>(
    state: &mut LedgerState,
    kernel: &mut K,
    operation: F,
) -> Result<T, LedgerUpdateError>
where
    K: ReserveKernelOperations,
    F: FnOnce(&mut LedgerState, &mut BufferedKernel<'_, K>) -> Result<T, LedgerUpdateError>,
{
    let snapshot = state.clone();
    let mut buffered = BufferedKernel::new(kernel);
    match operation(state, &mut buffered) {
        Ok(value) => {
            debug!("ledger update committed with {} event(s)", buffered.events.len());
            buffered.commit();
            Ok(value)
        }
        Err(err) => {
            *state = snapshot;
            debug!("ledger update rolled back: {err}");
            Err(err)
        }
    }
}
