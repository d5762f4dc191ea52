use crate::ledger_module::{
    require_capability, with_payout_latch, LedgerUpdateError, StateError, ValidationError,
};
use crate::ledger_state::LedgerState;
use rbc_kernel_interface::reserve_kernel_interface::ReserveKernelOperations;
use rbc_kernel_interface::transaction_execution_interface::TransactionExecution;
use rbc_types::types::capabilities::Capability;
use rbc_types::types::events::{
    CollateralDepositedEvent, CollateralWithdrawnEvent, LedgerEvent,
};
use rbc_types::types::primitives::{AccountAddress, ReserveAmount};

/// Record a collateral deposit. Requires the Operator capability on the
/// sender; the attached reserve value has already been credited to the
/// ledger by the execution environment and must be non-zero.
///
/// # Events
///
/// Produces a [`CollateralDepositedEvent`].
pub fn deposit_collateral<K: ReserveKernelOperations, E: TransactionExecution>(
    state: &mut LedgerState,
    kernel: &mut K,
    execution: &E,
) -> Result<(), LedgerUpdateError> {
    let operator = execution.sender_address();
    require_capability(state, operator, Capability::Operator)?;
    let amount = execution.attached_value();
    if amount.is_zero() {
        return Err(ValidationError::ZeroAmount.into());
    }
    kernel.log_event(LedgerEvent::CollateralDeposited(CollateralDepositedEvent {
        operator,
        amount,
    }));
    Ok(())
}

/// Withdraw `amount` of the ledger's reserve currency to `to`. Requires the
/// Operator capability on the sender and is guarded by the payout latch,
/// since the external transfer runs after the reserve state was read.
///
/// # Events
///
/// Produces a [`CollateralWithdrawnEvent`].
///
/// # Errors
///
/// - [`StateError::InsufficientCollateral`] if `amount` exceeds the held
///   reserve balance.
/// - [`LedgerUpdateError::TransferFailure`] if the destination rejects the
///   transfer; the whole operation must then be rolled back.
pub fn withdraw_collateral<K: ReserveKernelOperations, E: TransactionExecution>(
    state: &mut LedgerState,
    kernel: &mut K,
    execution: &E,
    to: AccountAddress,
    amount: ReserveAmount,
) -> Result<(), LedgerUpdateError> {
    let operator = execution.sender_address();
    require_capability(state, operator, Capability::Operator)?;
    with_payout_latch(state, |_state| {
        if to.is_zero() {
            return Err(ValidationError::ZeroAccountAddress.into());
        }
        let available = kernel.reserve_balance();
        if amount > available {
            return Err(StateError::InsufficientCollateral {
                available,
                required: amount,
            }
            .into());
        }
        kernel.transfer_reserve(&to, amount)?;
        kernel.log_event(LedgerEvent::CollateralWithdrawn(CollateralWithdrawnEvent {
            operator,
            to,
            amount,
        }));
        Ok(())
    })
}
