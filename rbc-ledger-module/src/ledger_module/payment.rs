use crate::ledger_module::{
    with_payout_latch, AuthorizationError, LedgerUpdateError, StateError, ValidationError,
};
use crate::ledger_state::LedgerState;
use rbc_kernel_interface::reserve_kernel_interface::ReserveKernelOperations;
use rbc_kernel_interface::transaction_execution_interface::TransactionExecution;
use rbc_types::types::capabilities::Capability;
use rbc_types::types::events::{LedgerEvent, PaidEvent};
use rbc_types::types::primitives::{AccountAddress, CreditAmount};

/// The sole outbound path for credits: burn `amount` from `from`'s balance
/// and pay the equivalent reserve currency to `recipient`.
///
/// The sender acts as an approved spender of `from` and cannot pay from its
/// own balance. `recipient` must hold the Recipient capability. The burn is
/// applied before the external payout; if the payout is rejected, the whole
/// operation, including the burn, must be rolled back by the execution
/// environment. The operation shares the payout latch with collateral
/// withdrawal.
///
/// # Events
///
/// Produces a [`PaidEvent`].
pub fn transfer_from<K: ReserveKernelOperations, E: TransactionExecution>(
    state: &mut LedgerState,
    kernel: &mut K,
    execution: &E,
    from: AccountAddress,
    recipient: AccountAddress,
    amount: CreditAmount,
) -> Result<(), LedgerUpdateError> {
    let spender = execution.sender_address();
    with_payout_latch(state, |state| {
        if from == spender {
            return Err(AuthorizationError::PaymentFromSelf.into());
        }
        if !state.has_capability(&recipient, Capability::Recipient) {
            return Err(ValidationError::RecipientNotFound(recipient).into());
        }
        if amount.is_zero() {
            return Err(ValidationError::ZeroAmount.into());
        }
        let available = kernel.reserve_balance();
        if amount.as_reserve() > available {
            return Err(StateError::InsufficientCollateral {
                available,
                required: amount.as_reserve(),
            }
            .into());
        }
        state.consume_allowance(&from, &spender, amount)?;
        state.debit_burn(&from, amount)?;
        kernel.transfer_reserve(&recipient, amount.as_reserve())?;
        kernel.log_event(LedgerEvent::Paid(PaidEvent {
            from,
            spender,
            recipient,
            amount,
        }));
        Ok(())
    })
}
