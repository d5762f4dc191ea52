use crate::ledger_module::{
    require_capability, LedgerUpdateError, StateError, ValidationError,
};
use crate::ledger_state::LedgerState;
use rbc_kernel_interface::reserve_kernel_interface::ReserveKernelOperations;
use rbc_kernel_interface::transaction_execution_interface::TransactionExecution;
use rbc_types::types::capabilities::Capability;
use rbc_types::types::events::{ApprovedEvent, BurnedEvent, LedgerEvent, MintedEvent};
use rbc_types::types::primitives::{AccountAddress, CreditAmount};

/// Mint `amount` credits to `account`. Requires the Operator capability on
/// the sender.
///
/// # Events
///
/// Produces a [`MintedEvent`].
pub fn mint<K: ReserveKernelOperations, E: TransactionExecution>(
    state: &mut LedgerState,
    kernel: &mut K,
    execution: &E,
    account: AccountAddress,
    amount: CreditAmount,
) -> Result<(), LedgerUpdateError> {
    require_capability(state, execution.sender_address(), Capability::Operator)?;
    mint_checked(state, kernel, account, amount)
}

fn mint_checked<K: ReserveKernelOperations>(
    state: &mut LedgerState,
    kernel: &mut K,
    account: AccountAddress,
    amount: CreditAmount,
) -> Result<(), LedgerUpdateError> {
    if account.is_zero() {
        return Err(ValidationError::ZeroAccountAddress.into());
    }
    if amount.is_zero() {
        return Err(ValidationError::ZeroAmount.into());
    }
    state.credit(&account, amount)?;
    kernel.log_event(LedgerEvent::Minted(MintedEvent { account, amount }));
    Ok(())
}

/// Mint to several accounts in one operation. The two slices must have equal,
/// non-zero length; every pair is validated before any balance changes, so
/// the batch takes effect all-or-nothing.
///
/// # Events
///
/// Produces one [`MintedEvent`] per pair.
pub fn bulk_mint<K: ReserveKernelOperations, E: TransactionExecution>(
    state: &mut LedgerState,
    kernel: &mut K,
    execution: &E,
    accounts: &[AccountAddress],
    amounts: &[CreditAmount],
) -> Result<(), LedgerUpdateError> {
    require_capability(state, execution.sender_address(), Capability::Operator)?;
    if accounts.is_empty() {
        return Err(ValidationError::EmptyBatch.into());
    }
    if amounts.len() != accounts.len() {
        return Err(ValidationError::ArityMismatch {
            expected: accounts.len(),
            found: amounts.len(),
        }
        .into());
    }

    let mut batch_total = CreditAmount(0);
    for (account, amount) in accounts.iter().zip(amounts) {
        if account.is_zero() {
            return Err(ValidationError::ZeroAccountAddress.into());
        }
        if amount.is_zero() {
            return Err(ValidationError::ZeroAmount.into());
        }
        batch_total = batch_total
            .checked_add(*amount)
            .ok_or(StateError::MintWouldOverflow {
                requested: *amount,
                current_supply: state.total_supply(),
            })?;
    }
    // Cumulative minting must stay representable; total minted bounds both
    // the supply and every balance, so checking it up front covers the rest.
    state
        .total_minted()
        .checked_add(batch_total)
        .ok_or(StateError::MintWouldOverflow {
            requested: batch_total,
            current_supply: state.total_supply(),
        })?;

    for (account, amount) in accounts.iter().zip(amounts) {
        mint_checked(state, kernel, *account, *amount)?;
    }
    Ok(())
}

/// Burn `amount` credits from the sender's own balance.
///
/// # Events
///
/// Produces a [`BurnedEvent`].
pub fn burn<K: ReserveKernelOperations, E: TransactionExecution>(
    state: &mut LedgerState,
    kernel: &mut K,
    execution: &E,
    amount: CreditAmount,
) -> Result<(), LedgerUpdateError> {
    let account = execution.sender_address();
    if amount.is_zero() {
        return Err(ValidationError::ZeroAmount.into());
    }
    state.debit_burn(&account, amount)?;
    kernel.log_event(LedgerEvent::Burned(BurnedEvent { account, amount }));
    Ok(())
}

/// Set the allowance of `spender` over the sender's balance to `amount`.
/// [`CreditAmount::MAX`] denotes an unlimited allowance that payments never
/// decrement.
///
/// # Events
///
/// Produces an [`ApprovedEvent`].
pub fn approve<K: ReserveKernelOperations, E: TransactionExecution>(
    state: &mut LedgerState,
    kernel: &mut K,
    execution: &E,
    spender: AccountAddress,
    amount: CreditAmount,
) -> Result<(), LedgerUpdateError> {
    let owner = execution.sender_address();
    if spender.is_zero() {
        return Err(ValidationError::ZeroAccountAddress.into());
    }
    state.set_allowance(owner, spender, amount);
    kernel.log_event(LedgerEvent::Approved(ApprovedEvent {
        owner,
        spender,
        amount,
    }));
    Ok(())
}
