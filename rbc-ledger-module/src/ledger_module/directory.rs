use crate::ledger_module::{require_capability, LedgerUpdateError, ValidationError};
use crate::ledger_state::LedgerState;
use rbc_kernel_interface::reserve_kernel_interface::ReserveKernelOperations;
use rbc_kernel_interface::transaction_execution_interface::TransactionExecution;
use rbc_types::types::capabilities::Capability;
use rbc_types::types::events::{LedgerEvent, RecipientAddedEvent, RecipientRemovedEvent};
use rbc_types::types::primitives::AccountAddress;
use rbc_types::types::queries::RecipientInfo;
use std::collections::HashSet;

/// Register a batch of payout recipients with their metadata. Requires the
/// Administrator capability on the sender.
///
/// The three slices must have equal, non-zero length. Every entry is
/// validated before any is applied, so the batch takes effect all-or-nothing:
/// addresses and metadata fields must be non-empty and no account may already
/// be a recipient, counting earlier entries of the same batch.
///
/// # Events
///
/// Produces one [`RecipientAddedEvent`] per entry.
pub fn add_recipients<K: ReserveKernelOperations, E: TransactionExecution>(
    state: &mut LedgerState,
    kernel: &mut K,
    execution: &E,
    accounts: &[AccountAddress],
    names: &[String],
    descriptions: &[String],
) -> Result<(), LedgerUpdateError> {
    require_capability(state, execution.sender_address(), Capability::Administrator)?;
    if accounts.is_empty() {
        return Err(ValidationError::EmptyBatch.into());
    }
    if names.len() != accounts.len() {
        return Err(ValidationError::ArityMismatch {
            expected: accounts.len(),
            found: names.len(),
        }
        .into());
    }
    if descriptions.len() != accounts.len() {
        return Err(ValidationError::ArityMismatch {
            expected: accounts.len(),
            found: descriptions.len(),
        }
        .into());
    }

    let mut batch = HashSet::with_capacity(accounts.len());
    for ((account, name), description) in accounts.iter().zip(names).zip(descriptions) {
        if account.is_zero() {
            return Err(ValidationError::ZeroAccountAddress.into());
        }
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription.into());
        }
        if state.directory.is_member(account) || !batch.insert(*account) {
            return Err(ValidationError::RecipientAlreadyExists(*account).into());
        }
    }

    for ((account, name), description) in accounts.iter().zip(names).zip(descriptions) {
        state.directory.insert(RecipientInfo {
            address: *account,
            name: name.clone(),
            description: description.clone(),
        });
        kernel.log_event(LedgerEvent::RecipientAdded(RecipientAddedEvent {
            account: *account,
            name: name.clone(),
        }));
    }
    Ok(())
}

/// Remove a batch of recipients from the directory. Requires the
/// Administrator capability on the sender.
///
/// Every account must currently be a recipient; an account listed twice
/// fails like one that was never added. Validation runs before any removal,
/// so the batch takes effect all-or-nothing. Each removal swap-removes the
/// entry from the enumeration order.
///
/// # Events
///
/// Produces one [`RecipientRemovedEvent`] per entry.
pub fn remove_recipients<K: ReserveKernelOperations, E: TransactionExecution>(
    state: &mut LedgerState,
    kernel: &mut K,
    execution: &E,
    accounts: &[AccountAddress],
) -> Result<(), LedgerUpdateError> {
    require_capability(state, execution.sender_address(), Capability::Administrator)?;
    if accounts.is_empty() {
        return Err(ValidationError::EmptyBatch.into());
    }

    let mut batch = HashSet::with_capacity(accounts.len());
    for account in accounts {
        if !state.directory.is_member(account) || !batch.insert(*account) {
            return Err(ValidationError::RecipientNotFound(*account).into());
        }
    }

    for account in accounts {
        state.directory.remove(account);
        kernel.log_event(LedgerEvent::RecipientRemoved(RecipientRemovedEvent {
            account: *account,
        }));
    }
    Ok(())
}
