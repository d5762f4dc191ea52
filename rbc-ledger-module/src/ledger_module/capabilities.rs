use crate::ledger_module::{
    require_capability, AuthorizationError, LedgerUpdateError, ValidationError,
};
use crate::ledger_state::LedgerState;
use rbc_kernel_interface::reserve_kernel_interface::ReserveKernelOperations;
use rbc_kernel_interface::transaction_execution_interface::TransactionExecution;
use rbc_types::types::capabilities::Capability;
use rbc_types::types::events::{CapabilityGrantedEvent, CapabilityRevokedEvent, LedgerEvent};
use rbc_types::types::primitives::AccountAddress;

/// Grant `capability` to `account`. Requires the Administrator capability on
/// the sender.
///
/// The Recipient capability is rejected here: recipient membership carries
/// directory metadata and enumeration order and is mutated only through
/// [`crate::ledger_module::add_recipients`]. Granting an already-held
/// capability is a no-op; the event fires only on an actual change.
pub fn grant_capability<K: ReserveKernelOperations, E: TransactionExecution>(
    state: &mut LedgerState,
    kernel: &mut K,
    execution: &E,
    capability: Capability,
    account: AccountAddress,
) -> Result<(), LedgerUpdateError> {
    require_capability(state, execution.sender_address(), Capability::Administrator)?;
    if account.is_zero() {
        return Err(ValidationError::ZeroAccountAddress.into());
    }
    let changed = match capability {
        Capability::Recipient => {
            return Err(AuthorizationError::RecipientCapabilityRestricted.into());
        }
        Capability::Administrator => state.capabilities.insert_administrator(account),
        Capability::Operator => state.capabilities.insert_operator(account),
    };
    if changed {
        kernel.log_event(LedgerEvent::CapabilityGranted(CapabilityGrantedEvent {
            capability,
            account,
        }));
    }
    Ok(())
}

/// Revoke `capability` from `account`. Requires the Administrator capability
/// on the sender.
///
/// Like [`grant_capability`], the Recipient capability is rejected;
/// [`crate::ledger_module::remove_recipients`] is the only way out of the
/// recipient set. Revoking a capability that is not held is a no-op.
pub fn revoke_capability<K: ReserveKernelOperations, E: TransactionExecution>(
    state: &mut LedgerState,
    kernel: &mut K,
    execution: &E,
    capability: Capability,
    account: AccountAddress,
) -> Result<(), LedgerUpdateError> {
    require_capability(state, execution.sender_address(), Capability::Administrator)?;
    if account.is_zero() {
        return Err(ValidationError::ZeroAccountAddress.into());
    }
    let changed = match capability {
        Capability::Recipient => {
            return Err(AuthorizationError::RecipientCapabilityRestricted.into());
        }
        Capability::Administrator => state.capabilities.remove_administrator(&account),
        Capability::Operator => state.capabilities.remove_operator(&account),
    };
    if changed {
        kernel.log_event(LedgerEvent::CapabilityRevoked(CapabilityRevokedEvent {
            capability,
            account,
        }));
    }
    Ok(())
}
