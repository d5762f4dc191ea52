use crate::ledger_module::LedgerInitializationError;
use crate::ledger_state::LedgerState;
use rbc_kernel_interface::reserve_kernel_interface::ReserveKernelOperations;
use rbc_types::types::capabilities::Capability;
use rbc_types::types::events::{CapabilityGrantedEvent, LedgerEvent};
use rbc_types::types::primitives::AccountAddress;

/// Initialize the ledger by recording the initial administrator. Callable
/// exactly once per ledger instance; any further attempt is rejected.
pub fn initialize(
    state: &mut LedgerState,
    kernel: &mut impl ReserveKernelOperations,
    administrator: AccountAddress,
) -> Result<(), LedgerInitializationError> {
    if state.is_initialized() {
        return Err(LedgerInitializationError::AlreadyInitialized);
    }
    if administrator.is_zero() {
        return Err(LedgerInitializationError::ZeroAdministratorAddress);
    }
    state.mark_initialized();
    state.capabilities.insert_administrator(administrator);
    kernel.log_event(LedgerEvent::CapabilityGranted(CapabilityGrantedEvent {
        capability: Capability::Administrator,
        account: administrator,
    }));
    Ok(())
}
