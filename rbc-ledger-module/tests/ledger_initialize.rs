use assert_matches::assert_matches;
use kernel_stub::KernelStub;
use rbc_ledger_module::ledger_module::{self, LedgerInitializationError};
use rbc_ledger_module::ledger_state::LedgerState;
use rbc_types::types::capabilities::Capability;
use rbc_types::types::events::LedgerEvent;
use rbc_types::types::primitives::AccountAddress;

mod kernel_stub;

/// Test successful initialization.
#[test]
fn test_initialize() {
    let mut stub = KernelStub::new();
    let administrator = stub.create_account();
    let mut state = LedgerState::new();

    ledger_module::initialize(&mut state, &mut stub, administrator).expect("initialize");

    assert!(state.is_initialized());
    assert!(ledger_module::has_capability(
        &state,
        &administrator,
        Capability::Administrator
    ));
    assert_matches!(
        &stub.events[..],
        [LedgerEvent::CapabilityGranted(event)] => {
            assert_eq!(event.capability, Capability::Administrator);
            assert_eq!(event.account, administrator);
        }
    );
}

/// A second initialization attempt must be rejected.
#[test]
fn test_initialize_twice() {
    let mut stub = KernelStub::new();
    let (mut state, _administrator) = stub.init_ledger();
    let other = stub.create_account();

    let res = ledger_module::initialize(&mut state, &mut stub, other);

    assert_matches!(res, Err(LedgerInitializationError::AlreadyInitialized));
    assert!(!ledger_module::has_capability(
        &state,
        &other,
        Capability::Administrator
    ));
}

/// The initial administrator must be a non-zero address.
#[test]
fn test_initialize_zero_administrator() {
    let mut stub = KernelStub::new();
    let mut state = LedgerState::new();

    let res = ledger_module::initialize(&mut state, &mut stub, AccountAddress::ZERO);

    assert_matches!(
        res,
        Err(LedgerInitializationError::ZeroAdministratorAddress)
    );
    assert!(!state.is_initialized());
}
