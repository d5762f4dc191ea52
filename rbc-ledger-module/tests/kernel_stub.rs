use std::collections::HashMap;

use rbc_kernel_interface::error::ReserveTransferFailedError;
use rbc_kernel_interface::reserve_kernel_interface::{
    ReserveKernelOperations, ReserveKernelQueries,
};
use rbc_kernel_interface::transaction_execution_interface::TransactionExecution;
use rbc_ledger_module::ledger_module;
use rbc_ledger_module::ledger_state::LedgerState;
use rbc_types::types::capabilities::Capability;
use rbc_types::types::events::LedgerEvent;
use rbc_types::types::primitives::{AccountAddress, ReserveAmount};

/// Reserve kernel stub providing an implementation of
/// [`ReserveKernelOperations`] and methods for configuring the reserve state
/// seen by the ledger.
#[derive(Debug, Default)]
pub struct KernelStub {
    /// Reserve currency held by the ledger itself.
    pub ledger_reserve: ReserveAmount,
    /// Reserve currency balances of external accounts.
    pub accounts: HashMap<AccountAddress, ReserveAmount>,
    /// Events logged by executed operations.
    pub events: Vec<LedgerEvent>,
    /// When set, every reserve transfer is rejected.
    pub reject_transfers: bool,
    next_account: u64,
}

impl KernelStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh, non-zero account address.
    pub fn create_account(&mut self) -> AccountAddress {
        self.next_account += 1;
        let mut bytes = [0u8; 20];
        bytes[..8].copy_from_slice(&self.next_account.to_be_bytes());
        AccountAddress(bytes)
    }

    /// Set the reserve currency held by the ledger.
    pub fn set_reserve(&mut self, amount: ReserveAmount) {
        self.ledger_reserve = amount;
    }

    /// Reserve currency balance of an external account.
    pub fn account_reserve(&self, account: &AccountAddress) -> ReserveAmount {
        self.accounts.get(account).copied().unwrap_or_default()
    }

    /// Create an initialized ledger, returning its state and administrator.
    /// The event log is cleared so test assertions start from a clean slate.
    pub fn init_ledger(&mut self) -> (LedgerState, AccountAddress) {
        let administrator = self.create_account();
        let mut state = LedgerState::new();
        ledger_module::initialize(&mut state, self, administrator).expect("initialize");
        self.events.clear();
        (state, administrator)
    }

    /// Create an initialized ledger with an operator already granted.
    pub fn init_ledger_with_operator(
        &mut self,
    ) -> (LedgerState, AccountAddress, AccountAddress) {
        let (mut state, administrator) = self.init_ledger();
        let operator = self.create_account();
        ledger_module::grant_capability(
            &mut state,
            self,
            &TransactionExecutionTestImpl::with_sender(administrator),
            Capability::Operator,
            operator,
        )
        .expect("grant operator");
        self.events.clear();
        (state, administrator, operator)
    }
}

impl ReserveKernelQueries for KernelStub {
    fn reserve_balance(&self) -> ReserveAmount {
        self.ledger_reserve
    }
}

impl ReserveKernelOperations for KernelStub {
    fn transfer_reserve(
        &mut self,
        to: &AccountAddress,
        amount: ReserveAmount,
    ) -> Result<(), ReserveTransferFailedError> {
        if self.reject_transfers {
            return Err(ReserveTransferFailedError { to: *to, amount });
        }
        let held = self
            .ledger_reserve
            .checked_sub(amount)
            .ok_or(ReserveTransferFailedError { to: *to, amount })?;
        self.ledger_reserve = held;
        let balance = self.accounts.entry(*to).or_default();
        *balance = ReserveAmount(balance.0 + amount.0);
        Ok(())
    }

    fn log_event(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}

/// Transaction execution context stub.
#[derive(Debug, Clone, Copy)]
pub struct TransactionExecutionTestImpl {
    sender: AccountAddress,
    attached_value: ReserveAmount,
}

impl TransactionExecutionTestImpl {
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

impl TransactionExecution for TransactionExecutionTestImpl {
    fn sender_address(&self) -> AccountAddress {
        self.sender
    }

    fn attached_value(&self) -> ReserveAmount {
        self.attached_value
    }
}

// Tests for the kernel stub

/// Test that created accounts are distinct and non-zero.
#[test]
fn test_create_account() {
    let mut stub = KernelStub::new();
    let account1 = stub.create_account();
    let account2 = stub.create_account();
    assert!(!account1.is_zero());
    assert_ne!(account1, account2);
}

/// Test the stub's reserve transfer bookkeeping.
#[test]
fn test_stub_transfer_reserve() {
    let mut stub = KernelStub::new();
    let destination = stub.create_account();
    stub.set_reserve(ReserveAmount(100));

    stub.transfer_reserve(&destination, ReserveAmount(40))
        .expect("transfer");
    assert_eq!(stub.reserve_balance(), ReserveAmount(60));
    assert_eq!(stub.account_reserve(&destination), ReserveAmount(40));

    stub.transfer_reserve(&destination, ReserveAmount(100))
        .expect_err("transfer above held reserve");
}
