use std::collections::HashMap;

use assert_matches::assert_matches;
use rbc_executor::execution::{self, ExecutionContext};
use rbc_kernel_interface::error::ReserveTransferFailedError;
use rbc_kernel_interface::reserve_kernel_interface::{
    ReserveKernelOperations, ReserveKernelQueries,
};
use rbc_ledger_module::ledger_module::{self, LedgerUpdateError};
use rbc_ledger_module::ledger_state::LedgerState;
use rbc_types::types::capabilities::Capability;
use rbc_types::types::events::LedgerEvent;
use rbc_types::types::primitives::{AccountAddress, CreditAmount, ReserveAmount};

/// Minimal reserve kernel for exercising the execution wrapper.
#[derive(Debug, Default)]
struct ReserveStub {
    ledger_reserve: ReserveAmount,
    accounts: HashMap<AccountAddress, ReserveAmount>,
    events: Vec<LedgerEvent>,
    reject_transfers: bool,
}

impl ReserveKernelQueries for ReserveStub {
    fn reserve_balance(&self) -> ReserveAmount {
        self.ledger_reserve
    }
}

impl ReserveKernelOperations for ReserveStub {
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

fn account(tag: u8) -> AccountAddress {
    AccountAddress([tag; 20])
}

/// A ledger with a funded holder, an approved spender and one recipient.
fn payment_fixture(stub: &mut ReserveStub) -> LedgerState {
    let mut state = LedgerState::new();
    ledger_module::initialize(&mut state, stub, account(1)).expect("initialize");
    let administrator = ExecutionContext::with_sender(account(1));
    ledger_module::grant_capability(
        &mut state,
        stub,
        &administrator,
        Capability::Operator,
        account(2),
    )
    .expect("grant operator");
    ledger_module::mint(
        &mut state,
        stub,
        &ExecutionContext::with_sender(account(2)),
        account(3),
        CreditAmount(50),
    )
    .expect("mint");
    ledger_module::approve(
        &mut state,
        stub,
        &ExecutionContext::with_sender(account(3)),
        account(4),
        CreditAmount(50),
    )
    .expect("approve");
    ledger_module::add_recipients(
        &mut state,
        stub,
        &administrator,
        &[account(5)],
        &["Payee".to_string()],
        &["A payee".to_string()],
    )
    .expect("add recipient");
    stub.ledger_reserve = ReserveAmount(50);
    stub.events.clear();
    state
}

/// A rejected payout rolls the whole payment back: the burn is undone, the
/// allowance restored and no event reaches the kernel.
#[test]
fn test_rollback_on_rejected_payout() {
    let mut stub = ReserveStub::default();
    let mut state = payment_fixture(&mut stub);
    stub.reject_transfers = true;

    let spender = ExecutionContext::with_sender(account(4));
    let res = execution::execute(&mut state, &mut stub, |state, kernel| {
        ledger_module::transfer_from(
            state,
            kernel,
            &spender,
            account(3),
            account(5),
            CreditAmount(50),
        )
    });

    assert_matches!(res, Err(LedgerUpdateError::TransferFailure(_)));
    assert_eq!(ledger_module::balance_of(&state, &account(3)), CreditAmount(50));
    assert_eq!(ledger_module::total_burned(&state), CreditAmount(0));
    assert_eq!(ledger_module::total_supply(&state), CreditAmount(50));
    assert_eq!(
        ledger_module::allowance(&state, &account(3), &account(4)),
        CreditAmount(50)
    );
    assert!(stub.events.is_empty());
}

/// A successful operation commits its state changes and forwards its events.
#[test]
fn test_commit_forwards_events() {
    let mut stub = ReserveStub::default();
    let mut state = payment_fixture(&mut stub);

    let spender = ExecutionContext::with_sender(account(4));
    execution::execute(&mut state, &mut stub, |state, kernel| {
        ledger_module::transfer_from(
            state,
            kernel,
            &spender,
            account(3),
            account(5),
            CreditAmount(50),
        )
    })
    .expect("payment");

    assert_eq!(ledger_module::balance_of(&state, &account(3)), CreditAmount(0));
    assert_eq!(ledger_module::total_burned(&state), CreditAmount(50));
    assert_eq!(stub.accounts[&account(5)], ReserveAmount(50));
    assert_matches!(&stub.events[..], [LedgerEvent::Paid(_)]);
}

/// A rejected operation leaves previously committed state untouched.
#[test]
fn test_rejected_operation_preserves_prior_commits() {
    let mut stub = ReserveStub::default();
    let mut state = payment_fixture(&mut stub);

    let operator = ExecutionContext::with_sender(account(2));
    execution::execute(&mut state, &mut stub, |state, kernel| {
        ledger_module::mint(state, kernel, &operator, account(6), CreditAmount(10))
    })
    .expect("mint");

    let res = execution::execute(&mut state, &mut stub, |state, kernel| {
        ledger_module::mint(state, kernel, &operator, account(6), CreditAmount(0))
    });

    assert_matches!(res, Err(LedgerUpdateError::Validation(_)));
    assert_eq!(ledger_module::balance_of(&state, &account(6)), CreditAmount(10));
}

/// The execution context carries the attached reserve value through to
/// value-bearing operations.
#[test]
fn test_attached_value_deposit() {
    let mut stub = ReserveStub::default();
    let mut state = payment_fixture(&mut stub);
    // The environment credits attached value before the operation runs.
    stub.ledger_reserve = ReserveAmount(stub.ledger_reserve.0 + 200);

    let operator = ExecutionContext::with_attached_value(account(2), ReserveAmount(200));
    execution::execute(&mut state, &mut stub, |state, kernel| {
        ledger_module::deposit_collateral(state, kernel, &operator)
    })
    .expect("deposit");

    assert_matches!(
        stub.events.last(),
        Some(LedgerEvent::CollateralDeposited(event)) => {
            assert_eq!(event.amount, ReserveAmount(200));
        }
    );
}
