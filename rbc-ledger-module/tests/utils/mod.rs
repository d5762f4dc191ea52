use rbc_ledger_module::ledger_state::LedgerState;

/// Assert the supply conservation invariant:
/// `total_supply == total_minted − total_burned == Σ balances`.
pub fn assert_supply_invariant(state: &LedgerState) {
    let balance_sum: u64 = state.account_balances().map(|(_, amount)| amount.0).sum();
    assert_eq!(state.total_supply().0, balance_sum);
    assert_eq!(
        state.total_supply().0,
        state.total_minted().0 - state.total_burned().0
    );
}
