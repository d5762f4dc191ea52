//! Read-only queries over the ledger state and reserve.

use crate::ledger_module::ValidationError;
use crate::ledger_state::LedgerState;
use rbc_kernel_interface::reserve_kernel_interface::ReserveKernelQueries;
use rbc_types::types::capabilities::Capability;
use rbc_types::types::primitives::{AccountAddress, CollateralRatio, CreditAmount};
use rbc_types::types::queries::{RecipientInfo, RecipientPage};

/// Represents the reasons why a recipient query can fail.
#[derive(Debug, thiserror::Error)]
pub enum RecipientQueryError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub fn balance_of(state: &LedgerState, account: &AccountAddress) -> CreditAmount {
    state.balance_of(account)
}

pub fn total_supply(state: &LedgerState) -> CreditAmount {
    state.total_supply()
}

pub fn total_minted(state: &LedgerState) -> CreditAmount {
    state.total_minted()
}

pub fn total_burned(state: &LedgerState) -> CreditAmount {
    state.total_burned()
}

pub fn allowance(
    state: &LedgerState,
    owner: &AccountAddress,
    spender: &AccountAddress,
) -> CreditAmount {
    state.allowance(owner, spender)
}

pub fn has_capability(
    state: &LedgerState,
    account: &AccountAddress,
    capability: Capability,
) -> bool {
    state.has_capability(account, capability)
}

/// The reserve held by the ledger relative to the outstanding credit supply,
/// in fixed point where 1e18 is 100%. Defined as zero while no credits are
/// outstanding.
pub fn collateral_ratio(
    state: &LedgerState,
    kernel: &impl ReserveKernelQueries,
) -> CollateralRatio {
    let supply = state.total_supply();
    if supply.is_zero() {
        return CollateralRatio(0);
    }
    let reserve = kernel.reserve_balance();
    CollateralRatio(reserve.0 as u128 * CollateralRatio::HUNDRED_PERCENT.0 / supply.0 as u128)
}

/// Number of accounts currently in the recipient directory.
pub fn recipient_count(state: &LedgerState) -> u64 {
    state.directory.len() as u64
}

/// Directory entry for `account`, failing if it is not a recipient.
pub fn get_recipient(
    state: &LedgerState,
    account: &AccountAddress,
) -> Result<RecipientInfo, ValidationError> {
    state
        .directory
        .get(account)
        .cloned()
        .ok_or(ValidationError::RecipientNotFound(*account))
}

/// One page of the directory in its current enumeration order. Advancing the
/// cursor by the returned count from zero until an empty page visits every
/// current member exactly once; interleaved directory mutation may reorder
/// the tail between pages.
pub fn get_recipients(state: &LedgerState, cursor: u64, size: u64) -> RecipientPage {
    state.directory.page(cursor, size)
}

/// JSON object `{address, name, description}` for a single recipient.
pub fn recipient_json(
    state: &LedgerState,
    account: &AccountAddress,
) -> Result<String, RecipientQueryError> {
    let info = get_recipient(state, account)?;
    Ok(serde_json::to_string(&info)?)
}

/// JSON array of `{address, name, description}` objects for every current
/// recipient, in enumeration order.
pub fn recipients_json(state: &LedgerState) -> Result<String, RecipientQueryError> {
    Ok(serde_json::to_string(state.directory.all())?)
}
