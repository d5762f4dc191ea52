//! Implementation of the reserve-backed credit ledger.
//!
//! The ledger keeps fungible credit balances that are redeemable 1:1 for a
//! reserve currency held by the ledger itself, payable only to an enumerable
//! directory of authorized recipients. All operations run against
//! [`ledger_state::LedgerState`] together with an implementation of the
//! reserve kernel boundary; the surrounding execution environment is expected
//! to commit or roll back each operation atomically.

mod capability_registry;
mod recipient_directory;

pub mod ledger_module;
pub mod ledger_state;
