//! Types that are externally exposed by the reserve-backed credit ledger
//! as part of ledger execution and queries.
//!
//! The ledger core and the execution environment both depend on this crate;
//! it carries no business logic of its own.

pub mod types;
