//! Types used in the externally facing API of the ledger.

pub mod capabilities;
pub mod events;
pub mod primitives;
pub mod queries;
