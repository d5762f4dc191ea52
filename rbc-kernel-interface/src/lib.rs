//! Boundary to the atomic execution environment: reserve kernel and
//! transaction execution interfaces.

pub mod error;
pub mod reserve_kernel_interface;
pub mod transaction_execution_interface;
