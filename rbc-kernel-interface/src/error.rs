use rbc_types::types::primitives::{AccountAddress, ReserveAmount};

/// The execution environment rejected a reserve-currency transfer. The
/// containing ledger operation must be aborted in its entirety.
#[derive(Debug, thiserror::Error)]
#[error("Reserve transfer of {amount} to {to} was rejected")]
pub struct ReserveTransferFailedError {
    /// Destination of the rejected transfer.
    pub to: AccountAddress,
    /// Amount of the rejected transfer.
    pub amount: ReserveAmount,
}
