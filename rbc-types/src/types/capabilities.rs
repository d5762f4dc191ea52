//! The capability kinds recognized by the ledger.

use std::fmt;

/// A named permission held by zero or more accounts. All three capabilities
/// are administered by holders of [`Capability::Administrator`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Capability {
    /// May grant and revoke capabilities and mutate the recipient directory.
    Administrator,
    /// May mint credits and deposit or withdraw reserve collateral.
    Operator,
    /// May receive reserve-currency payouts. Membership is mutated only
    /// through the recipient directory, never through the generic
    /// grant/revoke entry points.
    Recipient,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Administrator => write!(f, "administrator"),
            Capability::Operator => write!(f, "operator"),
            Capability::Recipient => write!(f, "recipient"),
        }
    }
}
