use super::Error;
use std::time::Duration;

/// Error when a transaction closure does not complete within its timeout.
#[derive(Debug)]
pub(super) struct TransactionTimedOut {
    duration: Duration,
}

impl std::error::Error for TransactionTimedOut {}

impl core::fmt::Display for TransactionTimedOut {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "transaction timed out after {:?}", self.duration)
    }
}

impl Error {
    /// Creates a transaction timeout error.
    pub fn transaction_timed_out(duration: Duration) -> Error {
        Error::from(super::ErrorKind::TransactionTimedOut(TransactionTimedOut {
            duration,
        }))
    }

    /// Returns `true` if this error is a transaction timeout error.
    pub fn is_transaction_timed_out(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TransactionTimedOut(_))
    }
}
