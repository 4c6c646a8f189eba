//! Transport reply status validation.
//!
//! Every transport call answers with a short status token and a payload.
//! Only the literal `OK` lets an operation proceed.

use crate::{Error, Result};

/// The status token that marks a successful transport call.
pub const OK: &str = "OK";

/// A transport reply: a status token plus the payload it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<T> {
    /// Status token (`OK`, `NO`, `BAD`, ...).
    pub status: String,
    /// Data returned alongside the status.
    pub payload: T,
}

impl<T> Reply<T> {
    /// Creates a reply with the given status.
    #[must_use]
    pub fn new(status: impl Into<String>, payload: T) -> Self {
        Self {
            status: status.into(),
            payload,
        }
    }

    /// Creates an `OK` reply.
    #[must_use]
    pub fn ok(payload: T) -> Self {
        Self::new(OK, payload)
    }

    /// Returns true if the status is `OK`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == OK
    }

    /// Validates the status and hands back the payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the status is not `OK`.
    pub fn into_ok(self) -> Result<T> {
        ensure_ok(&self.status)?;
        Ok(self.payload)
    }
}

/// Fails unless `status` is exactly `OK`.
///
/// # Errors
///
/// Returns [`Error::BadReturnStatus`] carrying the status for anything else,
/// including the empty string.
pub fn ensure_ok(status: &str) -> Result<()> {
    if status == OK {
        return Ok(());
    }
    tracing::warn!(status, "transport returned non-OK status");
    Err(Error::BadReturnStatus {
        status: status.to_string(),
    })
}
