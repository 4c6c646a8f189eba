//! Error types for the mailbox view layer.

use thiserror::Error;

/// Errors that can occur while driving a session through [`Connection`](crate::Connection).
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while opening the transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The transport answered with a status other than `OK`.
    #[error("status was {status}")]
    BadReturnStatus {
        /// The literal status token returned by the transport.
        status: String,
    },

    /// A LIST response line did not have the `(<flags>) "<delimiter>" <name>` shape.
    #[error("unparsable LIST response: {line:?}")]
    UnparsableListing {
        /// The offending line.
        line: String,
    },

    /// A flag store was attempted on a mailbox opened read-only.
    #[error("mailbox {mailbox} is read-only")]
    ReadOnly {
        /// Name of the read-only mailbox.
        mailbox: String,
    },

    /// A passthrough operation was requested that the transport does not expose.
    #[error("no such operation: {name}")]
    AttributeNotFound {
        /// The requested operation name.
        name: String,
    },

    /// A passthrough operation was requested with the wrong number of arguments.
    #[error("{name} takes {expected} argument(s), got {got}")]
    InvalidArguments {
        /// The requested operation name.
        name: String,
        /// Number of arguments the operation takes.
        expected: usize,
        /// Number of arguments supplied.
        got: usize,
    },

    /// A SEARCH result token was not a valid message sequence number.
    #[error("invalid item number in SEARCH result: {token:?}")]
    InvalidItemNumber {
        /// The offending token.
        token: String,
    },

    /// A reply that has to carry data came back empty.
    #[error("empty {0} response")]
    EmptyPayload(&'static str),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
