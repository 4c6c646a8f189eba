//! The session capability the connection drives.
//!
//! A [`Transport`] owns the socket, the TLS layer and IMAP framing. This crate
//! never looks inside it: each method issues one command, blocks until the
//! tagged completion arrives and hands back the status token with whatever
//! data the command produced.

use std::io;

use crate::status::Reply;
use crate::{Error, Result};

/// Prefix marking an operation name as a request to forward to the transport.
pub const PASSTHROUGH_PREFIX: char = '_';

/// A blocking IMAP session.
///
/// Every method returns `Err` only for transport-level failures (a broken
/// socket, a timeout). Server-side refusals come back as a [`Reply`] whose
/// status is not `OK`.
pub trait Transport {
    /// Payload of a FETCH command. Opaque to this crate.
    type Fetched;
    /// Payload of a STORE command for one item. Opaque to this crate.
    type Stored;

    /// Authenticates with LOGIN. The payload starts with the server's greeting text.
    fn login(&mut self, user: &str, password: &str) -> io::Result<Reply<Vec<String>>>;

    /// Issues LIST. The payload holds one raw line per mailbox.
    fn list(
        &mut self,
        reference: Option<&str>,
        pattern: Option<&str>,
    ) -> io::Result<Reply<Vec<String>>>;

    /// Issues SELECT, or EXAMINE when `read_only` is set.
    fn select(&mut self, mailbox: &str, read_only: bool) -> io::Result<Reply<Vec<String>>>;

    /// Issues SEARCH. The first payload element holds the space-separated item numbers.
    fn search(&mut self, charset: Option<&str>, criteria: &str)
    -> io::Result<Reply<Vec<String>>>;

    /// Issues FETCH for a sequence set with a parenthesised item list.
    fn fetch(&mut self, set: &str, items: &str) -> io::Result<Reply<Self::Fetched>>;

    /// Issues STORE for a single item.
    fn store(&mut self, item: &str, command: &str, flags: &str)
    -> io::Result<Reply<Self::Stored>>;

    /// Issues a command this crate does not model itself.
    ///
    /// Transports that do not support a command should answer `BAD`.
    fn execute(&mut self, command: &Passthrough) -> io::Result<Reply<Vec<String>>> {
        Ok(Reply::new("BAD", vec![format!("{} not supported", command.name())]))
    }
}

/// Commands that can be forwarded to the transport untouched.
///
/// Commands that change the selected mailbox (SELECT, EXAMINE, CLOSE,
/// UNSELECT) are deliberately absent: only the connection may select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Passthrough {
    /// NOOP.
    Noop,
    /// CAPABILITY.
    Capability,
    /// CHECK.
    Check,
    /// EXPUNGE on the selected mailbox.
    Expunge,
    /// LOGOUT.
    Logout,
    /// CREATE a mailbox.
    Create {
        /// Mailbox to create.
        mailbox: String,
    },
    /// DELETE a mailbox.
    Delete {
        /// Mailbox to delete.
        mailbox: String,
    },
    /// RENAME a mailbox.
    Rename {
        /// Existing name.
        from: String,
        /// New name.
        to: String,
    },
    /// SUBSCRIBE to a mailbox.
    Subscribe {
        /// Mailbox to subscribe to.
        mailbox: String,
    },
    /// UNSUBSCRIBE from a mailbox.
    Unsubscribe {
        /// Mailbox to unsubscribe from.
        mailbox: String,
    },
    /// STATUS of a mailbox that need not be selected.
    Status {
        /// Mailbox to query.
        mailbox: String,
        /// Parenthesised status items, e.g. `(MESSAGES UNSEEN)`.
        items: String,
    },
    /// COPY messages from the selected mailbox.
    Copy {
        /// Sequence set.
        set: String,
        /// Destination mailbox.
        mailbox: String,
    },
}

impl Passthrough {
    /// Returns the operation name, lowercase, without the passthrough prefix.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::Capability => "capability",
            Self::Check => "check",
            Self::Expunge => "expunge",
            Self::Logout => "logout",
            Self::Create { .. } => "create",
            Self::Delete { .. } => "delete",
            Self::Rename { .. } => "rename",
            Self::Subscribe { .. } => "subscribe",
            Self::Unsubscribe { .. } => "unsubscribe",
            Self::Status { .. } => "status",
            Self::Copy { .. } => "copy",
        }
    }

    /// Returns true if the command operates on the currently selected mailbox.
    #[must_use]
    pub const fn needs_selection(&self) -> bool {
        matches!(self, Self::Check | Self::Expunge | Self::Copy { .. })
    }

    /// Returns true if the command modifies the selected mailbox.
    #[must_use]
    pub const fn modifies_selection(&self) -> bool {
        matches!(self, Self::Expunge)
    }

    /// Resolves a prefixed operation name such as `_noop` or `_create`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AttributeNotFound`] if the name lacks the `_` prefix or
    /// names no forwardable command, and [`Error::InvalidArguments`] if the
    /// argument count does not fit the command.
    pub fn from_name(name: &str, args: &[&str]) -> Result<Self> {
        let not_found = || Error::AttributeNotFound {
            name: name.to_string(),
        };
        let bare = name.strip_prefix(PASSTHROUGH_PREFIX).ok_or_else(not_found)?;

        let expected = match bare {
            "noop" | "capability" | "check" | "expunge" | "logout" => 0,
            "create" | "delete" | "subscribe" | "unsubscribe" => 1,
            "rename" | "status" | "copy" => 2,
            _ => return Err(not_found()),
        };
        if args.len() != expected {
            return Err(Error::InvalidArguments {
                name: name.to_string(),
                expected,
                got: args.len(),
            });
        }

        let arg = |i: usize| args[i].to_string();
        Ok(match bare {
            "noop" => Self::Noop,
            "capability" => Self::Capability,
            "check" => Self::Check,
            "expunge" => Self::Expunge,
            "logout" => Self::Logout,
            "create" => Self::Create { mailbox: arg(0) },
            "delete" => Self::Delete { mailbox: arg(0) },
            "subscribe" => Self::Subscribe { mailbox: arg(0) },
            "unsubscribe" => Self::Unsubscribe { mailbox: arg(0) },
            "rename" => Self::Rename {
                from: arg(0),
                to: arg(1),
            },
            "status" => Self::Status {
                mailbox: arg(0),
                items: arg(1),
            },
            "copy" => Self::Copy {
                set: arg(0),
                mailbox: arg(1),
            },
            _ => return Err(not_found()),
        })
    }
}
