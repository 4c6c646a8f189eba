//! Core types shared by the connection and its mailbox views.

mod identifiers;
mod mailbox;
mod store;

pub use identifiers::SeqNum;
pub use mailbox::{ListEntry, MailboxAttribute, MailboxListing};
pub use store::StoreMode;

/// The mailbox selected when none is named.
pub const INBOX: &str = "INBOX";
