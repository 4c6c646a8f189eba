//! # imapview
//!
//! Mailbox and message handles over a single blocking IMAP session.
//!
//! An IMAP session has one selected mailbox at a time. This crate lets you
//! hold many [`MailBox`] and [`Message`] views at once and re-selects the
//! right mailbox behind the scenes, only when the session currently has a
//! different one selected.
//!
//! ## Quick Start
//!
//! ```ignore
//! use imapview::{Config, Connection, StoreMode};
//!
//! let config = Config::builder("imap.example.com")
//!     .credentials("user@example.com", "password")
//!     .build();
//! let conn = Connection::connect(&MyConnector, &config)?;
//!
//! for (name, entry) in conn.list(None, Some("*"))? {
//!     println!("{name} ({})", entry.flags);
//! }
//!
//! let inbox = conn.select_inbox()?;
//! let archive = conn.select("Archive", true)?;
//!
//! // Re-selects INBOX, since Archive was selected last.
//! for message in inbox.search("UNSEEN", None)? {
//!     message.store("\\Seen", StoreMode::Add, false)?;
//! }
//! ```
//!
//! ## Layers
//!
//! ```text
//! Message ──▶ MailBox ──▶ Connection ──▶ Transport
//!   item        name,        selection     socket, TLS,
//!   number      read-only    cache         framing
//! ```
//!
//! The [`Transport`] is supplied by the caller; this crate never speaks the
//! wire protocol itself. Every reply is status-checked before its payload is
//! used.
//!
//! ## Threading
//!
//! A [`Connection`] is `!Sync`. Its views borrow it, so they cannot outlive
//! it or leave the thread that owns it.
//!
//! ## Modules
//!
//! - [`config`]: Connection configuration and the [`Connect`] seam
//! - [`parser`]: LIST response line parser
//! - [`status`]: Transport replies and status validation
//! - [`transport`]: The transport trait and forwardable commands
//! - [`types`]: Sequence numbers, listings, store modes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
mod connection;
mod error;
mod mailbox;
mod message;
pub mod parser;
pub mod status;
pub mod transport;
pub mod types;

#[cfg(test)]
mod mock;

pub use config::{Config, ConfigBuilder, Connect, Credentials, Security};
pub use connection::Connection;
pub use error::{Error, Result};
pub use mailbox::MailBox;
pub use message::Message;
pub use parser::{ListLine, parse_list_line};
pub use status::{Reply, ensure_ok};
pub use transport::{Passthrough, Transport};
pub use types::{INBOX, ListEntry, MailboxAttribute, MailboxListing, SeqNum, StoreMode};
