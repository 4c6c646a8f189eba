//! The connection: sole owner of the transport and of the selection state.
//!
//! An IMAP session has exactly one selected mailbox at a time, yet callers
//! may hold any number of [`MailBox`] and [`Message`](crate::Message) views
//! on different mailboxes. The connection remembers which mailbox the server
//! last selected; views compare their own name against it and re-select
//! through [`Connection::switch_to`] only on a mismatch.
//!
//! The state sits behind a [`RefCell`], so views share a plain `&Connection`
//! and the connection is `!Sync`. A switch-then-operate sequence therefore
//! can never interleave with another thread's.

use std::cell::{Ref, RefCell};
use std::fmt::Display;
use std::io;

use crate::config::{Config, Connect};
use crate::mailbox::MailBox;
use crate::parser::parse_list_line;
use crate::status::Reply;
use crate::transport::{Passthrough, Transport};
use crate::types::{INBOX, ListEntry, MailboxListing, StoreMode};
use crate::{Error, Result};

struct State<T> {
    transport: T,
    mailbox: String,
    read_only: bool,
}

/// A blocking IMAP session with a cached selection state.
pub struct Connection<T: Transport> {
    state: RefCell<State<T>>,
}

// Manual Debug implementation since transports needn't implement Debug
impl<T: Transport> std::fmt::Debug for Connection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Connection")
            .field("mailbox", &state.mailbox)
            .field("read_only", &state.read_only)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Connection<T> {
    /// Wraps a transport. The cache starts out as a writable `INBOX`.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            state: RefCell::new(State {
                transport,
                mailbox: INBOX.to_string(),
                read_only: false,
            }),
        }
    }

    /// Wraps a transport and logs in immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if LOGIN fails.
    pub fn with_login(transport: T, user: &str, password: &str) -> Result<Self> {
        let connection = Self::new(transport);
        connection.login(user, password)?;
        Ok(connection)
    }

    /// Opens a transport through `connector` and logs in if `config` carries credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if connecting fails, or the LOGIN error.
    pub fn connect<C>(connector: &C, config: &Config) -> Result<Self>
    where
        C: Connect<Transport = T>,
    {
        tracing::info!(host = %config.host, port = config.port, "connecting");
        let transport = connector.connect(config)?;
        match &config.credentials {
            Some(credentials) => {
                Self::with_login(transport, &credentials.user, &credentials.password)
            }
            None => Ok(Self::new(transport)),
        }
    }

    /// Returns the name of the mailbox the server currently has selected.
    #[must_use]
    pub fn current_mailbox(&self) -> String {
        self.state.borrow().mailbox.clone()
    }

    /// Returns true if the current mailbox was opened with EXAMINE.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.state.borrow().read_only
    }

    /// Borrows the underlying transport.
    ///
    /// The borrow must be released before the next operation on this connection.
    #[must_use]
    pub fn transport(&self) -> Ref<'_, T> {
        Ref::map(self.state.borrow(), |state| &state.transport)
    }

    /// Consumes the connection and returns the transport.
    #[must_use]
    pub fn into_transport(self) -> T {
        self.state.into_inner().transport
    }

    /// Authenticates and returns the server's success text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the server refuses the login.
    pub fn login(&self, user: &str, password: &str) -> Result<String> {
        tracing::debug!(user, "LOGIN");
        let payload = self.call(|t| t.login(user, password))?;
        payload
            .into_iter()
            .next()
            .ok_or(Error::EmptyPayload("LOGIN"))
    }

    /// Lists mailboxes matching `pattern` under `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the command fails, or
    /// [`Error::UnparsableListing`] for the first malformed line.
    pub fn list(&self, reference: Option<&str>, pattern: Option<&str>) -> Result<MailboxListing> {
        tracing::debug!(?reference, ?pattern, "LIST");
        let lines = self.call(|t| t.list(reference, pattern))?;

        let mut listing = MailboxListing::new();
        for line in &lines {
            let parsed = parse_list_line(line)?;
            listing.insert(parsed.name, ListEntry::new(parsed.flags, parsed.delimiter));
        }
        Ok(listing)
    }

    /// Selects `mailbox` and returns a view bound to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the mailbox cannot be selected.
    pub fn select(&self, mailbox: &str, read_only: bool) -> Result<MailBox<'_, T>> {
        self.switch_to(mailbox, read_only)?;
        Ok(MailBox::new(self, mailbox, read_only))
    }

    /// Selects `INBOX` for writing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the mailbox cannot be selected.
    pub fn select_inbox(&self) -> Result<MailBox<'_, T>> {
        self.select(INBOX, false)
    }

    /// Issues SELECT (or EXAMINE) and records the result in the cache.
    ///
    /// This always round-trips, even when `mailbox` is already selected.
    /// Views skip the call on a name match; see [`MailBox::ensure_selected`].
    /// On failure the cache keeps describing the previous selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the server refuses.
    pub fn switch_to(&self, mailbox: &str, read_only: bool) -> Result<()> {
        if read_only {
            tracing::debug!(mailbox, "EXAMINE");
        } else {
            tracing::debug!(mailbox, "SELECT");
        }
        self.call(|t| t.select(mailbox, read_only))?;

        let mut state = self.state.borrow_mut();
        mailbox.clone_into(&mut state.mailbox);
        state.read_only = read_only;
        Ok(())
    }

    /// Searches the selected mailbox and returns item numbers in server order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the search fails.
    pub fn search(&self, criteria: &str, charset: Option<&str>) -> Result<Vec<String>> {
        tracing::debug!(criteria, ?charset, "SEARCH");
        let payload = self.call(|t| t.search(charset, criteria))?;
        Ok(payload
            .first()
            .map(|ids| ids.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default())
    }

    /// Fetches `parts` for the given items. The payload is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the fetch fails.
    pub fn fetch<I>(&self, items: I, parts: &[&str]) -> Result<T::Fetched>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let set = join(items, ",");
        let command = format!("({})", parts.join(" "));
        tracing::debug!(%set, %command, "FETCH");
        self.call(|t| t.fetch(&set, &command))
    }

    /// Stores `flags` on each item, one STORE per item, and collects the results in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] for the first item the server
    /// refuses; the remaining items are not attempted.
    pub fn store<I>(
        &self,
        items: I,
        flags: &str,
        mode: StoreMode,
        silent: bool,
    ) -> Result<Vec<T::Stored>>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let command = mode.command(silent);
        items
            .into_iter()
            .map(|item| {
                let item = item.to_string();
                tracing::debug!(%item, %command, flags, "STORE");
                self.call(|t| t.store(&item, &command, flags))
            })
            .collect()
    }

    /// Forwards a command the connection does not model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the transport refuses it.
    pub fn passthrough(&self, command: &Passthrough) -> Result<Vec<String>> {
        tracing::debug!(command = command.name(), "passthrough");
        self.call(|t| t.execute(command))
    }

    /// Forwards a command looked up by its prefixed name, e.g. `_noop`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AttributeNotFound`] for names without the `_` prefix
    /// or outside the forwardable set, and otherwise as [`Self::passthrough`].
    pub fn passthrough_named(&self, name: &str, args: &[&str]) -> Result<Vec<String>> {
        self.passthrough(&Passthrough::from_name(name, args)?)
    }

    fn call<P>(&self, op: impl FnOnce(&mut T) -> io::Result<Reply<P>>) -> Result<P> {
        let reply = {
            let mut state = self.state.borrow_mut();
            op(&mut state.transport)?
        };
        reply.into_ok()
    }
}

fn join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
