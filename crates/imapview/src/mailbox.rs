//! Mailbox views.

use std::fmt::Display;

use crate::connection::Connection;
use crate::message::Message;
use crate::transport::{Passthrough, Transport};
use crate::types::{SeqNum, StoreMode};
use crate::{Error, Result};

/// A named mailbox on a shared [`Connection`].
///
/// Several views may exist on one connection. Each makes sure its own
/// mailbox is the selected one before talking to the server.
pub struct MailBox<'c, T: Transport> {
    connection: &'c Connection<T>,
    name: String,
    read_only: bool,
}

// Derived Clone would require T: Clone
impl<T: Transport> Clone for MailBox<'_, T> {
    fn clone(&self) -> Self {
        Self {
            connection: self.connection,
            name: self.name.clone(),
            read_only: self.read_only,
        }
    }
}

impl<T: Transport> std::fmt::Debug for MailBox<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailBox")
            .field("name", &self.name)
            .field("read_only", &self.read_only)
            .finish_non_exhaustive()
    }
}

impl<'c, T: Transport> MailBox<'c, T> {
    pub(crate) fn new(connection: &'c Connection<T>, name: &str, read_only: bool) -> Self {
        Self {
            connection,
            name: name.to_string(),
            read_only,
        }
    }

    /// Returns the mailbox name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if this view refuses flag stores.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns the connection this view talks through.
    #[must_use]
    pub const fn connection(&self) -> &'c Connection<T> {
        self.connection
    }

    /// Re-selects this mailbox if the connection has another one selected.
    ///
    /// Only the name is compared. A connection that already has this
    /// mailbox selected with a different read-only mode is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the re-select fails.
    pub fn ensure_selected(&self) -> Result<()> {
        if self.connection.current_mailbox() == self.name {
            tracing::trace!(mailbox = %self.name, "already selected");
            return Ok(());
        }
        self.connection.switch_to(&self.name, self.read_only)
    }

    /// Builds a handle for a known item number without searching.
    #[must_use]
    pub fn message(&self, item: SeqNum) -> Message<'c, T> {
        Message::new(self.clone(), item)
    }

    /// Searches this mailbox and returns one handle per match, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the search fails and
    /// [`Error::InvalidItemNumber`] if the server answers with a non-numeric id.
    pub fn search(&self, criteria: &str, charset: Option<&str>) -> Result<Vec<Message<'c, T>>> {
        self.ensure_selected()?;
        self.connection
            .search(criteria, charset)?
            .iter()
            .map(|id| id.parse().map(|item| self.message(item)))
            .collect()
    }

    /// Fetches `parts` for the given items of this mailbox.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the select or fetch fails.
    pub fn fetch<I>(&self, items: I, parts: &[&str]) -> Result<T::Fetched>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.ensure_selected()?;
        self.connection.fetch(items, parts)
    }

    /// Stores `flags` on each of the given items.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnly`] without contacting the server if this view
    /// is read-only, otherwise as [`Connection::store`].
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
        self.check_writable()?;
        self.ensure_selected()?;
        self.connection.store(items, flags, mode, silent)
    }

    /// Forwards a command with this mailbox selected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnly`] for EXPUNGE on a read-only view, otherwise
    /// as [`Connection::passthrough`].
    pub fn passthrough(&self, command: &Passthrough) -> Result<Vec<String>> {
        if command.modifies_selection() {
            self.check_writable()?;
        }
        if command.needs_selection() {
            self.ensure_selected()?;
        }
        self.connection.passthrough(command)
    }

    fn check_writable(&self) -> Result<()> {
        if self.read_only {
            return Err(Error::ReadOnly {
                mailbox: self.name.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mock::{Call, MockTransport};

    fn connection_with_ids(ids: &str) -> Connection<MockTransport> {
        let mut transport = MockTransport::default();
        transport.search_ids = ids.to_string();
        Connection::new(transport)
    }

    #[test]
    fn matching_name_skips_select() {
        let conn = connection_with_ids("");
        let inbox = conn.select_inbox().unwrap();
        inbox.search("ALL", None).unwrap();
        inbox.fetch([1], &["FLAGS"]).unwrap();
        assert_eq!(conn.transport().selects(), 1);
    }

    #[test]
    fn switching_between_views_reselects_once() {
        let conn = connection_with_ids("4");
        let inbox = conn.select_inbox().unwrap();
        let archive = conn.select("Archive", true).unwrap();
        assert_eq!(conn.transport().selects(), 2);

        inbox.search("ALL", None).unwrap();
        assert_eq!(conn.transport().selects(), 3);
        assert_eq!(conn.current_mailbox(), "INBOX");

        inbox.search("UNSEEN", None).unwrap();
        assert_eq!(conn.transport().selects(), 3);

        archive.fetch([4], &["UID"]).unwrap();
        assert_eq!(conn.transport().selects(), 4);
        assert_eq!(conn.current_mailbox(), "Archive");
        assert!(conn.is_read_only());
    }

    #[test]
    fn reselect_uses_view_read_only_mode() {
        let conn = connection_with_ids("");
        let archive = conn.select("Archive", true).unwrap();
        conn.switch_to("INBOX", false).unwrap();

        archive.search("ALL", None).unwrap();
        let examines = conn
            .transport()
            .calls
            .iter()
            .filter(|c| **c == Call::Select("Archive".to_string(), true))
            .count();
        assert_eq!(examines, 2);
    }

    #[test]
    fn search_wraps_ids_in_messages() {
        let conn = connection_with_ids("2 7 11");
        let inbox = conn.select_inbox().unwrap();
        let items: Vec<u32> = inbox
            .search("ALL", None)
            .unwrap()
            .iter()
            .map(|m| m.item().get())
            .collect();
        assert_eq!(items, vec![2, 7, 11]);
    }

    #[test]
    fn search_rejects_non_numeric_ids() {
        let conn = connection_with_ids("1 x");
        let inbox = conn.select_inbox().unwrap();
        assert!(matches!(
            inbox.search("ALL", None),
            Err(Error::InvalidItemNumber { token }) if token == "x"
        ));
    }

    #[test]
    fn read_only_store_never_reaches_transport() {
        let conn = connection_with_ids("");
        let archive = conn.select("Archive", true).unwrap();
        conn.switch_to("INBOX", false).unwrap();
        let before = conn.transport().calls.len();

        let result = archive.store([1], r"\Seen", StoreMode::Add, false);
        assert!(matches!(result, Err(Error::ReadOnly { mailbox }) if mailbox == "Archive"));
        assert_eq!(conn.transport().calls.len(), before);
        assert_eq!(conn.transport().stores(), 0);
    }

    #[test]
    fn read_only_is_enforced_regardless_of_connection_mode() {
        let conn = connection_with_ids("");
        let view = conn.select("INBOX", true).unwrap();
        conn.switch_to("INBOX", false).unwrap();
        assert!(!conn.is_read_only());
        assert!(matches!(
            view.store([1], r"\Deleted", StoreMode::Add, false),
            Err(Error::ReadOnly { .. })
        ));
    }

    #[test]
    fn writable_store_delegates() {
        let conn = connection_with_ids("");
        let inbox = conn.select_inbox().unwrap();
        let results = inbox
            .store(["5"], r"\Flagged", StoreMode::Replace, false)
            .unwrap();
        assert_eq!(results, vec![r"5 FLAGS \Flagged".to_string()]);
    }

    #[test]
    fn expunge_requires_writable_view() {
        let conn = connection_with_ids("");
        let archive = conn.select("Archive", true).unwrap();
        assert!(matches!(
            archive.passthrough(&Passthrough::Expunge),
            Err(Error::ReadOnly { .. })
        ));

        let inbox = conn.select_inbox().unwrap();
        conn.switch_to("Archive", true).unwrap();
        inbox.passthrough(&Passthrough::Expunge).unwrap();
        assert_eq!(conn.current_mailbox(), "INBOX");
    }

    #[test]
    fn unselected_passthrough_keeps_selection() {
        let conn = connection_with_ids("");
        let archive = conn.select("Archive", true).unwrap();
        conn.switch_to("INBOX", false).unwrap();
        archive.passthrough(&Passthrough::Noop).unwrap();
        assert_eq!(conn.current_mailbox(), "INBOX");
    }
}
