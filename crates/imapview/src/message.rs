//! Single-message views.

use crate::mailbox::MailBox;
use crate::transport::Transport;
use crate::types::{SeqNum, StoreMode};
use crate::{Error, Result};

/// One message of a mailbox, addressed by its sequence number.
///
/// The handle goes stale once the server renumbers the mailbox (after an
/// EXPUNGE, for instance). Nothing checks for that.
pub struct Message<'c, T: Transport> {
    mailbox: MailBox<'c, T>,
    item: SeqNum,
}

impl<T: Transport> Clone for Message<'_, T> {
    fn clone(&self) -> Self {
        Self {
            mailbox: self.mailbox.clone(),
            item: self.item,
        }
    }
}

impl<T: Transport> std::fmt::Debug for Message<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Message")
            .field("mailbox", &self.mailbox.name())
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}

impl<'c, T: Transport> Message<'c, T> {
    pub(crate) const fn new(mailbox: MailBox<'c, T>, item: SeqNum) -> Self {
        Self { mailbox, item }
    }

    /// Returns the sequence number.
    #[must_use]
    pub const fn item(&self) -> SeqNum {
        self.item
    }

    /// Returns the mailbox view this message belongs to.
    #[must_use]
    pub const fn mailbox(&self) -> &MailBox<'c, T> {
        &self.mailbox
    }

    /// Fetches `parts` of this message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadReturnStatus`] if the select or fetch fails.
    pub fn fetch(&self, parts: &[&str]) -> Result<T::Fetched> {
        self.mailbox.fetch([self.item], parts)
    }

    /// Stores `flags` on this message and returns the server's answer for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadOnly`] if the mailbox view is read-only, otherwise
    /// as [`MailBox::store`].
    pub fn store(&self, flags: &str, mode: StoreMode, silent: bool) -> Result<T::Stored> {
        self.mailbox
            .store([self.item], flags, mode, silent)?
            .into_iter()
            .next()
            .ok_or(Error::EmptyPayload("STORE"))
    }
}
