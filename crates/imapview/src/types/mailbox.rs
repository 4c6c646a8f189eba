//! Mailbox listing types.

use std::collections::BTreeMap;

/// Mailboxes returned by one LIST call, keyed by name.
///
/// A name that appears twice in a response keeps the entry of its last line.
pub type MailboxListing = BTreeMap<String, ListEntry>;

/// Flags and hierarchy delimiter of one listed mailbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEntry {
    /// Raw space-separated flags, exactly as they appeared between the parentheses.
    pub flags: String,
    /// Hierarchy delimiter (usually one character, possibly empty).
    pub delimiter: String,
}

impl ListEntry {
    /// Creates a listing entry.
    #[must_use]
    pub fn new(flags: impl Into<String>, delimiter: impl Into<String>) -> Self {
        Self {
            flags: flags.into(),
            delimiter: delimiter.into(),
        }
    }

    /// Parses the raw flags into typed attributes.
    #[must_use]
    pub fn attributes(&self) -> Vec<MailboxAttribute> {
        self.flags
            .split_whitespace()
            .map(MailboxAttribute::parse)
            .collect()
    }

    /// Returns true if the mailbox carries the given attribute.
    #[must_use]
    pub fn has(&self, attribute: &MailboxAttribute) -> bool {
        self.attributes().contains(attribute)
    }

    /// Returns false for `\Noselect` mailboxes, which cannot be selected.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.has(&MailboxAttribute::NoSelect)
    }
}

/// Mailbox attributes from LIST response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MailboxAttribute {
    /// Mailbox cannot be selected.
    NoSelect,
    /// Mailbox cannot have children.
    NoInferiors,
    /// Mailbox has no children.
    HasNoChildren,
    /// Mailbox has children.
    HasChildren,
    /// Mailbox is marked for attention.
    Marked,
    /// Mailbox is not marked.
    Unmarked,
    // SPECIAL-USE mailbox attributes (RFC 6154)
    /// All messages (virtual mailbox).
    All,
    /// Mailbox is the archive folder.
    Archive,
    /// Mailbox is the drafts folder.
    Drafts,
    /// Flagged/starred messages (virtual mailbox).
    Flagged,
    /// Mailbox is the junk/spam folder.
    Junk,
    /// Mailbox is the sent folder.
    Sent,
    /// Mailbox is the trash folder.
    Trash,
    /// Unknown attribute.
    Unknown(String),
}

impl MailboxAttribute {
    /// Parses a mailbox attribute string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "\\NOSELECT" => Self::NoSelect,
            "\\NOINFERIORS" => Self::NoInferiors,
            "\\HASNOCHILDREN" => Self::HasNoChildren,
            "\\HASCHILDREN" => Self::HasChildren,
            "\\MARKED" => Self::Marked,
            "\\UNMARKED" => Self::Unmarked,
            "\\ALL" => Self::All,
            "\\ARCHIVE" => Self::Archive,
            "\\DRAFTS" => Self::Drafts,
            "\\FLAGGED" => Self::Flagged,
            "\\JUNK" | "\\SPAM" => Self::Junk,
            "\\SENT" => Self::Sent,
            "\\TRASH" => Self::Trash,
            _ => Self::Unknown(s.to_string()),
        }
    }
}
