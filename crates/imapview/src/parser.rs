//! LIST response line parser.
//!
//! The transport hands LIST results back as raw lines of the form
//!
//! ```text
//! (<flags>) "<delimiter>" <name>
//! ```
//!
//! where `<name>` may itself be quoted. Matching is anchored at the start of
//! the line and never crosses a line break. The flags group is the shortest
//! parenthesised prefix for which the rest still matches, and the delimiter is
//! the longest quoted run that is followed by `" `.

use crate::{Error, Result};

/// One parsed LIST line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLine {
    /// Raw flags between the parentheses (possibly empty).
    pub flags: String,
    /// Hierarchy delimiter between the quotes.
    pub delimiter: String,
    /// Mailbox name with one pair of surrounding quotes removed.
    pub name: String,
}

/// Parses one raw LIST response line.
///
/// # Errors
///
/// Returns [`Error::UnparsableListing`] carrying the line if it does not have
/// the `(<flags>) "<delimiter>" <name>` shape.
pub fn parse_list_line(line: &str) -> Result<ListLine> {
    let Some((flags, delimiter, name)) = split_list_line(line) else {
        tracing::warn!(line, "unparsable LIST response");
        return Err(Error::UnparsableListing {
            line: line.to_string(),
        });
    };

    Ok(ListLine {
        flags: flags.to_string(),
        delimiter: delimiter.to_string(),
        name: unquote(name).to_string(),
    })
}

fn split_list_line(line: &str) -> Option<(&str, &str, &str)> {
    let rest = line.strip_prefix('(')?;
    let head = rest.split('\n').next().unwrap_or_default();
    let head = head.strip_suffix('\r').unwrap_or(head);

    for (close, _) in head.match_indices(") \"") {
        let after = &head[close + 3..];
        if let Some(end) = after.rfind("\" ") {
            return Some((&head[..close], &after[..end], &after[end + 2..]));
        }
    }
    None
}

fn unquote(name: &str) -> &str {
    let name = name.strip_prefix('"').unwrap_or(name);
    name.strip_suffix('"').unwrap_or(name)
}
