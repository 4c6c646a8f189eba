//! Flag store modes.

/// How a STORE command combines the given flags with the existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreMode {
    /// Add the flags (`+FLAGS`).
    #[default]
    Add,
    /// Remove the flags (`-FLAGS`).
    Remove,
    /// Replace all flags (`FLAGS`).
    Replace,
}

impl StoreMode {
    /// Maps the short command prefix (`"+"`, `"-"` or `""`) to a mode.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "+" => Some(Self::Add),
            "-" => Some(Self::Remove),
            "" => Some(Self::Replace),
            _ => None,
        }
    }

    /// Builds the STORE data item name, e.g. `+FLAGS.SILENT`.
    #[must_use]
    pub fn command(self, silent: bool) -> String {
        let base = match self {
            Self::Add => "+FLAGS",
            Self::Remove => "-FLAGS",
            Self::Replace => "FLAGS",
        };
        if silent {
            format!("{base}.SILENT")
        } else {
            base.to_string()
        }
    }
}
