//! Document identifiers.

use std::fmt;

/// Identity of a document in a workspace.
///
/// Two nodes belong to the same document exactly when their `DocumentId`s are equal.
/// Ids are unique only within the workspace that issued them, so nodes taken
/// from different workspaces must not be compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(u32);

/// Syster calls documents files everywhere else.
pub type FileId = DocumentId;

impl DocumentId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw index of this document.
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl From<u32> for DocumentId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}
