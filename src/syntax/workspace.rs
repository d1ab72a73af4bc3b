//! A set of documents addressed by id and by path.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use thiserror::Error;

use super::document::{DocNode, Document};
use crate::base::{DocumentId, TextSize};

/// Errors from workspace mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("unknown document {0}")]
    UnknownDocument(DocumentId),
    #[error("document '{0}' is already open")]
    DuplicatePath(SmolStr),
    #[error("no document ids left")]
    IdsExhausted,
}

/// Open documents of a session.
///
/// Ids are handed out in sequence from a base (0 unless set with
/// [`Workspace::with_first_id`]) and are only unique within one workspace.
#[derive(Debug, Default)]
pub struct Workspace {
    documents: FxHashMap<DocumentId, Document>,
    paths: IndexMap<SmolStr, DocumentId>,
    next_id: u32,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// A workspace whose document ids start at `first`. Callers holding several
    /// workspaces give each a disjoint id range.
    pub fn with_first_id(first: u32) -> Self {
        Self {
            next_id: first,
            ..Self::default()
        }
    }

    /// Open a document and parse it.
    pub fn add_document(
        &mut self,
        path: impl Into<SmolStr>,
        text: impl Into<String>,
    ) -> Result<DocumentId, WorkspaceError> {
        let path = path.into();
        if self.paths.contains_key(&path) {
            return Err(WorkspaceError::DuplicatePath(path));
        }

        let id = DocumentId::new(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(WorkspaceError::IdsExhausted)?;

        let document = Document::new(id, path.clone(), text);
        tracing::debug!(
            %id,
            path = %path,
            errors = document.errors().len(),
            "opened document"
        );
        self.paths.insert(path, id);
        self.documents.insert(id, document);
        Ok(id)
    }

    /// Replace a document's text. Nodes taken before the edit become stale.
    pub fn set_text(
        &mut self,
        id: DocumentId,
        text: impl Into<String>,
    ) -> Result<(), WorkspaceError> {
        let document = self
            .documents
            .get_mut(&id)
            .ok_or(WorkspaceError::UnknownDocument(id))?;
        document.set_text(text);
        tracing::debug!(%id, revision = document.revision(), "reparsed document");
        Ok(())
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    pub fn document_by_path(&self, path: &str) -> Option<&Document> {
        self.paths.get(path).and_then(|id| self.documents.get(id))
    }

    /// Documents in the order they were opened.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.paths.values().filter_map(|id| self.documents.get(id))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn root(&self, id: DocumentId) -> Option<DocNode> {
        self.document(id).map(Document::root)
    }

    pub fn node_at(&self, id: DocumentId, offset: TextSize) -> Option<DocNode> {
        self.document(id)?.node_at(offset)
    }

    pub fn owner_at(&self, id: DocumentId, offset: TextSize) -> Option<DocNode> {
        self.document(id)?.owner_at(offset)
    }
}
