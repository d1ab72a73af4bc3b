//! Rowan-backed documents and node handles.
//!
//! A [`Document`] owns the current parse of one source text. Editing the text
//! reparses it and bumps the document revision; [`DocNode`] handles taken from
//! an older revision stay usable for identity and length queries but report no
//! text range, which is how detached nodes show up to declaration building.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use rowan::TokenAtOffset;
use smol_str::SmolStr;

use super::node::{NameOwner, TreeNode};
use crate::base::{DocumentId, TextRange, TextSize};
use crate::parser::{self, AstNode, Name, Parse, SyntaxError, SyntaxKind, SyntaxNode};

/// One source text and its current syntax tree.
pub struct Document {
    id: DocumentId,
    path: SmolStr,
    text: String,
    parse: Parse,
    root: SyntaxNode,
    live_revision: Rc<Cell<u32>>,
}

impl Document {
    pub fn new(id: DocumentId, path: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        let text = text.into();
        let parse = parser::parse(&text);
        let root = parse.syntax();
        Self {
            id,
            path: path.into(),
            text,
            parse,
            root,
            live_revision: Rc::new(Cell::new(0)),
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.parse.errors
    }

    /// Incremented on every [`set_text`](Self::set_text).
    pub fn revision(&self) -> u32 {
        self.live_revision.get()
    }

    /// Replace the text and reparse. Handles to the previous tree become stale.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.parse = parser::parse(&self.text);
        self.root = self.parse.syntax();
        self.live_revision.set(self.live_revision.get().wrapping_add(1));
    }

    /// The SOURCE_FILE node of the current revision.
    pub fn root(&self) -> DocNode {
        self.wrap(self.root.clone())
    }

    /// Innermost node covering `offset`.
    ///
    /// When the offset sits between two tokens, an identifier wins over
    /// punctuation or trivia so that a cursor right after a name still hits it.
    pub fn node_at(&self, offset: TextSize) -> Option<DocNode> {
        if offset > self.root.text_range().end() {
            return None;
        }
        let token = match self.root.token_at_offset(offset) {
            TokenAtOffset::None => return None,
            TokenAtOffset::Single(token) => token,
            TokenAtOffset::Between(left, right) => {
                if right.kind() != SyntaxKind::IDENT && left.kind() == SyntaxKind::IDENT {
                    left
                } else {
                    right
                }
            }
        };
        token.parent().map(|node| self.wrap(node))
    }

    /// Innermost name owner (package, definition, usage) covering `offset`.
    pub fn owner_at(&self, offset: TextSize) -> Option<DocNode> {
        self.node_at(offset)?
            .ancestors()
            .find(|node| node.kind().is_name_owner())
    }

    /// All name owners in preorder.
    pub fn owners(&self) -> impl Iterator<Item = DocNode> + '_ {
        self.root
            .descendants()
            .filter(|node| node.kind().is_name_owner())
            .map(|node| self.wrap(node))
    }

    fn wrap(&self, syntax: SyntaxNode) -> DocNode {
        DocNode {
            document: self.id,
            revision: self.live_revision.get(),
            live_revision: Rc::clone(&self.live_revision),
            syntax,
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("revision", &self.revision())
            .field("errors", &self.parse.errors.len())
            .finish()
    }
}

/// Handle to a node of a [`Document`] at a particular revision.
#[derive(Clone)]
pub struct DocNode {
    document: DocumentId,
    revision: u32,
    live_revision: Rc<Cell<u32>>,
    syntax: SyntaxNode,
}

impl DocNode {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }

    pub fn kind(&self) -> SyntaxKind {
        self.syntax.kind()
    }

    /// Revision of the document this handle was taken from.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// True once the owning document has been reparsed.
    pub fn is_stale(&self) -> bool {
        self.live_revision.get() != self.revision
    }

    pub fn parent(&self) -> Option<DocNode> {
        self.syntax.parent().map(|node| self.with_syntax(node))
    }

    /// This node and its ancestors, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = DocNode> + '_ {
        self.syntax.ancestors().map(|node| self.with_syntax(node))
    }

    /// The NAME child, if this node owns one.
    pub fn name(&self) -> Option<Name> {
        self.syntax.children().find_map(Name::cast)
    }

    /// Declared name of this node, unquoted.
    pub fn name_text(&self) -> Option<SmolStr> {
        self.name().and_then(|name| name.text())
    }

    /// Another node from the same tree, at this handle's revision.
    pub(crate) fn with_syntax(&self, syntax: SyntaxNode) -> DocNode {
        DocNode {
            document: self.document,
            revision: self.revision,
            live_revision: Rc::clone(&self.live_revision),
            syntax,
        }
    }
}

impl TreeNode for DocNode {
    fn text_range(&self) -> Option<TextRange> {
        (!self.is_stale()).then(|| self.syntax.text_range())
    }

    fn text_len(&self) -> TextSize {
        self.syntax.text_range().len()
    }

    fn document(&self) -> DocumentId {
        self.document
    }

    fn is_same_node(&self, other: &Self) -> bool {
        self.document == other.document
            && self.revision == other.revision
            && self.syntax == other.syntax
    }

    fn as_name_owner(&self) -> Option<&dyn NameOwner<Self>> {
        if self.kind().is_name_owner() {
            Some(self)
        } else {
            None
        }
    }
}

impl NameOwner<DocNode> for DocNode {
    fn name_identifier(&self) -> Option<DocNode> {
        self.syntax
            .children()
            .find(|child| child.kind() == SyntaxKind::NAME)
            .map(|name| self.with_syntax(name))
    }
}

impl PartialEq for DocNode {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_node(other)
    }
}

impl Eq for DocNode {}

impl fmt::Debug for DocNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}@{:?} in {} (rev {}{})",
            self.kind(),
            self.syntax.text_range(),
            self.document,
            self.revision,
            if self.is_stale() { ", stale" } else { "" }
        )
    }
}
