//! Declarations at a cursor and per document.

use crate::base::{DocumentId, TextRange, TextSize, shift_right};
use crate::declaration::{Declaration, DeclarationBuilder, ElementSymbol};
use crate::parser::AstNode;
use crate::syntax::{DocNode, TreeNode, Workspace};

/// A declaration over workspace documents.
pub type WorkspaceDeclaration = Declaration<DocNode, ElementSymbol>;

/// The declaration whose name is under the cursor.
///
/// The innermost name owner around `offset` declares itself, but only when
/// the cursor is on its name; a cursor in the owner's body or on its type
/// reference yields nothing.
///
/// # Arguments
/// * `workspace` - The open documents
/// * `builder` - Builder whose sink receives inconsistency reports
/// * `file` - The document containing the cursor
/// * `offset` - Cursor offset (bytes from the start of the document)
pub fn declaration_at(
    workspace: &Workspace,
    builder: &DeclarationBuilder<'_, DocNode, Workspace>,
    file: DocumentId,
    offset: TextSize,
) -> Option<WorkspaceDeclaration> {
    let owner = workspace.owner_at(file, offset)?;
    let name_range = owner.name()?.syntax().text_range();
    if !name_range.contains_inclusive(offset) {
        return None;
    }

    let declaration = builder.from_declared(&owner, &owner)?;
    tracing::trace!(
        %file,
        offset = u32::from(offset),
        range = ?declaration.declaration_range(),
        "declaration at cursor"
    );
    Some(declaration)
}

/// Every named element of a document, each declared by its NAME node.
pub fn document_declarations(
    workspace: &Workspace,
    builder: &DeclarationBuilder<'_, DocNode, Workspace>,
    file: DocumentId,
) -> Vec<WorkspaceDeclaration> {
    let Some(document) = workspace.document(file) else {
        return Vec::new();
    };
    document
        .owners()
        .filter_map(|owner| builder.from_target(&owner))
        .collect()
}

/// Absolute document range of a declaration.
pub fn absolute_range(declaration: &WorkspaceDeclaration) -> Option<TextRange> {
    let start = declaration.declaring_node().text_range()?.start();
    shift_right(declaration.declaration_range(), start)
}
