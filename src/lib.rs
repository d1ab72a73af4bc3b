//! # syster-decl
//!
//! Declaration records for SysML syntax trees: which symbol is declared, the
//! node the caller is anchored to, and the range of the name relative to that
//! node.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide          → declarations at a cursor, per document
//!   ↓
//! declaration  → DeclarationBuilder, range relation, inconsistency reports
//!   ↓
//! syntax       → TreeNode/NameOwner capabilities, rowan-backed documents
//!   ↓
//! parser       → Logos lexer, recursive-descent parser, typed AST
//!   ↓
//! base         → Primitives (DocumentId, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → declaration → ide)
// ============================================================================

/// Foundation types: DocumentId, TextRange, range shifting
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// Syntax: node capabilities and the document model
pub mod syntax;

/// Declarations: builder, records, targets, inconsistency reporting
pub mod declaration;

/// IDE features: declaration at cursor, document declarations
pub mod ide;

// Re-export foundation types
pub use base::{DocumentId, FileId, TextRange, TextSize};
pub use declaration::{Declaration, DeclarationBuilder};
