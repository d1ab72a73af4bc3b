//! Syntax-tree capabilities and the rowan-backed document model.
//!
//! - [`TreeNode`], [`NameOwner`] - what declaration building needs from a tree
//! - [`Document`], [`DocNode`] - revisioned documents over the rowan CST
//! - [`Workspace`] - open documents by id and path

mod document;
mod node;
mod workspace;

pub use document::{DocNode, Document};
pub use node::{NameOwner, TreeNode};
pub use workspace::{Workspace, WorkspaceError};
