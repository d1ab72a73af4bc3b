//! Capabilities a syntax tree must provide to produce declarations.
//!
//! Declarations are computed against these traits only; [`DocNode`](super::DocNode)
//! is the rowan-backed implementation shipped with the crate, but any tree
//! that can answer these queries works.

use std::fmt;

use crate::base::{DocumentId, TextRange, TextSize};

/// A handle to a node of a source-code model.
pub trait TreeNode: Clone + fmt::Debug {
    /// Extent of the node within its document, or `None` when the node is no
    /// longer attached to the document's current tree.
    fn text_range(&self) -> Option<TextRange>;

    /// Length of the node's text. Available even for detached nodes.
    fn text_len(&self) -> TextSize;

    /// The document this node belongs to.
    fn document(&self) -> DocumentId;

    /// Identity comparison.
    ///
    /// Two distinct nodes covering the same range are NOT the same node.
    fn is_same_node(&self, other: &Self) -> bool;

    /// The name-owner capability, if this node has one.
    fn as_name_owner(&self) -> Option<&dyn NameOwner<Self>> {
        None
    }
}

/// A node that may carry a sub-node spanning just its name.
pub trait NameOwner<N> {
    /// The sub-node naming this node; `None` for anonymous elements.
    fn name_identifier(&self) -> Option<N>;
}
