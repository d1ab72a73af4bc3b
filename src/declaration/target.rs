//! Declaration targets that are not syntax nodes themselves.
//!
//! Some subsystems hand out targets that only know *where* they are declared:
//! a navigation node plus, optionally, the range of the name inside it. Such
//! targets are projected onto the tree to obtain the symbol's node.

use std::fmt;

use smol_str::SmolStr;

use crate::base::{TextRange, shift_left};
use crate::parser::AstNode;
use crate::syntax::{DocNode, Workspace};

/// An opaque declaration target.
pub trait DeclarationTarget<N>: fmt::Debug {
    /// The declared-target capability, if this target knows its name range.
    fn as_declared(&self) -> Option<&dyn DeclaredTarget<N>> {
        None
    }
}

/// A target that knows where its name sits.
pub trait DeclaredTarget<N> {
    /// Range of the name, relative to [`navigation_node`](Self::navigation_node).
    fn name_identifier_range(&self) -> Option<TextRange>;

    fn navigation_node(&self) -> N;
}

/// Projects a target onto the tree the declaring node belongs to.
pub trait TargetProjector<N> {
    fn project(&self, target: &dyn DeclarationTarget<N>, context: &N) -> N;
}

/// A target pointing at an element of a workspace document.
#[derive(Debug, Clone)]
pub struct ElementTarget {
    element: DocNode,
    name_range: Option<TextRange>,
}

impl ElementTarget {
    pub fn new(element: DocNode, name_range: Option<TextRange>) -> Self {
        Self {
            element,
            name_range,
        }
    }

    /// Target for `element`, taking the name range from its NAME child.
    pub fn of(element: &DocNode) -> Self {
        let start = element.syntax().text_range().start();
        let name_range = element
            .name()
            .and_then(|name| shift_left(name.syntax().text_range(), start));
        Self::new(element.clone(), name_range)
    }

    pub fn element(&self) -> &DocNode {
        &self.element
    }
}

impl DeclarationTarget<DocNode> for ElementTarget {
    fn as_declared(&self) -> Option<&dyn DeclaredTarget<DocNode>> {
        Some(self)
    }
}

impl DeclaredTarget<DocNode> for ElementTarget {
    fn name_identifier_range(&self) -> Option<TextRange> {
        self.name_range
    }

    fn navigation_node(&self) -> DocNode {
        self.element.clone()
    }
}

/// A target with no location of its own, such as an implicit element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueTarget {
    label: SmolStr,
}

impl OpaqueTarget {
    pub fn new(label: impl Into<SmolStr>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<N> DeclarationTarget<N> for OpaqueTarget {}

impl TargetProjector<DocNode> for Workspace {
    /// Declared targets project to their navigation node. Anything else is
    /// represented by the innermost name owner around `context`.
    fn project(&self, target: &dyn DeclarationTarget<DocNode>, context: &DocNode) -> DocNode {
        if let Some(declared) = target.as_declared() {
            return declared.navigation_node();
        }
        context
            .ancestors()
            .find(|node| node.kind().is_name_owner())
            .unwrap_or_else(|| context.clone())
    }
}
