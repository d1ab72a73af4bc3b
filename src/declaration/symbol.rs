//! Turning target nodes into symbols.

use smol_str::SmolStr;

use crate::parser::SyntaxKind;
use crate::syntax::{DocNode, Workspace};

/// Adapts a target node to the symbol it declares.
pub trait SymbolService<N> {
    type Symbol;

    fn as_symbol(&self, node: &N) -> Self::Symbol;
}

/// Symbol service that uses the node itself as the symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeSymbols;

/// A symbol identified by its target node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSymbol<N>(N);

impl<N> NodeSymbol<N> {
    pub fn node(&self) -> &N {
        &self.0
    }
}

impl<N: Clone> SymbolService<N> for NodeSymbols {
    type Symbol = NodeSymbol<N>;

    fn as_symbol(&self, node: &N) -> NodeSymbol<N> {
        NodeSymbol(node.clone())
    }
}

/// A model element of a workspace document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSymbol {
    node: DocNode,
    kind: SyntaxKind,
    name: Option<SmolStr>,
}

impl ElementSymbol {
    pub fn node(&self) -> &DocNode {
        &self.node
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    /// Declared name; `None` for anonymous elements and non-owner nodes.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl SymbolService<DocNode> for Workspace {
    type Symbol = ElementSymbol;

    fn as_symbol(&self, node: &DocNode) -> ElementSymbol {
        ElementSymbol {
            node: node.clone(),
            kind: node.kind(),
            name: node.name_text(),
        }
    }
}
