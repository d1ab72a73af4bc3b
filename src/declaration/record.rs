//! The declaration record.

use crate::base::TextRange;

/// Where a symbol is declared: the node the caller is anchored to and the
/// range of the declared name inside it.
///
/// `declaration_range` is relative to the start of `declaring_node` and lies
/// within `[0, declaring_node.text_len()]`; it is never an absolute document
/// offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<N, S> {
    symbol: S,
    declaring_node: N,
    declaration_range: TextRange,
}

impl<N, S> Declaration<N, S> {
    pub(crate) fn new(symbol: S, declaring_node: N, declaration_range: TextRange) -> Self {
        Self {
            symbol,
            declaring_node,
            declaration_range,
        }
    }

    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    pub fn declaring_node(&self) -> &N {
        &self.declaring_node
    }

    pub fn declaration_range(&self) -> TextRange {
        self.declaration_range
    }

    pub fn into_parts(self) -> (S, N, TextRange) {
        (self.symbol, self.declaring_node, self.declaration_range)
    }
}
