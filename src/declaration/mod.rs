//! Declarations: where in source text a symbol is declared.
//!
//! A [`Declaration`] is a (symbol, declaring node, range) triple. The range is
//! relative to the declaring node, which is the node the caller is anchored to
//! (e.g. the element under the cursor), not necessarily the node holding the
//! name.

mod builder;
mod diagnostics;
mod record;
mod symbol;
mod target;

pub use builder::DeclarationBuilder;
pub use diagnostics::{Inconsistency, InconsistencySink, NodeRole, RecordingSink, TracingSink};
pub use record::Declaration;
pub use symbol::{ElementSymbol, NodeSymbol, NodeSymbols, SymbolService};
pub use target::{DeclarationTarget, DeclaredTarget, ElementTarget, OpaqueTarget, TargetProjector};
