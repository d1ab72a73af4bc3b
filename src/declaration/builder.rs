//! Building declarations from targets.
//!
//! The interesting part is [`DeclarationBuilder::relate_range`]: the name of a
//! target lives in some identifying node, while the caller is anchored to a
//! declaring node that may be the same node, an ancestor of it, or something
//! unrelated. The name range has to be re-expressed relative to the declaring
//! node, or rejected.

use std::fmt;

use super::diagnostics::{Inconsistency, InconsistencySink, NodeRole};
use super::record::Declaration;
use super::symbol::SymbolService;
use super::target::{DeclarationTarget, TargetProjector};
use crate::base::{TextRange, range_of_len, shift_left, shift_right};
use crate::syntax::{DocNode, TreeNode, Workspace};

/// Builds [`Declaration`]s from target nodes, node pairs and external targets.
///
/// Every constructor returns `None` when no declaration can be derived. Most of
/// the time that is ordinary absence (no name to point at). When it is caused
/// by an inconsistent tree, the reason also goes to the [`InconsistencySink`].
pub struct DeclarationBuilder<'a, N, S> {
    symbols: &'a S,
    projector: &'a dyn TargetProjector<N>,
    sink: &'a dyn InconsistencySink,
}

impl<'a> DeclarationBuilder<'a, DocNode, Workspace> {
    /// Builder over a workspace, which serves as both symbol service and projector.
    pub fn for_workspace(workspace: &'a Workspace, sink: &'a dyn InconsistencySink) -> Self {
        Self::new(workspace, workspace, sink)
    }
}

impl<'a, N, S> DeclarationBuilder<'a, N, S>
where
    N: TreeNode,
    S: SymbolService<N>,
{
    pub fn new(
        symbols: &'a S,
        projector: &'a dyn TargetProjector<N>,
        sink: &'a dyn InconsistencySink,
    ) -> Self {
        Self {
            symbols,
            projector,
            sink,
        }
    }

    /// Declaration for a target whose origin is unknown.
    ///
    /// The identifying node declares itself over its whole length. Targets
    /// without a name produce nothing.
    pub fn from_target(&self, target: &N) -> Option<Declaration<N, S::Symbol>> {
        let identifying = self.identifying_element_of(target)?;
        let range = range_of_len(identifying.text_len());
        Some(Declaration::new(
            self.symbols.as_symbol(target),
            identifying,
            range,
        ))
    }

    /// Declaration for `declared`, obtained from the node the caller is at.
    ///
    /// Without a name, the whole declaring node is the declaration range. With
    /// a name that cannot be related to the declaring node, there is no
    /// declaration at all.
    pub fn from_declared(
        &self,
        declared: &N,
        declaring: &N,
    ) -> Option<Declaration<N, S::Symbol>> {
        let range = match self.identifying_element_of(declared) {
            Some(identifying) => self.relate_range(
                declared,
                &identifying,
                range_of_len(identifying.text_len()),
                declaring,
            )?,
            None => range_of_len(declaring.text_len()),
        };
        Some(Declaration::new(
            self.symbols.as_symbol(declared),
            declaring.clone(),
            range,
        ))
    }

    /// Declaration for a target that is not a node of the tree.
    pub fn from_external_target(
        &self,
        target: &dyn DeclarationTarget<N>,
        declaring: &N,
    ) -> Option<Declaration<N, S::Symbol>> {
        let name = target
            .as_declared()
            .and_then(|declared| Some((declared.name_identifier_range()?, declared)));
        let range = match name {
            Some((name_range, declared)) => self.relate_range(
                &target,
                &declared.navigation_node(),
                name_range,
                declaring,
            )?,
            None => range_of_len(declaring.text_len()),
        };
        let node = self.projector.project(target, declaring);
        Some(Declaration::new(
            self.symbols.as_symbol(&node),
            declaring.clone(),
            range,
        ))
    }

    /// Express `range_in_identifying` relative to `declaring`.
    ///
    /// - Same node: the range is already in the right coordinate space and is
    ///   returned as given, unchecked.
    /// - Same document: shift into document offsets, require containment in
    ///   the declaring node, shift back relative to it.
    /// - Different documents: no relative range exists.
    ///
    /// `target` only describes the request in reports.
    pub fn relate_range(
        &self,
        target: &dyn fmt::Debug,
        identifying: &N,
        range_in_identifying: TextRange,
        declaring: &N,
    ) -> Option<TextRange> {
        if identifying.is_same_node(declaring) {
            return Some(range_in_identifying);
        }

        if identifying.document() != declaring.document() {
            self.report(Inconsistency::DocumentMismatch {
                target: format!("{target:?}"),
                identifying_document: identifying.document(),
                declaring_document: declaring.document(),
            });
            return None;
        }

        let identifying_range =
            self.attached_range(target, identifying, NodeRole::Identifying)?;
        let declaring_range = self.attached_range(target, declaring, NodeRole::Declaring)?;

        let in_document = shift_right(range_in_identifying, identifying_range.start());
        let relative = in_document
            .filter(|range| declaring_range.contains_range(*range))
            .and_then(|range| shift_left(range, declaring_range.start()));
        if relative.is_none() {
            self.report(Inconsistency::RangeOutsideDeclaring {
                target: format!("{target:?}"),
                identifying: format!("{identifying:?}"),
                declaring: format!("{declaring:?}"),
                range: in_document.unwrap_or(range_in_identifying),
                bounds: declaring_range,
            });
        }
        relative
    }

    /// The sub-node naming `node`, if it has a usable one.
    pub fn identifying_element_of(&self, node: &N) -> Option<N> {
        let identifying = node.as_name_owner()?.name_identifier()?;
        if identifying.text_range().is_none() {
            self.report(Inconsistency::DetachedNode {
                role: NodeRole::Identifying,
                target: format!("{node:?}"),
                element: format!("{identifying:?}"),
            });
            return None;
        }
        Some(identifying)
    }

    fn attached_range(
        &self,
        target: &dyn fmt::Debug,
        node: &N,
        role: NodeRole,
    ) -> Option<TextRange> {
        let range = node.text_range();
        if range.is_none() {
            self.report(Inconsistency::DetachedNode {
                role,
                target: format!("{target:?}"),
                element: format!("{node:?}"),
            });
        }
        range
    }

    fn report(&self, inconsistency: Inconsistency) {
        self.sink.report(inconsistency);
    }
}
