//! Inconsistency reports.
//!
//! Declaration building never fails loudly. When the tree it is handed is
//! inconsistent (a detached node, a name range escaping its declaring node,
//! nodes from two different documents) it reports the problem to an
//! [`InconsistencySink`] and produces no declaration.

use std::fmt;

use parking_lot::Mutex;
use thiserror::Error;

use crate::base::{DocumentId, TextRange};

/// Which side of a declaration a node was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Identifying,
    Declaring,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Identifying => f.write_str("identifying element"),
            NodeRole::Declaring => f.write_str("declaring element"),
        }
    }
}

/// A model inconsistency met while building a declaration.
///
/// Node and target descriptions are their `Debug` renderings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Inconsistency {
    #[error("{role} has no text range;\ntarget: {target};\n{role}: {element}")]
    DetachedNode {
        role: NodeRole,
        target: String,
        element: String,
    },

    #[error(
        "identifying range {range:?} is outside of declaring range {bounds:?};\n\
         target: {target};\nidentifying element: {identifying};\ndeclaring element: {declaring}"
    )]
    RangeOutsideDeclaring {
        target: String,
        identifying: String,
        declaring: String,
        range: TextRange,
        bounds: TextRange,
    },

    #[error(
        "identifying element document differs from declaring element document;\n\
         target: {target};\nidentifying element document: {identifying_document};\n\
         declaring element document: {declaring_document}"
    )]
    DocumentMismatch {
        target: String,
        identifying_document: DocumentId,
        declaring_document: DocumentId,
    },
}

impl Inconsistency {
    /// Short stable name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Inconsistency::DetachedNode { .. } => "detached_node",
            Inconsistency::RangeOutsideDeclaring { .. } => "range_outside_declaring",
            Inconsistency::DocumentMismatch { .. } => "document_mismatch",
        }
    }
}

/// Receives inconsistency reports. Must not panic.
pub trait InconsistencySink: Send + Sync {
    fn report(&self, inconsistency: Inconsistency);
}

/// Logs every report at `error` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl InconsistencySink for TracingSink {
    fn report(&self, inconsistency: Inconsistency) {
        tracing::error!(kind = inconsistency.kind(), "{inconsistency}");
    }
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<Inconsistency>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports so far.
    pub fn reports(&self) -> Vec<Inconsistency> {
        self.reports.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Drain the reports.
    pub fn take(&self) -> Vec<Inconsistency> {
        std::mem::take(&mut *self.reports.lock())
    }
}

impl InconsistencySink for RecordingSink {
    fn report(&self, inconsistency: Inconsistency) {
        tracing::trace!(kind = inconsistency.kind(), "recorded inconsistency");
        self.reports.lock().push(inconsistency);
    }
}
