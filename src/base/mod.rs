//! Foundation types for syster-decl.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`DocumentId`] - Interned document identifiers
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - Range translation helpers between node-relative and document coordinates
//!
//! This module has NO dependencies on other syster-decl modules.

mod file_id;
mod range;

pub use file_id::{DocumentId, FileId};
pub use range::{range_of_len, shift_left, shift_right};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
