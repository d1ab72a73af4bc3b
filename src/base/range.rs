//! Translation of ranges between coordinate spaces.
//!
//! A range is either absolute (offsets into a document) or relative to the
//! start of some node. Moving between the two is a shift by the node's start
//! offset; all shifts here are checked and return `None` instead of panicking.

use text_size::{TextRange, TextSize};

/// Range of a node relative to itself: `[0, len)`.
pub fn range_of_len(len: TextSize) -> TextRange {
    TextRange::up_to(len)
}

/// Move `range` right by `by` (relative → absolute).
pub fn shift_right(range: TextRange, by: TextSize) -> Option<TextRange> {
    range.checked_add(by)
}

/// Move `range` left by `by` (absolute → relative).
pub fn shift_left(range: TextRange, by: TextSize) -> Option<TextRange> {
    range.checked_sub(by)
}
