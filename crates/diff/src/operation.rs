use derive_more::Display;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of edit an operation describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// The covered tokens are identical in both versions
    #[display(fmt = "Equal")]
    Equal,

    /// The covered tokens only exist in the new version
    #[display(fmt = "Insert")]
    Insert,

    /// The covered tokens only exist in the old version
    #[display(fmt = "Delete")]
    Delete,

    /// The covered tokens were replaced by different ones
    #[display(fmt = "Replace")]
    Replace,
}

/// An aligned span over the old and new token sequences
///
/// Operations are produced by the operation generator as half-open ranges
/// into both sequences. Taken in order they tile each sequence exactly once:
/// consecutive operations are end-to-end in both coordinates, the first
/// starts at (0, 0) and the last ends at (old_len, new_len).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Operation {
    /// The kind of edit
    pub action: Action,

    /// Start of the covered range in the old sequence (inclusive)
    pub start_in_old: usize,

    /// End of the covered range in the old sequence (exclusive)
    pub end_in_old: usize,

    /// Start of the covered range in the new sequence (inclusive)
    pub start_in_new: usize,

    /// End of the covered range in the new sequence (exclusive)
    pub end_in_new: usize,
}

impl Operation {
    /// Create a new operation from its action and both ranges
    pub fn new(
        action: Action,
        old_range: Range<usize>,
        new_range: Range<usize>,
    ) -> Self {
        Self {
            action,
            start_in_old: old_range.start,
            end_in_old: old_range.end,
            start_in_new: new_range.start,
            end_in_new: new_range.end,
        }
    }

    /// The covered range in the old sequence
    pub fn old_range(&self) -> Range<usize> {
        self.start_in_old..self.end_in_old
    }

    /// The covered range in the new sequence
    pub fn new_range(&self) -> Range<usize> {
        self.start_in_new..self.end_in_new
    }

    /// Number of old tokens covered
    pub fn old_len(&self) -> usize {
        self.end_in_old - self.start_in_old
    }

    /// Number of new tokens covered
    pub fn new_len(&self) -> usize {
        self.end_in_new - self.start_in_new
    }
}
