use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The tag of a change tuple
///
/// The four tag characters `=`, `+`, `-` and `!` are stable and part of the
/// public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChangeTag {
    /// Text present and identical in both versions
    #[display(fmt = "=")]
    Equal,

    /// Text only present in the new version
    #[display(fmt = "+")]
    Insert,

    /// Text only present in the old version
    #[display(fmt = "-")]
    Delete,

    /// Text that differs between the versions
    #[display(fmt = "!")]
    Replace,
}

impl ChangeTag {
    /// The ASCII character for this tag
    pub fn as_char(&self) -> char {
        match self {
            ChangeTag::Equal => '=',
            ChangeTag::Insert => '+',
            ChangeTag::Delete => '-',
            ChangeTag::Replace => '!',
        }
    }
}

/// A user-visible diff span with materialized text
///
/// For `=` both texts are present and equal, for `+` only `new_text` is
/// present, for `-` only `old_text`, and for `!` both are present and
/// differ. Concatenating the present `old_text`s over a change list
/// reproduces the old token concatenation, and likewise for `new_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Change {
    /// The tag of this change
    pub tag: ChangeTag,

    /// The covered text in the old version, if any
    pub old_text: Option<String>,

    /// The covered text in the new version, if any
    pub new_text: Option<String>,
}

impl Change {
    /// Create an unchanged span
    pub fn equal(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            tag: ChangeTag::Equal,
            old_text: Some(text.clone()),
            new_text: Some(text),
        }
    }

    /// Create an insertion
    pub fn insert(new_text: impl Into<String>) -> Self {
        Self {
            tag: ChangeTag::Insert,
            old_text: None,
            new_text: Some(new_text.into()),
        }
    }

    /// Create a deletion
    pub fn delete(old_text: impl Into<String>) -> Self {
        Self {
            tag: ChangeTag::Delete,
            old_text: Some(old_text.into()),
            new_text: None,
        }
    }

    /// Create a replacement
    pub fn replace(old_text: impl Into<String>, new_text: impl Into<String>) -> Self {
        Self {
            tag: ChangeTag::Replace,
            old_text: Some(old_text.into()),
            new_text: Some(new_text.into()),
        }
    }

    /// Whether this change is an insertion, deletion or replacement
    pub fn is_edit(&self) -> bool {
        self.tag != ChangeTag::Equal
    }

    /// View this change as a `(tag, old_text, new_text)` tuple
    pub fn as_tuple(&self) -> (char, Option<&str>, Option<&str>) {
        (
            self.tag.as_char(),
            self.old_text.as_deref(),
            self.new_text.as_deref(),
        )
    }
}
