use crate::change::{Change, ChangeTag};
use crate::operation::{Action, Operation};
use crate::operation_generator;

/// Equal runs at most this many characters wide may be absorbed into the
/// surrounding edits, so a change reads as one coherent span instead of
/// being visually fractured around a short unchanged word.
const MAX_MERGEABLE_CHARS: usize = 5;

/// Compute a change list between two token sequences
///
/// Runs the operation generator, materializes the covered token slices into
/// text, and joins edits across mergeable separator spans. A span whose two
/// sides materialize to the same text is reported as equal even when the
/// token boundaries differ. The resulting tuples tile both inputs:
/// concatenating the present `old_text`s reproduces the old token
/// concatenation, and likewise for `new_text`.
pub fn diff<O, N>(old_tokens: &[O], new_tokens: &[N]) -> Vec<Change>
where
    O: AsRef<str>,
    N: AsRef<str>,
{
    let old: Vec<&str> = old_tokens.iter().map(|t| t.as_ref()).collect();
    let new: Vec<&str> = new_tokens.iter().map(|t| t.as_ref()).collect();

    let operations = operation_generator::operations(&old, &new);
    let changes = materialize(&operations, &old, &new);
    // Fuse directly adjacent edits first so the separator pass only ever
    // sees canonical flank tags.
    let changes = fuse_adjacent(changes);
    join_across_separators(changes)
}

/// Extract the covered token slices for each operation
///
/// A replacement whose sides concatenate to the same string collapses to an
/// equal tuple; the sequences tokenized the same text differently.
fn materialize(operations: &[Operation], old: &[&str], new: &[&str]) -> Vec<Change> {
    operations
        .iter()
        .map(|operation| match operation.action {
            Action::Equal => Change::equal(old[operation.old_range()].concat()),
            Action::Insert => Change::insert(new[operation.new_range()].concat()),
            Action::Delete => Change::delete(old[operation.old_range()].concat()),
            Action::Replace => classify(
                old[operation.old_range()].concat(),
                new[operation.new_range()].concat(),
            ),
        })
        .collect()
}

/// Fuse directly adjacent edits and runs of equal tuples
///
/// A deletion directly followed by an insertion (or vice versa) becomes a
/// replacement: the deletion contributes the old text, the insertion the
/// new text. Adjacent equal tuples concatenate; they appear when a
/// replacement collapses to equal text between two matched spans. The
/// operation generator never emits two adjacent non-equal operations, so
/// the edit case only fires on operation lists built elsewhere.
fn fuse_adjacent(changes: Vec<Change>) -> Vec<Change> {
    let mut fused: Vec<Change> = Vec::with_capacity(changes.len());
    for mut change in changes {
        // A fused pair can itself collapse to equal text, so keep folding
        // into the previous tuple until the tags no longer combine.
        while let Some(previous) = fused.pop() {
            if previous.tag == ChangeTag::Equal && change.tag == ChangeTag::Equal {
                change = fuse_equal(previous, change);
            } else if previous.is_edit() && change.is_edit() {
                change = join_pair(previous, change);
            } else {
                fused.push(previous);
                break;
            }
        }
        fused.push(change);
    }
    fused
}

/// Join edits across mergeable separator spans, greedily left to right
///
/// For a triple `(left, separator, right)` with both flanks being edits,
/// the separator is consumed when it is mergeable and the flank tags are
/// joinable. A merged tuple can itself be the left or right flank of
/// another triple: merging can retag a flank and make a separator further
/// left consumable, so the fold keeps walking back down the stack. Leading
/// and trailing separators are never consumed; they have no flanking pair.
fn join_across_separators(changes: Vec<Change>) -> Vec<Change> {
    let mut joined: Vec<Change> = Vec::with_capacity(changes.len());
    for mut change in changes {
        while change.is_edit() && joined.len() >= 2 {
            let separator_ok = joined.last().is_some_and(is_mergeable_separator);
            let flank_ok = joined
                .get(joined.len() - 2)
                .is_some_and(|left| left.is_edit() && joinable(left.tag, change.tag));
            if !(separator_ok && flank_ok) {
                break;
            }
            if let (Some(separator), Some(left)) = (joined.pop(), joined.pop()) {
                change = join_triple(left, separator, change);
            }
        }
        push_change(&mut joined, change);
    }
    joined
}

/// Push onto the joined list, folding into a preceding equal tuple when a
/// merge collapsed to equal text
fn push_change(joined: &mut Vec<Change>, change: Change) {
    if change.tag == ChangeTag::Equal
        && joined
            .last()
            .is_some_and(|previous| previous.tag == ChangeTag::Equal)
    {
        if let Some(previous) = joined.pop() {
            joined.push(fuse_equal(previous, change));
            return;
        }
    }
    joined.push(change);
}

/// The flank tag pairs that merge across a separator
///
/// Only pairs involving at least one replacement join; plain same-tag pairs
/// (two insertions or two deletions) stay apart, as do opposing
/// insert/delete pairs.
fn joinable(left: ChangeTag, right: ChangeTag) -> bool {
    use ChangeTag::*;
    matches!(
        (left, right),
        (Replace, Replace) | (Replace, Insert) | (Insert, Replace) | (Replace, Delete) | (Delete, Replace)
    )
}

/// Whether an equal tuple may be consumed by a merge
///
/// A separator is mergeable when its text is all whitespace, or when it is
/// short enough that keeping it separate would fracture the surrounding
/// edit around a tiny unchanged word.
fn is_mergeable_separator(change: &Change) -> bool {
    if change.tag != ChangeTag::Equal {
        return false;
    }
    let text = change.old_text.as_deref().unwrap_or("");
    if text.is_empty() {
        return false;
    }
    text.chars().all(char::is_whitespace) || text.chars().count() <= MAX_MERGEABLE_CHARS
}

fn join_pair(left: Change, right: Change) -> Change {
    let old_text = concat_present(&[left.old_text.as_deref(), right.old_text.as_deref()]);
    let new_text = concat_present(&[left.new_text.as_deref(), right.new_text.as_deref()]);
    classify(old_text, new_text)
}

fn join_triple(left: Change, separator: Change, right: Change) -> Change {
    let old_text = concat_present(&[
        left.old_text.as_deref(),
        separator.old_text.as_deref(),
        right.old_text.as_deref(),
    ]);
    let new_text = concat_present(&[
        left.new_text.as_deref(),
        separator.new_text.as_deref(),
        right.new_text.as_deref(),
    ]);
    classify(old_text, new_text)
}

fn concat_present(parts: &[Option<&str>]) -> String {
    let mut text = String::new();
    for part in parts.iter().flatten() {
        text.push_str(part);
    }
    text
}

fn fuse_equal(left: Change, right: Change) -> Change {
    let mut text = left.old_text.unwrap_or_default();
    text.push_str(right.old_text.as_deref().unwrap_or(""));
    Change::equal(text)
}

/// Tag a tuple from its materialized content
///
/// A one-sided result is a plain insertion or deletion with the other side
/// absent; two identical sides are an equal tuple; anything else is a
/// replacement. This keeps the tag and null conventions intact after
/// merging: a replacement never carries two identical texts, and a join
/// that swallowed equal text on both sides can never drop either side's
/// contribution.
fn classify(old_text: String, new_text: String) -> Change {
    if old_text.is_empty() {
        Change::insert(new_text)
    } else if new_text.is_empty() {
        Change::delete(old_text)
    } else if old_text == new_text {
        Change::equal(old_text)
    } else {
        Change::replace(old_text, new_text)
    }
}
