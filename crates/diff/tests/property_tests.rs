use html_diff::{diff, generate_operations, Action, Change, ChangeTag};
use proptest::prelude::*;

/// Tokens drawn from a small pool so sequences share plenty of content:
/// words, whitespace runs, an entity reference and a tag
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("apple".to_string()),
        Just("banana".to_string()),
        Just("fox".to_string()),
        Just("jumps".to_string()),
        Just("x".to_string()),
        Just(" ".to_string()),
        Just("  ".to_string()),
        Just("\t".to_string()),
        Just("&#8364;".to_string()),
        Just("<b>".to_string()),
    ]
}

fn tokens_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token_strategy(), 0..40)
}

fn is_mergeable_separator(change: &Change) -> bool {
    if change.tag != ChangeTag::Equal {
        return false;
    }
    let text = change.old_text.as_deref().unwrap_or("");
    !text.is_empty()
        && (text.chars().all(char::is_whitespace) || text.chars().count() <= 5)
}

fn joinable(left: ChangeTag, right: ChangeTag) -> bool {
    left == ChangeTag::Replace || right == ChangeTag::Replace
}

proptest! {
    /// Operations tile both sequences exactly once and adjacent operations
    /// have distinct actions
    #[test]
    fn prop_operations_tile_both_sequences(
        old_tokens in tokens_strategy(),
        new_tokens in tokens_strategy(),
    ) {
        let operations = generate_operations(&old_tokens, &new_tokens);

        let mut pos_in_old = 0;
        let mut pos_in_new = 0;
        let mut previous_action = None;
        for operation in &operations {
            prop_assert_eq!(operation.start_in_old, pos_in_old);
            prop_assert_eq!(operation.start_in_new, pos_in_new);
            prop_assert_ne!(previous_action, Some(operation.action));
            pos_in_old = operation.end_in_old;
            pos_in_new = operation.end_in_new;
            previous_action = Some(operation.action);
        }
        prop_assert_eq!(pos_in_old, old_tokens.len());
        prop_assert_eq!(pos_in_new, new_tokens.len());
    }

    /// Equal operations cover element-wise equal slices; every other action
    /// has the range shape its kind requires
    #[test]
    fn prop_operation_shapes_are_valid(
        old_tokens in tokens_strategy(),
        new_tokens in tokens_strategy(),
    ) {
        let operations = generate_operations(&old_tokens, &new_tokens);

        for operation in &operations {
            match operation.action {
                Action::Equal => {
                    prop_assert_eq!(operation.old_len(), operation.new_len());
                    prop_assert!(operation.old_len() > 0);
                    prop_assert_eq!(
                        &old_tokens[operation.old_range()],
                        &new_tokens[operation.new_range()],
                    );
                }
                Action::Insert => {
                    prop_assert_eq!(operation.old_len(), 0);
                    prop_assert!(operation.new_len() > 0);
                }
                Action::Delete => {
                    prop_assert!(operation.old_len() > 0);
                    prop_assert_eq!(operation.new_len(), 0);
                }
                Action::Replace => {
                    prop_assert!(operation.old_len() > 0);
                    prop_assert!(operation.new_len() > 0);
                }
            }
        }
    }

    /// Concatenating the present texts over the change list reproduces both
    /// inputs
    #[test]
    fn prop_changes_round_trip(
        old_tokens in tokens_strategy(),
        new_tokens in tokens_strategy(),
    ) {
        let changes = diff(&old_tokens, &new_tokens);

        let old_joined: String = changes
            .iter()
            .filter_map(|change| change.old_text.as_deref())
            .collect();
        let new_joined: String = changes
            .iter()
            .filter_map(|change| change.new_text.as_deref())
            .collect();

        prop_assert_eq!(old_joined, old_tokens.concat());
        prop_assert_eq!(new_joined, new_tokens.concat());
    }

    /// Diffing a sequence with itself yields nothing or one equal span
    #[test]
    fn prop_self_diff_is_single_equal_span(tokens in tokens_strategy()) {
        let changes = diff(&tokens, &tokens);

        if tokens.is_empty() {
            prop_assert!(changes.is_empty());
        } else {
            prop_assert_eq!(changes.len(), 1);
            prop_assert_eq!(changes[0].tag, ChangeTag::Equal);
            let concatenated = tokens.concat();
            prop_assert_eq!(changes[0].old_text.as_deref(), Some(concatenated.as_str()));
        }
    }

    /// No two adjacent change tuples share a tag, and every tuple honors
    /// the null convention for its tag
    #[test]
    fn prop_change_tags_are_well_formed(
        old_tokens in tokens_strategy(),
        new_tokens in tokens_strategy(),
    ) {
        let changes = diff(&old_tokens, &new_tokens);

        let mut previous_tag = None;
        for change in &changes {
            prop_assert_ne!(previous_tag, Some(change.tag));
            match change.tag {
                ChangeTag::Equal => {
                    prop_assert!(change.old_text.is_some());
                    prop_assert_eq!(&change.old_text, &change.new_text);
                }
                ChangeTag::Insert => {
                    prop_assert!(change.old_text.is_none());
                    prop_assert!(change.new_text.is_some());
                }
                ChangeTag::Delete => {
                    prop_assert!(change.old_text.is_some());
                    prop_assert!(change.new_text.is_none());
                }
                ChangeTag::Replace => {
                    prop_assert!(change.old_text.is_some());
                    prop_assert!(change.new_text.is_some());
                    prop_assert_ne!(&change.old_text, &change.new_text);
                }
            }
            previous_tag = Some(change.tag);
        }
    }

    /// A mergeable separator between joinable flanks never survives
    #[test]
    fn prop_mergeable_separators_are_consumed(
        old_tokens in tokens_strategy(),
        new_tokens in tokens_strategy(),
    ) {
        let changes = diff(&old_tokens, &new_tokens);

        for window in changes.windows(3) {
            let (left, separator, right) = (&window[0], &window[1], &window[2]);
            if left.is_edit() && right.is_edit() && is_mergeable_separator(separator) {
                prop_assert!(
                    !joinable(left.tag, right.tag),
                    "unmerged triple: {:?} | {:?} | {:?}",
                    left,
                    separator,
                    right,
                );
            }
        }
    }
}
