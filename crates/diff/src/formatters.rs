use std::fmt::Write;

use crate::change::{Change, ChangeTag};

/// Renders a change list as inline HTML with `<del>` / `<ins>` markup
///
/// Replacements emit a deletion wrapper followed by an insertion wrapper.
/// When a replacement class is configured both wrappers carry it; otherwise
/// they reuse the deletion and insertion classes. Change text is emitted
/// verbatim, tokens are expected to already be HTML fragment text.
#[derive(Debug, Clone)]
pub struct HtmlFormatter {
    delete_class: String,
    insert_class: String,
    replace_class: Option<String>,
}

impl HtmlFormatter {
    /// Create a formatter with the default `diffdel` / `diffins` classes
    pub fn new() -> Self {
        Self {
            delete_class: "diffdel".to_string(),
            insert_class: "diffins".to_string(),
            replace_class: None,
        }
    }

    /// Set the CSS class for deletion wrappers
    pub fn delete_class(mut self, class: impl Into<String>) -> Self {
        self.delete_class = class.into();
        self
    }

    /// Set the CSS class for insertion wrappers
    pub fn insert_class(mut self, class: impl Into<String>) -> Self {
        self.insert_class = class.into();
        self
    }

    /// Mark replacements distinctly with the given class
    pub fn replace_class(mut self, class: impl Into<String>) -> Self {
        self.replace_class = Some(class.into());
        self
    }

    /// Format a change list into an HTML string
    pub fn format(&self, changes: &[Change]) -> String {
        let mut html = String::new();
        for change in changes {
            let old_text = change.old_text.as_deref().unwrap_or("");
            let new_text = change.new_text.as_deref().unwrap_or("");
            match change.tag {
                ChangeTag::Equal => html.push_str(old_text),
                ChangeTag::Delete => wrap(&mut html, "del", &self.delete_class, old_text),
                ChangeTag::Insert => wrap(&mut html, "ins", &self.insert_class, new_text),
                ChangeTag::Replace => {
                    let delete_class =
                        self.replace_class.as_deref().unwrap_or(&self.delete_class);
                    let insert_class =
                        self.replace_class.as_deref().unwrap_or(&self.insert_class);
                    wrap(&mut html, "del", delete_class, old_text);
                    wrap(&mut html, "ins", insert_class, new_text);
                }
            }
        }
        html
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap(html: &mut String, element: &str, class: &str, text: &str) {
    // Writing to a String cannot fail.
    let _ = write!(html, "<{element} class=\"{class}\">{text}</{element}>");
}

/// Render with `diffdel` / `diffins` classes; replacements reuse them
pub fn format_del_ins(changes: &[Change]) -> String {
    HtmlFormatter::new().format(changes)
}

/// Render with `diffdel` / `diffins` classes; replacements are marked
/// distinctly as `diffmod`
pub fn format_replace(changes: &[Change]) -> String {
    HtmlFormatter::new().replace_class("diffmod").format(changes)
}
