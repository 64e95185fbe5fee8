use anyhow::Result;
use html_diff::{diff, format_del_ins};

/// Split text into word and whitespace-run tokens
///
/// The library takes pre-tokenized input; a real caller would bring its own
/// tokenizer (entity references, tags). Splitting on whitespace boundaries
/// is enough for a demo.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;
    for (offset, ch) in text.char_indices() {
        let whitespace = ch.is_whitespace();
        if in_whitespace.is_some_and(|w| w != whitespace) {
            tokens.push(&text[start..offset]);
            start = offset;
        }
        in_whitespace = Some(whitespace);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

fn main() -> Result<()> {
    let old_text = "The quick brown fox jumps over the lazy dog";
    let new_text = "The fast speedy fox leaps over the lazy dog";

    let old_tokens = tokenize(old_text);
    let new_tokens = tokenize(new_text);

    println!("=== Change tuples ===");
    let changes = diff(&old_tokens, &new_tokens);
    for change in &changes {
        let (tag, old_text, new_text) = change.as_tuple();
        println!("{tag} {old_text:?} {new_text:?}");
    }

    println!("\n=== Inline HTML ===");
    println!("{}", format_del_ins(&changes));

    Ok(())
}
