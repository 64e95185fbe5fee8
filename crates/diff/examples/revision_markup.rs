use anyhow::Result;
use html_diff::{diff, generate_operations, HtmlFormatter};

fn main() -> Result<()> {
    // Tokens as a wiki-style revision view would supply them: words,
    // whitespace runs and entity references are separate tokens.
    let old_tokens = ["&#8364;", " ", "is", " ", "the", " ", "euro"];
    let new_tokens = ["&#8364;", " ", "is", " ", "a", " ", "euro", " ", "symbol"];

    println!("=== Raw operations ===");
    for operation in generate_operations(&old_tokens, &new_tokens) {
        println!(
            "{:<8} old {:?} new {:?}",
            operation.action.to_string(),
            operation.old_range(),
            operation.new_range(),
        );
    }

    println!("\n=== Rendered with site-specific classes ===");
    let changes = diff(&old_tokens, &new_tokens);
    let html = HtmlFormatter::new()
        .delete_class("revision-removed")
        .insert_class("revision-added")
        .replace_class("revision-changed")
        .format(&changes);
    println!("{html}");

    Ok(())
}
