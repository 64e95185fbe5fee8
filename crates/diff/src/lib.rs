// Token-level diff library for HTML/text fragments
// Aligns two token sequences and lifts the alignment into readable change
// tuples, with formatters that render them as inline <del>/<ins> markup

mod change;
mod differ;
mod formatters;
mod operation;
mod operation_generator;

pub use change::{Change, ChangeTag};
pub use differ::diff;
pub use formatters::{format_del_ins, format_replace, HtmlFormatter};
pub use operation::{Action, Operation};
pub use operation_generator::generate_operations;
