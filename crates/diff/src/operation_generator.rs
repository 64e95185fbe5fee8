use std::collections::HashMap;
use std::mem;

use crate::operation::{Action, Operation};

/// Align two token sequences into an ordered list of operations
///
/// The returned operations tile both sequences exactly once and no two
/// adjacent operations share an action. Tokens are compared by byte
/// equality.
pub fn generate_operations<O, N>(old_tokens: &[O], new_tokens: &[N]) -> Vec<Operation>
where
    O: AsRef<str>,
    N: AsRef<str>,
{
    let old: Vec<&str> = old_tokens.iter().map(|t| t.as_ref()).collect();
    let new: Vec<&str> = new_tokens.iter().map(|t| t.as_ref()).collect();
    operations(&old, &new)
}

/// Entry point shared with the differ, which already borrows plain slices
pub(crate) fn operations(old: &[&str], new: &[&str]) -> Vec<Operation> {
    OperationGenerator::new(old, new).generate()
}

/// A maximal run of identical tokens at aligned offsets
#[derive(Debug, Clone, Copy)]
struct Match {
    start_in_old: usize,
    start_in_new: usize,
    size: usize,
}

impl Match {
    fn end_in_old(&self) -> usize {
        self.start_in_old + self.size
    }

    fn end_in_new(&self) -> usize {
        self.start_in_new + self.size
    }
}

/// Length of the common run ending at the current table position, plus
/// whether the run contains at least one non-whitespace token
#[derive(Debug, Clone, Copy, Default)]
struct Run {
    len: usize,
    word: bool,
}

struct OperationGenerator<'a> {
    old: &'a [&'a str],
    new: &'a [&'a str],
    /// Positions of each token in `new`, in ascending order
    index: HashMap<&'a str, Vec<usize>>,
}

impl<'a> OperationGenerator<'a> {
    fn new(old: &'a [&'a str], new: &'a [&'a str]) -> Self {
        let mut index: HashMap<&str, Vec<usize>> = HashMap::new();
        for (position, token) in new.iter().copied().enumerate() {
            index.entry(token).or_default().push(position);
        }
        Self { old, new, index }
    }

    fn generate(self) -> Vec<Operation> {
        let mut matches = Vec::new();
        self.collect_matches(0, self.old.len(), 0, self.new.len(), &mut matches);

        // Terminal sentinel so trailing unmatched regions become operations.
        matches.push(Match {
            start_in_old: self.old.len(),
            start_in_new: self.new.len(),
            size: 0,
        });

        let mut operations = Vec::new();
        let mut pos_in_old = 0;
        let mut pos_in_new = 0;

        for m in matches {
            let gap_in_old = pos_in_old < m.start_in_old;
            let gap_in_new = pos_in_new < m.start_in_new;

            let action = match (gap_in_old, gap_in_new) {
                (true, true) => Some(Action::Replace),
                (true, false) => Some(Action::Delete),
                (false, true) => Some(Action::Insert),
                (false, false) => None,
            };
            if let Some(action) = action {
                push_operation(
                    &mut operations,
                    Operation::new(
                        action,
                        pos_in_old..m.start_in_old,
                        pos_in_new..m.start_in_new,
                    ),
                );
            }

            if m.size > 0 {
                push_operation(
                    &mut operations,
                    Operation::new(
                        Action::Equal,
                        m.start_in_old..m.end_in_old(),
                        m.start_in_new..m.end_in_new(),
                    ),
                );
            }

            pos_in_old = m.end_in_old();
            pos_in_new = m.end_in_new();
        }

        operations
    }

    /// Collect matches covering the given window in ascending order
    fn collect_matches(
        &self,
        old_lo: usize,
        old_hi: usize,
        new_lo: usize,
        new_hi: usize,
        matches: &mut Vec<Match>,
    ) {
        let m = self.find_match(old_lo, old_hi, new_lo, new_hi);
        if m.size == 0 {
            return;
        }
        self.collect_matches(old_lo, m.start_in_old, new_lo, m.start_in_new, matches);
        matches.push(m);
        self.collect_matches(m.end_in_old(), old_hi, m.end_in_new(), new_hi, matches);
    }

    /// Find the longest common run inside the given window
    ///
    /// Runs made up entirely of whitespace tokens never displace a
    /// word-bearing run; they are kept as a fallback so that windows
    /// containing nothing but whitespace still align. Ties keep the earlier
    /// old position, then the earlier new position. Returns a zero-size
    /// match anchored at the window origin when nothing matches.
    fn find_match(&self, old_lo: usize, old_hi: usize, new_lo: usize, new_hi: usize) -> Match {
        let width = new_hi - new_lo;
        let mut runs = vec![Run::default(); width];
        let mut next_runs = vec![Run::default(); width];
        // Table entries set for the previous / current old position. Only
        // these get reset between iterations; resetting the whole table
        // would be quadratic, carrying stale lengths over would be wrong.
        let mut touched: Vec<usize> = Vec::new();
        let mut next_touched: Vec<usize> = Vec::new();

        let mut best = Match {
            start_in_old: old_lo,
            start_in_new: new_lo,
            size: 0,
        };
        let mut whitespace_fallback = best;

        for i in old_lo..old_hi {
            let token = self.old[i];
            let is_word = !is_whitespace_token(token);

            if let Some(positions) = self.index.get(token) {
                for &j in positions {
                    if j < new_lo {
                        continue;
                    }
                    if j >= new_hi {
                        break;
                    }

                    let previous = if j > new_lo {
                        runs[j - 1 - new_lo]
                    } else {
                        Run::default()
                    };
                    let run = Run {
                        len: previous.len + 1,
                        word: previous.word || is_word,
                    };
                    next_runs[j - new_lo] = run;
                    next_touched.push(j - new_lo);

                    let candidate = Match {
                        start_in_old: i + 1 - run.len,
                        start_in_new: j + 1 - run.len,
                        size: run.len,
                    };
                    if run.word {
                        if run.len > best.size {
                            best = candidate;
                        }
                    } else if run.len > whitespace_fallback.size {
                        whitespace_fallback = candidate;
                    }
                }
            }

            for &slot in &touched {
                runs[slot] = Run::default();
            }
            touched.clear();
            mem::swap(&mut runs, &mut next_runs);
            mem::swap(&mut touched, &mut next_touched);
        }

        if best.size > 0 {
            best
        } else {
            whitespace_fallback
        }
    }
}

/// Append an operation, fusing it into the previous one when both share an
/// action and are end-to-end in both coordinates
fn push_operation(operations: &mut Vec<Operation>, operation: Operation) {
    if let Some(last) = operations.last_mut() {
        if last.action == operation.action
            && last.end_in_old == operation.start_in_old
            && last.end_in_new == operation.start_in_new
        {
            last.end_in_old = operation.end_in_old;
            last.end_in_new = operation.end_in_new;
            return;
        }
    }
    operations.push(operation);
}

/// Whether a token consists solely of Unicode whitespace
pub(crate) fn is_whitespace_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_whitespace)
}
