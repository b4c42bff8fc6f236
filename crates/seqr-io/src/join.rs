//! Depth-first string-join formatter for nested sequences.

use std::fmt::Display;

use seqr_core::Sequence;

/// A nested formatting tree: leaves are already-rendered text, lists
/// flatten depth-first.
#[derive(Debug, Clone)]
pub enum Fragment {
    Text(String),
    List(Vec<Fragment>),
}

impl Fragment {
    pub fn text(s: impl Into<String>) -> Self {
        Fragment::Text(s.into())
    }

    pub fn list(items: impl IntoIterator<Item = Fragment>) -> Self {
        Fragment::List(items.into_iter().collect())
    }
}

/// Join a fragment tree with caller-supplied prefix/separator/suffix.
/// Each list renders as `prefix item sep item … suffix`, recursively.
pub fn join(fragment: &Fragment, prefix: &str, separator: &str, suffix: &str) -> String {
    match fragment {
        Fragment::Text(s) => s.clone(),
        Fragment::List(items) => {
            let mut out = String::from(prefix);
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(separator);
                }
                out.push_str(&join(item, prefix, separator, suffix));
            }
            out.push_str(suffix);
            out
        }
    }
}

/// Render one in-order traversal of a sequence as a joined string. This
/// sits strictly downstream of the engine and consumes only the cursor.
pub fn join_sequence<T: Clone + Display + 'static>(
    seq: &Sequence<T>,
    prefix: &str,
    separator: &str,
    suffix: &str,
) -> String {
    let items: Vec<Fragment> = seq
        .iterate()
        .map(|item| Fragment::Text(item.to_string()))
        .collect();
    join(&Fragment::List(items), prefix, separator, suffix)
}
