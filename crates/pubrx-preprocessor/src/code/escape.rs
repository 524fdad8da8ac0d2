//! Escape correction for code lines quoted by line number.
//!
//! Manuscript editors escape markdown-significant characters when code is
//! pasted into prose. Lines selected with `:line`/`:lines` are run through
//! these replacements so they display as they appear in the source file.

use std::sync::LazyLock;

use crate::replacements::Replacements;

static ESCAPES: LazyLock<Replacements> = LazyLock::new(|| {
    Replacements::from_pairs(&[
        (r"\_", "_"),
        (r"\[", "["),
        (r"\]", "]"),
        (r"\<", "<"),
        (r"\>", ">"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&amp;", "&"),
    ])
});

/// Undo editor escaping in a single line.
pub(crate) fn unescape(line: &str) -> String {
    let mut line = line.to_owned();
    ESCAPES.apply(&mut line);
    line
}
