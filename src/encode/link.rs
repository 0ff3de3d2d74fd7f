//! Internal link rewriting.
//!
//! Block themes write preset references as `var:preset|color|primary`, a
//! shorthand the theme engine expands to the custom property
//! `var(--wp--preset--color--primary)`. Values copied out of such files are
//! only usable in a stylesheet after the same expansion.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Namespace prepended to every rewritten custom property.
pub const NAMESPACE: &str = "wp";

/// `var:` followed by at least two `|`-separated segments of word characters
/// or hyphens.
#[allow(clippy::expect_used)]
static INTERNAL_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"var:([A-Za-z0-9_-]+(?:\|[A-Za-z0-9_-]+)+)")
        .expect("internal link pattern is valid")
});

/// Rewrite every internal link in `value`, leaving surrounding text as is.
///
/// Returns the input unchanged (and unallocated) when it holds no link.
pub fn resolve_internal_links(value: &str) -> Cow<'_, str> {
    INTERNAL_LINK_RE.replace_all(value, |caps: &Captures<'_>| {
        format!("var(--{}--{})", NAMESPACE, caps[1].replace('|', "--"))
    })
}
