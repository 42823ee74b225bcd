//! Business name normalization.

use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("valid regex"));

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Entity suffixes and generic nouns that carry no identity.
static STOPWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(the|a|an|llc|inc|ltd|co|corp|company|store|shop|restaurant|bar|cafe|hotel|services?|solutions?)\b",
    )
    .expect("valid regex")
});

/// Normalizes a business name into its canonical comparison form.
///
/// # Normalization Rules
///
/// 1. Lowercase everything
/// 2. Drop every character other than `a-z`, `0-9` and whitespace
/// 3. Collapse whitespace runs and trim
/// 4. Remove whole-word stopwords (`the`, `llc`, `cafe`, `services`, ...)
/// 5. Collapse whitespace and trim again
///
/// The result may be empty. Normalizing an already normalized name returns
/// it unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize("The Corner Cafe, LLC"), "corner");
/// assert_eq!(normalize("Joe's  Pizza"), "joes pizza");
/// ```
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = DISALLOWED_CHARS.replace_all(&lowered, "");
    let collapsed = collapse_whitespace(&stripped);
    let without_stopwords = STOPWORDS.replace_all(&collapsed, "");
    collapse_whitespace(&without_stopwords)
}

fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUNS.replace_all(s, " ").trim().to_string()
}
