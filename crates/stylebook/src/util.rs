//! Utility functions for working with style tokens.

/// Splits a class-like string into individual tokens.
///
/// Tokens are separated by any amount of whitespace; empty fragments are
/// dropped, so leading, trailing and repeated spaces are harmless.
///
/// # Example
///
/// ```rust
/// use stylebook::split_tokens;
///
/// assert_eq!(split_tokens("  border  bg-transparent "), vec!["border", "bg-transparent"]);
/// assert!(split_tokens("").is_empty());
/// ```
pub fn split_tokens(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// Joins tokens into a single `class` attribute value.
///
/// # Example
///
/// ```rust
/// use stylebook::join_tokens;
///
/// assert_eq!(join_tokens(&["rounded", "h-9"]), "rounded h-9");
/// ```
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    join_classes(tokens.iter().map(AsRef::as_ref))
}

/// Joins class fragments, dropping empty ones and normalizing whitespace.
///
/// This is the markup-side helper used to combine a resolved class string
/// with conditional extras, where some fragments may be empty.
///
/// # Example
///
/// ```rust
/// use stylebook::join_classes;
///
/// assert_eq!(join_classes(["px-6", "", " flex  gap-2 "]), "px-6 flex gap-2");
/// ```
pub fn join_classes<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for token in fragments.into_iter().flat_map(str::split_whitespace) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Conversion into an ordered token sequence.
///
/// Strings are split on whitespace, so `"border bg-background"` and
/// `["border", "bg-background"]` produce the same tokens.
pub trait IntoTokens {
    fn into_tokens(self) -> Vec<String>;
}

impl IntoTokens for &str {
    fn into_tokens(self) -> Vec<String> {
        split_tokens(self)
    }
}

impl IntoTokens for String {
    fn into_tokens(self) -> Vec<String> {
        split_tokens(&self)
    }
}

impl IntoTokens for &String {
    fn into_tokens(self) -> Vec<String> {
        split_tokens(self)
    }
}

impl<S: AsRef<str>> IntoTokens for Vec<S> {
    fn into_tokens(self) -> Vec<String> {
        self.iter().flat_map(|s| split_tokens(s.as_ref())).collect()
    }
}

impl<S: AsRef<str>> IntoTokens for &[S] {
    fn into_tokens(self) -> Vec<String> {
        self.iter().flat_map(|s| split_tokens(s.as_ref())).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoTokens for [S; N] {
    fn into_tokens(self) -> Vec<String> {
        self.iter().flat_map(|s| split_tokens(s.as_ref())).collect()
    }
}
