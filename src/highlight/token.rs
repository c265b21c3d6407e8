//! Token types for syntax highlighting.

use std::fmt;
use std::ops::Range;

/// Semantic token categories produced by the tokenizer.
///
/// Order matches the display legend, not matching priority; priority lives in
/// the tokenizer's pattern table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Comment,
    String,
    Keyword,
    Number,
    /// Markup tag such as `<div>` or `</div>`.
    Tag,
    /// Identifier directly followed by `=`, typically a markup attribute.
    Attr,
    Operator,
    Punctuation,
    /// Anything not claimed by another category.
    Text,
}

impl TokenKind {
    /// Number of variants, for fixed-size lookup tables.
    pub const COUNT: usize = 9;

    /// Every kind, indexed by [`TokenKind::as_usize`].
    pub const ALL: [Self; Self::COUNT] = [
        Self::Comment,
        Self::String,
        Self::Keyword,
        Self::Number,
        Self::Tag,
        Self::Attr,
        Self::Operator,
        Self::Punctuation,
        Self::Text,
    ];

    /// Dense index for table lookups.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// Stable lowercase name (`"comment"`, `"attr"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::String => "string",
            Self::Keyword => "keyword",
            Self::Number => "number",
            Self::Tag => "tag",
            Self::Attr => "attr",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
            Self::Text => "text",
        }
    }

    /// Inverse of [`TokenKind::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of the source text.
///
/// `start` and `end` are byte offsets into the source; `value` is exactly
/// `&source[start..end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    /// Build a token covering `source[start..end]`.
    ///
    /// Callers must pass char-boundary offsets; the tokenizer only ever
    /// produces offsets taken from regex matches or the source length.
    #[must_use]
    pub fn new(kind: TokenKind, source: &'a str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "token range must be start <= end");
        Self {
            kind,
            value: &source[start..end],
            start,
            end,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::{Token, TokenKind};

    #[test]
    fn token_construction_and_accessors() {
        let source = "let answer = 42;";
        let sample = Token::new(TokenKind::Keyword, source, 0, 3);
        assert_eq!(sample.kind, TokenKind::Keyword);
        assert_eq!(sample.value, "let");
        assert_eq!(sample.len(), 3);
        assert!(!sample.is_empty());
        assert_eq!(sample.range(), 0..3);
    }

    #[test]
    fn token_kind_names_round_trip() {
        for kind in TokenKind::ALL {
            assert_eq!(TokenKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(TokenKind::from_name("regex"), None);
        assert_eq!(TokenKind::from_name("Keyword"), None);
    }

    #[test]
    fn token_kind_index_matches_all() {
        for (idx, kind) in TokenKind::ALL.iter().enumerate() {
            assert_eq!(kind.as_usize(), idx);
        }
        assert_eq!(TokenKind::ALL.len(), TokenKind::COUNT);
    }

    #[test]
    fn token_kind_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<TokenKind>();
        assert_copy::<Token<'static>>();
    }
}
