//! CSS class table for HTML output.
//!
//! Class names are the utility classes the documentation site's code blocks
//! use. The mapping is total; anything unrecognized renders as plain text.

use super::token::TokenKind;

/// Class for plain text and any unrecognized kind name.
pub const DEFAULT_CLASS: &str = "text-slate-100";

/// CSS classes for a token kind.
#[must_use]
pub const fn class_for(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Comment => "text-slate-500 italic",
        TokenKind::String => "text-emerald-400",
        TokenKind::Keyword => "text-purple-400 font-medium",
        TokenKind::Number => "text-orange-400",
        TokenKind::Tag => "text-blue-400",
        TokenKind::Attr => "text-yellow-400",
        TokenKind::Operator => "text-pink-400",
        TokenKind::Punctuation => "text-slate-300",
        TokenKind::Text => DEFAULT_CLASS,
    }
}

/// CSS classes for a kind given by name, e.g. from serialized tokens.
#[must_use]
pub fn class_for_name(name: &str) -> &'static str {
    TokenKind::from_name(name).map_or(DEFAULT_CLASS, class_for)
}
