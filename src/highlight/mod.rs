//! Syntax highlighting: tokens, the pattern tokenizer, and style tables.

pub mod class;
pub mod theme;
pub mod token;
pub mod tokenizer;

pub use class::{DEFAULT_CLASS, class_for, class_for_name};
pub use theme::{Theme, ThemeRegistry};
pub use token::{Token, TokenKind};
pub use tokenizer::{
    DEFAULT_RULES, PLAIN_LANGUAGE, PatternTokenizer, PlainTokenizer, Rule, Tokenizer,
    TokenizerRegistry, tokenize,
};
