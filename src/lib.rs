//! `docsite_highlight` - code highlighting and content blocks for documentation sites
//!
//! Two pure text-processing cores and the glue around them:
//!
//! - [`highlight`]: a language-agnostic, regex-table tokenizer that splits
//!   source code into a lossless sequence of classified [`Token`]s
//! - [`content`]: a line-prefix block parser for tutorial bodies (headings,
//!   fenced code, list items, paragraphs with inline code and bold)
//! - [`clipboard`]: the "copied" acknowledgment for copy buttons, over an
//!   injected [`Clipboard`] capability
//! - [`render`]: HTML and ANSI terminal output
//!
//! # Examples
//!
//! ```
//! use docsite_highlight::{HtmlRenderer, TokenKind, tokenize};
//!
//! let tokens = tokenize("const n = 42; // answer", Some("ts"));
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Comment);
//!
//! let html = HtmlRenderer::new().tokens(&tokens);
//! assert!(html.starts_with("<span class=\"text-purple-400 font-medium\">const</span>"));
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow highlight::HighlightX etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Not every accessor needs #[must_use]

pub mod clipboard;
pub mod color;
pub mod content;
pub mod error;
pub mod event;
pub mod highlight;
pub mod render;
pub mod style;

// Re-export core types at crate root
pub use clipboard::{COPY_ACK_DURATION, Clipboard, CopyState, MemoryClipboard};
pub use color::Rgb;
pub use content::{Block, ContentOptions, Inline, parse_blocks, parse_inline};
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use highlight::{Theme, ThemeRegistry, Token, TokenKind, TokenizerRegistry, tokenize};
pub use render::{AnsiRenderer, CodeBlock, HtmlRenderer};
pub use style::{Style, TextAttributes};
