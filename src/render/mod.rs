//! Output backends for highlighted code and content blocks.

pub mod ansi;
pub mod html;

pub use ansi::{AnsiRenderer, RESET, sgr};
pub use html::{CodeBlock, HtmlRenderer, escape_html};
