//! Line-oriented content blocks for tutorial bodies.
//!
//! This is a small templating convention, not Markdown: each line is
//! classified on its own by prefix, in this order:
//!
//! | Prefix | Block |
//! |---|---|
//! | `## ` | [`Block::Heading`] level 2 |
//! | `### ` | [`Block::Heading`] level 3 |
//! | ```` ``` ```` | [`Block::Code`] up to the next fence line |
//! | `- ` | [`Block::ListItem`] |
//! | blank | [`Block::Break`] |
//! | anything else | [`Block::Paragraph`] |
//!
//! No nesting, ordered lists, links, tables, or escaping.

mod inline;

pub use inline::{Inline, parse_inline};

use crate::event::{LogLevel, emit_log};

const FENCE: &str = "```";

/// One renderable unit of content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    /// Fenced code; `language` is the fence's info string, if any.
    Code {
        language: Option<String>,
        code: String,
    },
    ListItem(Vec<Inline>),
    Break,
    Paragraph(Vec<Inline>),
}

/// Options for turning blocks into output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentOptions {
    /// Run fenced code through the tokenizer.
    pub highlight_code: bool,
}

impl ContentOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            highlight_code: true,
        }
    }

    #[must_use]
    pub const fn with_highlight_code(mut self, enabled: bool) -> Self {
        self.highlight_code = enabled;
        self
    }
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self::new()
    }
}

fn fence_language(info: &str) -> Option<String> {
    let info = info.trim();
    (!info.is_empty()).then(|| info.to_string())
}

/// Split `content` into blocks.
///
/// Lines are split on `\n` with a trailing `\r` removed. An opening fence
/// with no later fence line is kept as a literal paragraph and parsing
/// continues on the next line. Empty input yields no blocks.
///
/// ```
/// use docsite_highlight::content::{Block, Inline, parse_blocks};
///
/// let blocks = parse_blocks("## Title\n\nSome text with `code`.");
/// assert_eq!(blocks[0], Block::Heading { level: 2, text: "Title".into() });
/// assert_eq!(blocks[1], Block::Break);
/// assert!(matches!(&blocks[2], Block::Paragraph(spans) if spans.contains(&Inline::Code("code".into()))));
/// ```
#[must_use]
pub fn parse_blocks(content: &str) -> Vec<Block> {
    if content.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let mut blocks = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];
        index += 1;

        if let Some(text) = line.strip_prefix("## ") {
            blocks.push(Block::Heading {
                level: 2,
                text: text.to_string(),
            });
        } else if let Some(text) = line.strip_prefix("### ") {
            blocks.push(Block::Heading {
                level: 3,
                text: text.to_string(),
            });
        } else if let Some(info) = line.strip_prefix(FENCE) {
            match lines[index..].iter().position(|l| l.starts_with(FENCE)) {
                Some(offset) => {
                    let close = index + offset;
                    blocks.push(Block::Code {
                        language: fence_language(info),
                        code: lines[index..close].join("\n"),
                    });
                    index = close + 1;
                }
                None => {
                    emit_log(
                        LogLevel::Debug,
                        &format!("unterminated code fence on line {index}; kept as text"),
                    );
                    blocks.push(Block::Paragraph(vec![Inline::Text(line.to_string())]));
                }
            }
        } else if let Some(item) = line.strip_prefix("- ") {
            blocks.push(Block::ListItem(parse_inline(item)));
        } else if line.trim().is_empty() {
            blocks.push(Block::Break);
        } else {
            blocks.push(Block::Paragraph(parse_inline(line)));
        }
    }

    blocks
}
