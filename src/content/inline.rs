//! Inline span detection: `` `code` `` and `**bold**`.
//!
//! Delimiters must pair up on the same line. Code spans are found first and
//! their contents are never scanned for bold markers. When a line has an odd
//! number of a delimiter, the last one is dangling: it and everything after it
//! stay literal text.

/// A run of inline content inside a paragraph or list item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Code(String),
    Strong(String),
}

impl Inline {
    /// The span's text without delimiters.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(s) | Self::Code(s) | Self::Strong(s) => s,
        }
    }
}

const CODE_DELIMITER: &str = "`";
const STRONG_DELIMITER: &str = "**";

/// Segments of `text` split on `delimiter`, flagged `true` when inside a
/// pair, plus the text after a dangling delimiter if the count is odd.
fn split_delimited<'a>(text: &'a str, delimiter: &str) -> (Vec<(&'a str, bool)>, Option<&'a str>) {
    let parts: Vec<&str> = text.split(delimiter).collect();
    let balanced = parts.len() % 2 == 1;
    let paired_len = if balanced { parts.len() } else { parts.len() - 1 };

    let segments = parts[..paired_len]
        .iter()
        .enumerate()
        .map(|(idx, part)| (*part, idx % 2 == 1))
        .collect();
    let dangling = (!balanced).then(|| parts[paired_len]);
    (segments, dangling)
}

fn push_text(spans: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(last)) = spans.last_mut() {
        last.push_str(text);
    } else {
        spans.push(Inline::Text(text.to_string()));
    }
}

fn push_dangling(spans: &mut Vec<Inline>, delimiter: &str, tail: &str) {
    push_text(spans, delimiter);
    push_text(spans, tail);
}

fn push_strong_spans(spans: &mut Vec<Inline>, text: &str) {
    let (segments, dangling) = split_delimited(text, STRONG_DELIMITER);
    for (segment, styled) in segments {
        if styled {
            spans.push(Inline::Strong(segment.to_string()));
        } else {
            push_text(spans, segment);
        }
    }
    if let Some(tail) = dangling {
        push_dangling(spans, STRONG_DELIMITER, tail);
    }
}

/// Split one line into text, code, and strong spans.
///
/// Empty plain runs are dropped; adjacent plain runs are merged. Empty code or
/// strong spans (`` `` `` or `****`) are kept.
///
/// ```
/// use docsite_highlight::content::{Inline, parse_inline};
///
/// assert_eq!(
///     parse_inline("run `cargo doc` **now**"),
///     vec![
///         Inline::Text("run ".into()),
///         Inline::Code("cargo doc".into()),
///         Inline::Text(" ".into()),
///         Inline::Strong("now".into()),
///     ]
/// );
/// ```
#[must_use]
pub fn parse_inline(line: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let (segments, dangling) = split_delimited(line, CODE_DELIMITER);
    for (segment, styled) in segments {
        if styled {
            spans.push(Inline::Code(segment.to_string()));
        } else {
            push_strong_spans(&mut spans, segment);
        }
    }
    if let Some(tail) = dangling {
        push_dangling(&mut spans, CODE_DELIMITER, tail);
    }
    spans
}
