//! HTML output for token streams, code blocks, and content blocks.

use crate::content::{Block, ContentOptions, Inline};
use crate::highlight::{Token, TokenizerRegistry, class_for};

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A standalone code listing with optional header metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeBlock {
    pub code: String,
    pub language: Option<String>,
    pub filename: Option<String>,
}

impl CodeBlock {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: None,
            filename: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// Renders highlighted code and content blocks as HTML fragments.
pub struct HtmlRenderer {
    registry: TokenizerRegistry,
    options: ContentOptions,
}

impl HtmlRenderer {
    /// Renderer using the built-in tokenizers and default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: TokenizerRegistry::with_builtins(),
            options: ContentOptions::default(),
        }
    }

    /// Builder-style tokenizer registry setter.
    #[must_use]
    pub fn with_registry(mut self, registry: TokenizerRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Builder-style options setter.
    #[must_use]
    pub fn with_options(mut self, options: ContentOptions) -> Self {
        self.options = options;
        self
    }

    /// One `<span>` per token, classed by kind.
    #[must_use]
    pub fn tokens(&self, tokens: &[Token<'_>]) -> String {
        let mut out = String::new();
        for token in tokens {
            out.push_str(&format!(
                "<span class=\"{}\">{}</span>",
                class_for(token.kind),
                escape_html(token.value)
            ));
        }
        out
    }

    /// Tokenize and render `code` as a sequence of spans.
    #[must_use]
    pub fn highlight(&self, code: &str, language: Option<&str>) -> String {
        self.tokens(&self.registry.highlight(code, language))
    }

    /// Render a code listing with its header and copy button.
    ///
    /// The header appears only when a filename is set; the language badge
    /// only inside a header. `copied` selects the button's acknowledged state.
    #[must_use]
    pub fn code_block(&self, block: &CodeBlock, copied: bool) -> String {
        let mut out = String::from("<div class=\"code-block\">");
        if let Some(filename) = &block.filename {
            out.push_str("<div class=\"code-header\">");
            out.push_str(&format!(
                "<span class=\"code-filename\">{}</span>",
                escape_html(filename)
            ));
            if let Some(language) = &block.language {
                out.push_str(&format!(
                    "<span class=\"code-language\">{}</span>",
                    escape_html(language)
                ));
            }
            out.push_str("</div>");
        }

        let language = if self.options.highlight_code {
            block.language.as_deref()
        } else {
            None
        };
        out.push_str(&format!(
            "<pre><code class=\"font-mono\">{}</code></pre>",
            self.highlight(&block.code, language)
        ));
        let (label, state) = if copied {
            ("Copied", "true")
        } else {
            ("Copy code", "false")
        };
        out.push_str(&format!(
            "<button type=\"button\" class=\"copy-button\" aria-label=\"{label}\" data-copied=\"{state}\"></button>"
        ));
        out.push_str("</div>");
        out
    }

    fn inlines(out: &mut String, spans: &[Inline]) {
        for span in spans {
            match span {
                Inline::Text(text) => out.push_str(&escape_html(text)),
                Inline::Code(code) => {
                    out.push_str(&format!("<code>{}</code>", escape_html(code)));
                }
                Inline::Strong(text) => {
                    out.push_str(&format!("<strong>{}</strong>", escape_html(text)));
                }
            }
        }
    }

    /// Render content blocks, one element per line of output.
    ///
    /// Consecutive list items share one `<ul>`.
    #[must_use]
    pub fn blocks(&self, blocks: &[Block]) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(blocks.len());
        let mut in_list = false;

        for block in blocks {
            let is_item = matches!(block, Block::ListItem(_));
            if in_list && !is_item {
                lines.push("</ul>".to_string());
                in_list = false;
            }

            let mut out = String::new();
            match block {
                Block::Heading { level, text } => {
                    out.push_str(&format!("<h{level}>{}</h{level}>", escape_html(text)));
                }
                Block::Code { language, code } => {
                    let listing = CodeBlock {
                        code: code.clone(),
                        language: language.clone(),
                        filename: None,
                    };
                    out = self.code_block(&listing, false);
                }
                Block::ListItem(spans) => {
                    if !in_list {
                        lines.push("<ul>".to_string());
                        in_list = true;
                    }
                    out.push_str("<li>");
                    Self::inlines(&mut out, spans);
                    out.push_str("</li>");
                }
                Block::Break => out.push_str("<br />"),
                Block::Paragraph(spans) => {
                    out.push_str("<p>");
                    Self::inlines(&mut out, spans);
                    out.push_str("</p>");
                }
            }
            lines.push(out);
        }

        if in_list {
            lines.push("</ul>".to_string());
        }
        lines.join("\n")
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
