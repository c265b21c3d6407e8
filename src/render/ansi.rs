//! ANSI terminal output for token streams.

use std::io;

use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::highlight::{Theme, Token, TokenKind, TokenizerRegistry};
use crate::render::html::CodeBlock;
use crate::style::Style;

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// SGR sequence selecting `style`, or an empty string for an empty style.
#[must_use]
pub fn sgr(style: &Style) -> String {
    let mut params: Vec<String> = Vec::with_capacity(4);
    if let Some(fg) = style.fg {
        params.push(format!("38;2;{};{};{}", fg.r, fg.g, fg.b));
    }
    if let Some(bg) = style.bg {
        params.push(format!("48;2;{};{};{}", bg.r, bg.g, bg.b));
    }
    params.extend(style.attributes.sgr_codes().map(|code| code.to_string()));

    if params.is_empty() {
        String::new()
    } else {
        format!("\x1b[{}m", params.join(";"))
    }
}

/// Renders tokens with a [`Theme`] as 24-bit color escape sequences.
pub struct AnsiRenderer {
    theme: Theme,
    registry: TokenizerRegistry,
}

impl AnsiRenderer {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            registry: TokenizerRegistry::with_builtins(),
        }
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn push_styled(out: &mut String, style: &Style, text: &str) {
        let prefix = sgr(style);
        if prefix.is_empty() {
            out.push_str(text);
        } else {
            out.push_str(&prefix);
            out.push_str(text);
            out.push_str(RESET);
        }
    }

    /// Styled text for `tokens`; every styled token ends with [`RESET`].
    #[must_use]
    pub fn tokens(&self, tokens: &[Token<'_>]) -> String {
        let mut out = String::new();
        for token in tokens {
            Self::push_styled(&mut out, self.theme.style_for(token.kind), token.value);
        }
        out
    }

    /// Tokenize and render `code`.
    #[must_use]
    pub fn highlight(&self, code: &str, language: Option<&str>) -> String {
        self.tokens(&self.registry.highlight(code, language))
    }

    /// Render a listing on the theme's background; with a filename, a header
    /// line shows it and the language label right-aligned to `width` display
    /// columns.
    #[must_use]
    pub fn code_block(&self, block: &CodeBlock, width: usize) -> String {
        let base = self.theme.base_style();
        let mut out = String::new();
        if let Some(filename) = &block.filename {
            let label = block.language.as_deref().unwrap_or("");
            let used = filename.width() + label.width();
            let gap = width.saturating_sub(used).max(1);
            let header = if label.is_empty() {
                filename.clone()
            } else {
                format!("{filename}{:gap$}{label}", "")
            };
            let style = base.merge(*self.theme.style_for(TokenKind::Comment));
            Self::push_styled(&mut out, &style, &header);
            out.push('\n');
        }
        for token in self.registry.highlight(&block.code, block.language.as_deref()) {
            let style = base.merge(*self.theme.style_for(token.kind));
            Self::push_styled(&mut out, &style, token.value);
        }
        out
    }

    /// Write rendered tokens to `writer`.
    pub fn write_to<W: io::Write>(&self, writer: &mut W, tokens: &[Token<'_>]) -> Result<()> {
        writer.write_all(self.tokens(tokens).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for AnsiRenderer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
