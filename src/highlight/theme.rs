use crate::color::{Rgb, hex};
use crate::error::{Error, Result};
use crate::highlight::token::TokenKind;
use crate::style::Style;

/// A syntax highlighting theme that maps token kinds to styles.
///
/// Lookup is total: kinds without an explicit style get the default style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    name: String,
    styles: [Option<Style>; TokenKind::COUNT],
    default_style: Style,
    background: Rgb,
    foreground: Rgb,
}

impl Theme {
    /// Create a new theme with sensible defaults.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: [None; TokenKind::COUNT],
            default_style: Style::default(),
            background: Rgb::BLACK,
            foreground: Rgb::WHITE,
        }
    }

    /// Theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the style for a token kind (falls back to default style).
    #[must_use]
    pub fn style_for(&self, kind: TokenKind) -> &Style {
        self.styles[kind.as_usize()]
            .as_ref()
            .unwrap_or(&self.default_style)
    }

    /// Style for a kind given by name; unknown names get the default style.
    #[must_use]
    pub fn style_for_name(&self, name: &str) -> &Style {
        TokenKind::from_name(name).map_or(&self.default_style, |kind| self.style_for(kind))
    }

    /// Theme default style.
    #[must_use]
    pub const fn default_style(&self) -> Style {
        self.default_style
    }

    /// Set a style for a token kind.
    pub fn set_style(&mut self, kind: TokenKind, style: Style) -> &mut Self {
        self.styles[kind.as_usize()] = Some(style);
        self
    }

    /// Builder-style style setter.
    #[must_use]
    pub fn with_style(mut self, kind: TokenKind, style: Style) -> Self {
        self.set_style(kind, style);
        self
    }

    /// Builder-style default style setter.
    #[must_use]
    pub fn with_default_style(mut self, style: Style) -> Self {
        self.default_style = style;
        self
    }

    /// Builder-style background setter.
    #[must_use]
    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    /// Builder-style foreground setter; also becomes the default style's color.
    #[must_use]
    pub fn with_foreground(mut self, color: Rgb) -> Self {
        self.foreground = color;
        self.default_style.fg = Some(color);
        self
    }

    /// Foreground over background; the canvas a listing is drawn on.
    #[must_use]
    pub const fn base_style(&self) -> Style {
        Style::fg(self.foreground).with_bg(self.background)
    }

    /// Theme background color.
    #[must_use]
    pub const fn background(&self) -> Rgb {
        self.background
    }

    /// Theme foreground color.
    #[must_use]
    pub const fn foreground(&self) -> Rgb {
        self.foreground
    }

    /// The documentation site's code-block palette (slate background).
    #[must_use]
    pub fn slate() -> Self {
        const SLATE_950: Rgb = hex(0x020617);
        const SLATE_500: Rgb = hex(0x64748b);
        const SLATE_300: Rgb = hex(0xcbd5e1);
        const SLATE_100: Rgb = hex(0xf1f5f9);
        const EMERALD_400: Rgb = hex(0x34d399);
        const PURPLE_400: Rgb = hex(0xc084fc);
        const ORANGE_400: Rgb = hex(0xfb923c);
        const BLUE_400: Rgb = hex(0x60a5fa);
        const YELLOW_400: Rgb = hex(0xfacc15);
        const PINK_400: Rgb = hex(0xf472b6);

        Self::new("Slate")
            .with_background(SLATE_950)
            .with_foreground(SLATE_100)
            .with_style(TokenKind::Comment, Style::fg(SLATE_500).with_italic())
            .with_style(TokenKind::String, Style::fg(EMERALD_400))
            .with_style(TokenKind::Keyword, Style::fg(PURPLE_400).with_bold())
            .with_style(TokenKind::Number, Style::fg(ORANGE_400))
            .with_style(TokenKind::Tag, Style::fg(BLUE_400))
            .with_style(TokenKind::Attr, Style::fg(YELLOW_400))
            .with_style(TokenKind::Operator, Style::fg(PINK_400))
            .with_style(TokenKind::Punctuation, Style::fg(SLATE_300))
            .with_style(TokenKind::Text, Style::fg(SLATE_100))
    }

    /// Dark theme inspired by popular editor palettes.
    #[must_use]
    pub fn dark() -> Self {
        let foreground = hex(0xf8f8f2);
        let comment = hex(0x6272a4);
        let keyword = hex(0xff79c6);
        let types = hex(0x8be9fd);
        let string = hex(0xf1fa8c);
        let number = hex(0xbd93f9);
        let function = hex(0x50fa7b);

        Self::new("Dark")
            .with_background(hex(0x282a36))
            .with_foreground(foreground)
            .with_style(TokenKind::Keyword, Style::fg(keyword))
            .with_style(TokenKind::String, Style::fg(string))
            .with_style(TokenKind::Number, Style::fg(number))
            .with_style(TokenKind::Comment, Style::fg(comment).with_italic())
            .with_style(TokenKind::Tag, Style::fg(types))
            .with_style(TokenKind::Attr, Style::fg(function))
            .with_style(TokenKind::Operator, Style::fg(keyword))
            .with_style(TokenKind::Punctuation, Style::fg(foreground))
    }

    /// Light theme for bright environments.
    #[must_use]
    pub fn light() -> Self {
        let foreground = hex(0x24292e);
        let keyword = hex(0xd73a49);

        Self::new("Light")
            .with_background(Rgb::WHITE)
            .with_foreground(foreground)
            .with_style(TokenKind::Keyword, Style::fg(keyword))
            .with_style(TokenKind::String, Style::fg(hex(0x032f62)))
            .with_style(TokenKind::Number, Style::fg(hex(0x6f42c1)))
            .with_style(TokenKind::Comment, Style::fg(hex(0x6a737d)).with_italic())
            .with_style(TokenKind::Tag, Style::fg(hex(0x005cc5)))
            .with_style(TokenKind::Attr, Style::fg(hex(0x22863a)))
            .with_style(TokenKind::Operator, Style::fg(keyword))
            .with_style(TokenKind::Punctuation, Style::fg(foreground))
    }

    /// Monochrome theme using attributes instead of colors.
    #[must_use]
    pub fn monochrome() -> Self {
        let foreground = hex(0xe0e0e0);

        Self::new("Monochrome")
            .with_background(Rgb::BLACK)
            .with_foreground(foreground)
            .with_style(TokenKind::Keyword, Style::fg(foreground).with_bold())
            .with_style(TokenKind::String, Style::fg(foreground).with_underline())
            .with_style(TokenKind::Comment, Style::fg(foreground).with_italic())
            .with_style(TokenKind::Tag, Style::fg(foreground).with_bold())
            .with_style(TokenKind::Punctuation, Style::fg(foreground).with_dim())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

/// Named themes with one current selection.
#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
    current: usize,
}

impl ThemeRegistry {
    /// Registry holding a single theme, which is current.
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        Self {
            themes: vec![initial],
            current: 0,
        }
    }

    /// Create a registry with built-in themes ("slate" current).
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new(Theme::slate());
        registry.register(Theme::dark());
        registry.register(Theme::light());
        registry.register(Theme::monochrome());
        registry
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.themes
            .iter()
            .position(|theme| theme.name.eq_ignore_ascii_case(name))
    }

    /// Register a theme, replacing any theme with the same name (case-insensitive).
    pub fn register(&mut self, theme: Theme) {
        match self.position(&theme.name) {
            Some(index) => self.themes[index] = theme,
            None => self.themes.push(theme),
        }
    }

    /// Get a theme by name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.position(name).map(|index| &self.themes[index])
    }

    /// Get the current theme.
    #[must_use]
    pub fn current(&self) -> &Theme {
        &self.themes[self.current]
    }

    /// Set the current theme.
    pub fn set_current(&mut self, name: &str) -> Result<()> {
        let index = self
            .position(name)
            .ok_or_else(|| Error::UnknownTheme(name.to_string()))?;
        self.current = index;
        Ok(())
    }

    /// List registered theme names in registration order.
    pub fn list(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(Theme::name)
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_fallback_and_override() {
        let theme = Theme::new("Test").with_foreground(Rgb::WHITE);
        let default_style = *theme.style_for(TokenKind::Text);
        let keyword_style = *theme.style_for(TokenKind::Keyword);
        assert_eq!(default_style, keyword_style);

        let custom = Style::fg(Rgb::RED).with_bold();
        let themed = theme.with_style(TokenKind::Keyword, custom);
        assert_eq!(*themed.style_for(TokenKind::Keyword), custom);
        assert_eq!(*themed.style_for(TokenKind::String), default_style);
    }

    #[test]
    fn unknown_kind_name_uses_default_style() {
        let theme = Theme::slate();
        assert_eq!(*theme.style_for_name("regex"), theme.default_style());
        assert_eq!(
            theme.style_for_name("keyword"),
            theme.style_for(TokenKind::Keyword)
        );
    }

    #[test]
    fn slate_matches_site_palette() {
        let theme = Theme::slate();
        assert_eq!(
            theme.style_for(TokenKind::String).fg,
            Some(Rgb::new(0x34, 0xd3, 0x99))
        );
        assert!(
            theme
                .style_for(TokenKind::Comment)
                .attributes
                .contains(crate::style::TextAttributes::ITALIC)
        );
        assert_eq!(theme.background(), Rgb::new(0x02, 0x06, 0x17));
        assert_eq!(theme.base_style().bg, Some(theme.background()));
        assert_eq!(theme.base_style().fg, Some(theme.foreground()));
    }

    #[test]
    fn builtins_define_core_styles() {
        for theme in [Theme::slate(), Theme::dark(), Theme::light()] {
            assert!(theme.style_for(TokenKind::Keyword).fg.is_some());
            assert!(theme.style_for(TokenKind::String).fg.is_some());
            assert!(theme.style_for(TokenKind::Comment).fg.is_some());
        }
    }

    #[test]
    fn registry_switching() {
        let mut registry = ThemeRegistry::with_builtins();
        assert!(registry.get("DARK").is_some());
        assert_eq!(registry.current().name(), "Slate");
        assert!(registry.set_current("light").is_ok());
        assert_eq!(registry.current().name(), "Light");

        let err = registry.set_current("neon").unwrap_err();
        assert!(matches!(err, Error::UnknownTheme(ref n) if n == "neon"));
        assert_eq!(registry.current().name(), "Light");
    }

    #[test]
    fn registry_register_replaces_same_name() {
        let mut registry = ThemeRegistry::new(Theme::dark());
        registry.register(Theme::new("dark").with_foreground(Rgb::RED));
        assert_eq!(registry.list().count(), 1);
        assert_eq!(registry.current().foreground(), Rgb::RED);
    }
}
