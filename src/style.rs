//! Text styling with attributes and colors.
//!
//! - [`TextAttributes`]: bitflags for bold, italic, underline, dim
//! - [`Style`]: foreground/background color plus attributes
//!
//! # Examples
//!
//! ```
//! use docsite_highlight::{Rgb, Style, TextAttributes};
//!
//! let keyword = Style::fg(Rgb::from_hex("#c084fc").unwrap()).with_bold();
//! assert!(keyword.attributes.contains(TextAttributes::BOLD));
//!
//! // Merge styles (overlay takes precedence)
//! let combined = Style::italic().merge(Style::fg(Rgb::RED));
//! assert_eq!(combined.fg, Some(Rgb::RED));
//! ```

use crate::color::Rgb;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD          = 0x01;
        /// Dim/decreased intensity.
        const DIM           = 0x02;
        /// Italic.
        const ITALIC        = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
    }
}

impl TextAttributes {
    /// SGR parameter for each attribute, in emission order.
    const SGR_CODES: [(Self, u8); 4] = [
        (Self::BOLD, 1),
        (Self::DIM, 2),
        (Self::ITALIC, 3),
        (Self::UNDERLINE, 4),
    ];

    /// SGR parameters for the set attributes.
    pub fn sgr_codes(self) -> impl Iterator<Item = u8> {
        Self::SGR_CODES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, code)| code)
    }
}

/// Complete text style: colors and attributes.
///
/// `None` for a color means "inherit from the surrounding output" rather than
/// a specific color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Rgb>,
    /// Background color.
    pub bg: Option<Rgb>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a style with only foreground color.
    #[must_use]
    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only background color.
    #[must_use]
    pub const fn bg(color: Rgb) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self::NONE.with_attributes(TextAttributes::BOLD)
    }

    /// Create an italic style.
    #[must_use]
    pub const fn italic() -> Self {
        Self::NONE.with_attributes(TextAttributes::ITALIC)
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Rgb) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgb) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified attributes added.
    #[must_use]
    pub const fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attrs),
            ..self
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    /// Return a new style with the italic attribute added.
    #[must_use]
    pub const fn with_italic(self) -> Self {
        self.with_attributes(TextAttributes::ITALIC)
    }

    /// Return a new style with the underline attribute added.
    #[must_use]
    pub const fn with_underline(self) -> Self {
        self.with_attributes(TextAttributes::UNDERLINE)
    }

    /// Return a new style with the dim attribute added.
    #[must_use]
    pub const fn with_dim(self) -> Self {
        self.with_attributes(TextAttributes::DIM)
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Merge two styles, with `other` taking precedence for set values.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_merge() {
        let base = Style::fg(Rgb::RED).with_bold();
        let overlay = Style::bg(Rgb::BLACK).with_italic();

        let merged = base.merge(overlay);

        assert_eq!(merged.fg, Some(Rgb::RED));
        assert_eq!(merged.bg, Some(Rgb::BLACK));
        assert!(merged.attributes.contains(TextAttributes::BOLD));
        assert!(merged.attributes.contains(TextAttributes::ITALIC));
    }

    #[test]
    fn test_merge_overlay_color_wins() {
        let merged = Style::fg(Rgb::RED).merge(Style::fg(Rgb::WHITE));
        assert_eq!(merged.fg, Some(Rgb::WHITE));
    }

    #[test]
    fn test_const_styles() {
        assert!(Style::bold().attributes.contains(TextAttributes::BOLD));
        assert!(Style::italic().attributes.contains(TextAttributes::ITALIC));
        assert!(Style::NONE.is_empty());
        assert!(!Style::bold().is_empty());
    }

    #[test]
    fn test_sgr_codes_in_order() {
        let attrs = TextAttributes::UNDERLINE | TextAttributes::BOLD | TextAttributes::ITALIC;
        let codes: Vec<u8> = attrs.sgr_codes().collect();
        assert_eq!(codes, vec![1, 3, 4]);
        assert_eq!(TextAttributes::empty().sgr_codes().count(), 0);
    }
}
