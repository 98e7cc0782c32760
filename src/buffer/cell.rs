//! Cell: One styled display unit of a framebuffer.
//!
//! A [`Cell`] pairs a single `char` with an opaque [`Style`]. The buffer
//! stores and compares cells but never interprets the style: whatever a
//! producer writes is handed back, bit for bit, to whatever renders it.

use bitflags::bitflags;

/// True-color RGB representation.
///
/// 3 bytes for 24-bit color depth. Style descriptors carry two of these,
/// one per plane.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Text attribute flags.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use tessera::Modifiers;
    /// let attrs = Modifiers::BOLD | Modifiers::ITALIC;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Blinking text
        const BLINK = 0b0001_0000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
        /// Hidden/invisible text
        const HIDDEN = 0b0100_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b1000_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// An opaque style descriptor: colors plus attribute flags.
///
/// The buffer carries styles through every operation unchanged. Equality
/// is field-for-field, so two cells with the same character but
/// different styles are different cells, and the diff algebra depends on
/// that.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Attribute flags.
    pub attrs: Modifiers,
}

impl Style {
    /// Default colors, no attributes.
    pub const DEFAULT: Self = Self {
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        attrs: Modifiers::empty(),
    };

    /// Create a style from both planes and attributes.
    #[inline]
    pub const fn new(fg: Rgb, bg: Rgb, attrs: Modifiers) -> Self {
        Self { fg, bg, attrs }
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the attribute flags (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_attrs(mut self, attrs: Modifiers) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Debug for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Style({:?} on {:?}, {:?})", self.fg, self.bg, self.attrs)
    }
}

/// A single framebuffer cell: one display unit plus its style.
///
/// Cells are small `Copy` values; a sparse buffer stores one per
/// occupied coordinate. Equality covers both the character and the
/// style.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    ch: char,
    style: Style,
}

impl Cell {
    /// Create a cell with the default style.
    #[inline]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            style: Style::DEFAULT,
        }
    }

    /// Create a cell with an explicit style.
    #[inline]
    pub const fn styled(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// The cell's character.
    #[inline]
    pub const fn ch(&self) -> char {
        self.ch
    }

    /// The cell's style descriptor.
    #[inline]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Display width in terminal columns (0, 1, or 2).
    ///
    /// Zero-width code points report 0; wide CJK characters report 2.
    #[inline]
    pub fn display_width(&self) -> u8 {
        unicode_width::UnicodeWidthChar::width(self.ch)
            .and_then(|w| u8::try_from(w).ok())
            .unwrap_or(0)
    }

    /// Replace the style (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.style.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.style.bg = bg;
        self
    }

    /// Set the attribute flags (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_attrs(mut self, attrs: Modifiers) -> Self {
        self.style.attrs = attrs;
        self
    }
}

impl From<char> for Cell {
    #[inline]
    fn from(ch: char) -> Self {
        Self::new(ch)
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({:?}, {:?})", self.ch, self.style)
    }
}
