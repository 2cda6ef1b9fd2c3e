//! Card layout.
//!
//! A card is a 200x300 canvas with the kanji written vertically from the top
//! and the romanji centered near the bottom. Long names get smaller glyphs
//! and shifted anchors so nothing clips:
//!
//! | kanji chars | kanji y | kanji size | romanji y |
//! |-------------|---------|------------|-----------|
//! | 1-2         | 50      | 45         | 250       |
//! | 3           | 50      | 40         | 250       |
//! | 4           | 20      | 40         | 270       |
//! | 5+          | 20      | 35         | 275       |
//!
//! | romanji chars | romanji size |
//! |---------------|--------------|
//! | <= 12         | 30           |
//! | 13-16         | 25           |
//! | 17+           | 22           |

use iro_core::EnrichedColor;

/// Canvas width in user units.
pub const CANVAS_WIDTH: u32 = 200;
/// Canvas height in user units.
pub const CANVAS_HEIGHT: u32 = 300;

/// Position and glyph size of one text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    /// Anchor x.
    pub x: u32,
    /// Anchor y.
    pub y: u32,
    /// Font size in px.
    pub size: u32,
}

impl Label {
    const fn new(x: u32, y: u32, size: u32) -> Self {
        Self { x, y, size }
    }
}

/// Label placement for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    /// Vertical kanji label.
    pub kanji: Label,
    /// Horizontal romanji label.
    pub romanji: Label,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            kanji: Label::new(100, 50, 45),
            romanji: Label::new(100, 250, 30),
        }
    }
}

impl CardLayout {
    /// Layout for a color's names.
    pub fn for_color(color: &EnrichedColor) -> Self {
        Self::for_lengths(color.kanji_len(), color.romanji_len())
    }

    /// Layout from name lengths in characters.
    ///
    /// ```rust
    /// use iro_render::CardLayout;
    ///
    /// let l = CardLayout::for_lengths(5, 11);
    /// assert_eq!((l.kanji.y, l.kanji.size, l.romanji.y), (20, 35, 275));
    /// assert_eq!(l.romanji.size, 30);
    /// ```
    pub fn for_lengths(kanji_len: usize, romanji_len: usize) -> Self {
        let mut layout = Self::default();

        match kanji_len {
            3 => layout.kanji.size = 40,
            4 => {
                layout.kanji.y = 20;
                layout.kanji.size = 40;
                layout.romanji.y = 270;
            }
            n if n > 4 => {
                layout.kanji.y = 20;
                layout.kanji.size = 35;
                layout.romanji.y = 275;
            }
            _ => {}
        }

        // both checks apply, the later one wins
        if romanji_len > 12 {
            layout.romanji.size = 25;
        }
        if romanji_len > 16 {
            layout.romanji.size = 22;
        }

        layout
    }
}
