//! The font-measurement capability the layout engine is written against.
//!
//! Layout never touches a font file directly: it only asks "how wide is this string"
//! and "how tall is this line" at a given integer size. [`Font`](crate::Font) answers
//! those from real glyph metrics; [`FixedAdvance`] answers them arithmetically, which
//! keeps layouts reproducible without any font file on hand.

use crate::font::{GlyphBitmap, Typeface};
use crate::units::Px;

/// Something that can measure text rendered at an integer font size.
///
/// Implementations must be pure: measuring the same string at the same size always
/// yields the same answer. Layout relies on widths growing with size, so that a text
/// that fits at size `n` also fits at every size below `n`.
pub trait Measure {
    /// Horizontal advance of `text` laid out on a single line
    fn text_width(&self, text: &str, size: u32) -> Px;

    /// Vertical extent of `text` as one rendered line, measured from the top of the
    /// line down to the lowest inked pixel
    fn line_height(&self, text: &str, size: u32) -> Px;
}

impl<M: Measure + ?Sized> Measure for &M {
    fn text_width(&self, text: &str, size: u32) -> Px {
        (**self).text_width(text, size)
    }

    fn line_height(&self, text: &str, size: u32) -> Px {
        (**self).line_height(text, size)
    }
}

/// A heuristic face where every character advances by the same fraction of the em
/// and every line is the same height. Glyphs rasterize as solid blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    /// Advance of every character, as a fraction of the font size
    pub advance: f32,
    /// Height of every line, as a fraction of the font size
    pub line: f32,
}

impl FixedAdvance {
    pub fn new(advance: f32, line: f32) -> FixedAdvance {
        FixedAdvance { advance, line }
    }
}

impl Default for FixedAdvance {
    fn default() -> Self {
        FixedAdvance {
            advance: 0.6,
            line: 1.0,
        }
    }
}

impl Measure for FixedAdvance {
    fn text_width(&self, text: &str, size: u32) -> Px {
        Px(self.advance * size as f32 * text.chars().count() as f32)
    }

    fn line_height(&self, text: &str, size: u32) -> Px {
        if text.is_empty() {
            Px::ZERO
        } else {
            Px(self.line * size as f32)
        }
    }
}

impl Typeface for FixedAdvance {
    fn ascent(&self, size: u32) -> Px {
        Px(self.line * size as f32)
    }

    fn rasterize(&self, ch: char, size: u32) -> GlyphBitmap {
        let advance = Px(self.advance * size as f32);
        if ch.is_whitespace() {
            return GlyphBitmap::empty(advance);
        }

        let width = advance.0.round().max(0.0) as usize;
        let height = (self.line * size as f32).round().max(0.0) as usize;
        GlyphBitmap {
            width,
            height,
            left: 0,
            top: 0,
            advance,
            coverage: vec![255; width * height],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_scale_with_size_and_length() {
        let face = FixedAdvance::new(0.5, 1.2);
        assert_eq!(face.text_width("abcd", 10), Px(20.0));
        assert_eq!(face.text_width("abcd", 20), Px(40.0));
        assert_eq!(face.text_width("", 20), Px::ZERO);
    }

    #[test]
    fn line_height_ignores_content() {
        let face = FixedAdvance::new(0.5, 1.2);
        assert_eq!(face.line_height("gjpq", 10), Px(12.0));
        assert_eq!(face.line_height("xx", 10), Px(12.0));
        assert_eq!(face.line_height("", 10), Px::ZERO);
    }

    #[test]
    fn measure_through_reference() {
        let face = FixedAdvance::default();
        let by_ref: &dyn Measure = &face;
        assert_eq!(by_ref.text_width("ab", 10), face.text_width("ab", 10));
    }

    #[test]
    fn block_glyphs_cover_their_cell() {
        let face = FixedAdvance::new(0.5, 1.0);
        let glyph = face.rasterize('x', 10);
        assert_eq!((glyph.width, glyph.height), (5, 10));
        assert!(glyph.coverage.iter().all(|&c| c == 255));

        let space = face.rasterize(' ', 10);
        assert!(space.coverage.is_empty());
        assert_eq!(space.advance, Px(5.0));
    }
}
