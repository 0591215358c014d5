use crate::measure::Measure;
use crate::units::Px;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or rasterizing a font
#[derive(Error, Debug)]
pub enum FontError {
    #[error(transparent)]
    /// An I/O error occurred while reading the font file
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("failed to prepare font for rasterization: {0}")]
    /// [fontdue] rejected the font data
    Raster(&'static str),
}

/// The coverage mask of a single rendered glyph, positioned relative to the pen.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    /// Horizontal offset of the bitmap from the pen position
    pub left: i32,
    /// Vertical offset of the bitmap from the top of the line, growing downwards
    pub top: i32,
    /// How far to move the pen after this glyph
    pub advance: Px,
    /// Row-major alpha coverage, `width * height` bytes
    pub coverage: Vec<u8>,
}

impl GlyphBitmap {
    /// A glyph with nothing to draw, such as a space
    pub fn empty(advance: Px) -> GlyphBitmap {
        GlyphBitmap {
            width: 0,
            height: 0,
            left: 0,
            top: 0,
            advance,
            coverage: Vec::new(),
        }
    }
}

/// A face that can be both measured and drawn. Anything composited onto a slide
/// goes through this trait so that measuring and drawing agree on every advance.
pub trait Typeface: Measure {
    /// Distance from the top of the line to the baseline at `size`
    fn ascent(&self, size: u32) -> Px;

    /// Render a single character at `size`
    fn rasterize(&self, ch: char, size: u32) -> GlyphBitmap;
}

/// A parsed TrueType or OpenType font.
///
/// Metrics (advances, ascent, bounding boxes) are read with [owned_ttf_parser]; glyph
/// coverage is rendered with [fontdue] from the same bytes. Sizes are pixels per em,
/// so a 48px font has an em square 48 pixels tall.
pub struct Font {
    pub face: OwnedFace,
    raster: fontdue::Font,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.name())
            .field("units_per_em", &self.face.as_face_ref().units_per_em())
            .finish()
    }
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, FontError> {
        let raster = fontdue::Font::from_bytes(bytes.as_slice(), fontdue::FontSettings::default())
            .map_err(FontError::Raster)?;
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face, raster })
    }

    /// Read and parse a font file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Font, FontError> {
        let bytes = std::fs::read(path.as_ref())?;
        let font = Self::load(bytes)?;
        log::debug!(
            "loaded font {:?} from {}",
            font.name().unwrap_or_default(),
            path.as_ref().display()
        );
        Ok(font)
    }

    /// Obtain the full name of the font, if it carries one
    pub fn name(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// Obtain the family name of the font, if it carries one
    pub fn family(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FAMILY)
    }

    fn name_entry(&self, id: u16) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: u32) -> f32 {
        size as f32 / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: u32) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().ascender() as f32)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: u32) -> Px {
        Px(self.scaling(size) * self.face.as_face_ref().descender() as f32)
    }

    /// Calculate the default line height of the font for the given size, independent of
    /// which glyphs end up on the line
    pub fn default_line_height(&self, size: u32) -> Px {
        let scaling = self.scaling(size);
        let face = self.face.as_face_ref();
        Px(scaling * (face.line_gap() as f32 + face.ascender() as f32 - face.descender() as f32))
    }

    fn glyph(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// Calculate the width of a given string of text at the given size
    pub fn width_of_text(&self, text: &str, size: u32) -> Px {
        let scaling = self.scaling(size);
        let face = self.face.as_face_ref();
        text.chars()
            .filter_map(|ch| self.glyph(ch))
            .map(|gid| Px(scaling * face.glyph_hor_advance(gid).unwrap_or_default() as f32))
            .sum()
    }

    /// Height of `text` from the top of the ascender to the lowest point any of its
    /// glyphs reach. Lines without descenders come out at the ascent.
    pub fn height_of_text(&self, text: &str, size: u32) -> Px {
        let face = self.face.as_face_ref();
        let lowest = text
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .filter_map(|ch| self.glyph(ch))
            .filter_map(|gid| face.glyph_bounding_box(gid))
            .map(|bbox| bbox.y_min)
            .min();

        match lowest {
            Some(y_min) => self.ascent(size) - Px(self.scaling(size) * y_min.min(0) as f32),
            None => Px::ZERO,
        }
    }
}

impl Measure for Font {
    fn text_width(&self, text: &str, size: u32) -> Px {
        self.width_of_text(text, size)
    }

    fn line_height(&self, text: &str, size: u32) -> Px {
        self.height_of_text(text, size)
    }
}

impl Typeface for Font {
    fn ascent(&self, size: u32) -> Px {
        Font::ascent(self, size)
    }

    fn rasterize(&self, ch: char, size: u32) -> GlyphBitmap {
        let advance = self.width_of_text(ch.encode_utf8(&mut [0; 4]), size);
        if ch.is_whitespace() {
            return GlyphBitmap::empty(advance);
        }

        let (metrics, coverage) = self.raster.rasterize(ch, size as f32);
        // fontdue reports the bitmap's bottom edge relative to the baseline, y up
        let baseline = Font::ascent(self, size).round() as i32;
        GlyphBitmap {
            width: metrics.width,
            height: metrics.height,
            left: metrics.xmin,
            top: baseline - (metrics.ymin + metrics.height as i32),
            advance,
            coverage,
        }
    }
}
