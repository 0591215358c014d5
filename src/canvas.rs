use crate::colour::Colour;
use crate::font::{GlyphBitmap, Typeface};
use crate::units::Px;
use image::{Rgb, RgbImage};
use std::path::Path;

/// An RGB raster that slides are painted onto.
///
/// Coordinates are in pixels with the origin in the top left corner; anything drawn
/// outside the canvas is clipped.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub image: RgbImage,
}

impl Canvas {
    /// A canvas of the given size filled with `background`
    pub fn new(width: u32, height: u32, background: Colour) -> Canvas {
        Canvas {
            image: RgbImage::from_pixel(width, height, background.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        (x < self.width() && y < self.height()).then(|| (*self.image.get_pixel(x, y)).into())
    }

    /// Copy `picture` onto the canvas with its top left corner at (`x`, `y`)
    pub fn paste(&mut self, picture: &RgbImage, x: i64, y: i64) {
        image::imageops::overlay(&mut self.image, picture, x, y);
    }

    /// Blend a glyph's coverage onto the canvas in `colour`, with the glyph's
    /// origin at (`x`, `y`)
    pub fn draw_glyph(&mut self, glyph: &GlyphBitmap, x: i64, y: i64, colour: Colour) {
        let left = x + glyph.left as i64;
        let top = y + glyph.top as i64;
        let (width, height) = (self.width() as i64, self.height() as i64);

        for row in 0..glyph.height {
            let py = top + row as i64;
            if py < 0 || py >= height {
                continue;
            }
            for col in 0..glyph.width {
                let px = left + col as i64;
                if px < 0 || px >= width {
                    continue;
                }

                let coverage = glyph.coverage[row * glyph.width + col];
                if coverage == 0 {
                    continue;
                }

                let pixel = self.image.get_pixel_mut(px as u32, py as u32);
                let blended = colour.blend_over((*pixel).into(), coverage);
                *pixel = Rgb::from(blended);
            }
        }
    }

    /// Draw `text` on a single line with the top of the line at `y`, starting at `x`.
    /// Returns the x coordinate the pen finished at.
    pub fn draw_text<T: Typeface + ?Sized>(
        &mut self,
        face: &T,
        text: &str,
        size: u32,
        x: Px,
        y: Px,
        colour: Colour,
    ) -> Px {
        let mut pen = x;
        for ch in text.chars() {
            let glyph = face.rasterize(ch, size);
            self.draw_glyph(&glyph, pen.round(), y.round(), colour);
            pen += glyph.advance;
        }
        pen
    }

    /// Write the canvas out; the format is chosen from the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.image.save(path)
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
