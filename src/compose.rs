//! Slide composition: a fitted title, a picture and a fitted body paragraph stacked on
//! a portrait canvas.
//!
//! ```text
//!  +-----------------------+
//!  |                       |  title_top
//!  |    Title, centred     |  fitted to picture width x title_height
//!  |                       |  section_gap
//!  |   +---------------+   |
//!  |   |    picture    |   |  picture_height, aspect kept
//!  |   +---------------+   |
//!  |                       |  section_gap
//!  |   body text, fully    |  fitted to picture width x body_height
//!  |   justified to the    |
//!  |   picture's width     |
//!  +-----------------------+
//! ```

use crate::canvas::Canvas;
use crate::colour::{colours, Colour};
use crate::font::Typeface;
use crate::layout::{layout_block, Alignment, FitOptions, LayoutError, TextBlock};
use crate::picture::{fit_picture, PictureError};
use crate::units::Px;
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("title does not fit: {0}")]
    Title(#[source] LayoutError),

    #[error("body does not fit: {0}")]
    Body(#[source] LayoutError),

    #[error(transparent)]
    Picture(#[from] PictureError),
}

/// Geometry and colours of a composed slide. All lengths are in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideStyle {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Height the picture is scaled to, before clamping to the canvas width
    pub picture_height: u32,
    /// Distance from the top of the canvas to the first title line
    pub title_top: u32,
    /// Height of the box the title is fitted into
    pub title_height: u32,
    /// Height of the box the body is fitted into
    pub body_height: u32,
    /// Space between title, picture and body
    pub section_gap: u32,
    /// Space between consecutive lines of the same block
    pub line_spacing: u32,
    pub min_font_size: u32,
    pub max_font_size: u32,
    pub background: Colour,
    pub text: Colour,
}

impl Default for SlideStyle {
    fn default() -> Self {
        SlideStyle {
            canvas_width: 1080,
            canvas_height: 1920,
            picture_height: 700,
            title_top: 200,
            title_height: 150,
            body_height: 600,
            section_gap: 50,
            line_spacing: 10,
            min_font_size: crate::layout::MIN_FONT_SIZE,
            max_font_size: crate::layout::MAX_FONT_SIZE,
            background: colours::PARCHMENT,
            text: colours::CHARCOAL,
        }
    }
}

impl SlideStyle {
    fn fit_options(&self) -> FitOptions {
        FitOptions {
            min_size: self.min_font_size,
            max_size: self.max_font_size,
            line_spacing: Px::from(self.line_spacing),
        }
    }
}

/// The faces titles and body text are set in
#[derive(Clone, Copy)]
pub struct SlideFonts<'f> {
    pub title: &'f dyn Typeface,
    pub body: &'f dyn Typeface,
}

impl<'f> SlideFonts<'f> {
    /// Use the same face for titles and body text
    pub fn single(face: &'f dyn Typeface) -> SlideFonts<'f> {
        SlideFonts {
            title: face,
            body: face,
        }
    }
}

/// What ended up where on a composed slide
#[derive(Debug, Clone, PartialEq)]
pub struct SlideGeometry {
    pub title_size: u32,
    pub title_lines: usize,
    pub body_size: u32,
    pub body_lines: usize,
    /// Top left corner and size of the pasted picture
    pub picture: (i64, i64, u32, u32),
    /// Where the y cursor finished after the last body line
    pub bottom: Px,
}

/// A finished slide and its layout
#[derive(Debug, Clone)]
pub struct ComposedSlide {
    pub canvas: Canvas,
    pub geometry: SlideGeometry,
}

/// Paint `title`, `picture` and `body` onto a fresh canvas laid out per `style`.
///
/// The picture is scaled first; its width becomes the width of both text boxes. The
/// title is centred on the canvas and the body is justified to the picture's edges.
pub fn compose_slide(
    style: &SlideStyle,
    fonts: SlideFonts<'_>,
    title: &str,
    body: &str,
    picture: &DynamicImage,
) -> Result<ComposedSlide, ComposeError> {
    let picture = fit_picture(picture, style.picture_height, style.canvas_width)?;
    let (picture_width, picture_height) = picture.dimensions();
    let box_width = Px::from(picture_width);
    let options = style.fit_options();

    let mut canvas = Canvas::new(style.canvas_width, style.canvas_height, style.background);
    let spacing = Px::from(style.line_spacing);

    let title_block = layout_block(
        title,
        fonts.title,
        box_width,
        Px::from(style.title_height),
        Alignment::Centered {
            canvas_width: Px::from(style.canvas_width),
        },
        &options,
    )
    .map_err(ComposeError::Title)?;
    let y = draw_block(
        &mut canvas,
        fonts.title,
        &title_block,
        Px::ZERO,
        Px::from(style.title_top),
        spacing,
        style.text,
    );

    let picture_x = (style.canvas_width as i64 - picture_width as i64) / 2;
    let picture_y = y.round() + style.section_gap as i64;
    canvas.paste(&picture, picture_x, picture_y);

    let body_block = layout_block(
        body,
        fonts.body,
        box_width,
        Px::from(style.body_height),
        Alignment::Left,
        &options,
    )
    .map_err(ComposeError::Body)?;
    let body_top = picture_y + picture_height as i64 + style.section_gap as i64;
    let bottom = draw_block(
        &mut canvas,
        fonts.body,
        &body_block,
        Px(picture_x as f32),
        Px(body_top as f32),
        spacing,
        style.text,
    );

    if bottom > Px::from(style.canvas_height) {
        log::warn!(
            "slide content runs {} past the bottom of the canvas",
            bottom - Px::from(style.canvas_height)
        );
    }

    let geometry = SlideGeometry {
        title_size: title_block.size,
        title_lines: title_block.lines.len(),
        body_size: body_block.size,
        body_lines: body_block.lines.len(),
        picture: (picture_x, picture_y, picture_width, picture_height),
        bottom,
    };
    log::debug!("composed slide: {geometry:?}");

    Ok(ComposedSlide { canvas, geometry })
}

/// Draw every line of `block` starting with the top of the first line at `top`,
/// offsetting word positions by `left`. Returns the y cursor after the last line.
fn draw_block(
    canvas: &mut Canvas,
    face: &dyn Typeface,
    block: &TextBlock<'_>,
    left: Px,
    top: Px,
    spacing: Px,
    colour: Colour,
) -> Px {
    let mut y = top;
    for line in &block.lines {
        for word in &line.line.words {
            canvas.draw_text(face, word.word, block.size, left + word.x, y, colour);
        }
        y += line.height + spacing;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedAdvance;

    fn small_style() -> SlideStyle {
        SlideStyle {
            canvas_width: 200,
            canvas_height: 400,
            picture_height: 100,
            title_top: 20,
            title_height: 30,
            body_height: 120,
            section_gap: 10,
            line_spacing: 4,
            min_font_size: 4,
            max_font_size: 60,
            ..SlideStyle::default()
        }
    }

    fn picture(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            colours::WHITE.into(),
        ))
    }

    #[test]
    fn default_style_matches_portrait_slides() {
        let style = SlideStyle::default();
        assert_eq!((style.canvas_width, style.canvas_height), (1080, 1920));
        assert_eq!(style.picture_height, 700);
        assert_eq!(style.background, colours::PARCHMENT);
        assert_eq!(style.text, colours::CHARCOAL);
    }

    #[test]
    fn stacks_title_picture_and_body() {
        let face = FixedAdvance::new(0.5, 1.0);
        let style = small_style();
        let slide = compose_slide(
            &style,
            SlideFonts::single(&face),
            "Impressionism",
            "painters left the studio to catch light as it changed across the day",
            &picture(150, 150),
        )
        .expect("composes");

        let geometry = &slide.geometry;
        // a single title line of 13 characters fitted to a 100x30 box
        assert_eq!(geometry.title_lines, 1);
        assert_eq!(geometry.title_size, 15);

        // title ends at 20 + 15 + 4, picture follows after the gap
        let (x, y, w, h) = geometry.picture;
        assert_eq!((x, y, w, h), (50, 49, 100, 100));
        assert_eq!(slide.canvas.pixel(100, 100), Some(colours::WHITE));

        // six lines of 15px, each followed by 4px of spacing
        assert_eq!((geometry.body_size, geometry.body_lines), (15, 6));
        assert_eq!(geometry.bottom, Px(159.0 + 6.0 * 19.0));

        // the title is centred: (200 - 97.5) / 2, rounded to the pixel
        let title_row = 25;
        let first_ink = (0..200)
            .find(|&x| slide.canvas.pixel(x, title_row) == Some(colours::CHARCOAL))
            .expect("title is drawn");
        assert_eq!(first_ink, 51);

        // background stays untouched outside the content
        assert_eq!(slide.canvas.pixel(0, 0), Some(colours::PARCHMENT));
    }

    #[test]
    fn unfittable_body_is_reported() {
        let face = FixedAdvance::new(0.5, 1.0);
        let style = small_style();
        let body = lipsum::lipsum(400);
        let err = compose_slide(&style, SlideFonts::single(&face), "Title", &body, &picture(150, 150))
            .expect_err("four hundred words cannot fit 100x120 at size 4");
        assert!(matches!(
            err,
            ComposeError::Body(LayoutError::UnfittableContent { min_size: 4, .. })
        ));
    }

    #[test]
    fn empty_picture_is_reported() {
        let face = FixedAdvance::default();
        let err = compose_slide(
            &small_style(),
            SlideFonts::single(&face),
            "Title",
            "body",
            &DynamicImage::new_rgb8(0, 0),
        )
        .expect_err("no pixels");
        assert!(matches!(err, ComposeError::Picture(PictureError::Empty { .. })));
    }
}
