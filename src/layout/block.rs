use super::{fit_font_with, justify, Alignment, FitOptions, JustifiedLine, LayoutError};
use crate::measure::Measure;
use crate::units::Px;

/// One justified line of a [TextBlock], with the height it occupies
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLine<'t> {
    pub line: JustifiedLine<'t>,
    pub height: Px,
}

/// A text block fitted to a box and justified, ready to be drawn line by line: draw
/// each line at the current y cursor, then advance the cursor by the line's height
/// plus whatever spacing the caller uses.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock<'t> {
    pub size: u32,
    pub lines: Vec<BlockLine<'t>>,
}

impl<'t> TextBlock<'t> {
    /// Total height of the block when consecutive lines are `line_spacing` apart
    pub fn height(&self, line_spacing: Px) -> Px {
        let lines: Px = self.lines.iter().map(|l| l.height).sum();
        lines + line_spacing * self.lines.len().saturating_sub(1) as f32
    }

    /// True if any line had to overlap its words to stay within the box
    pub fn overlaps(&self) -> bool {
        self.lines.iter().any(|l| l.line.overlaps())
    }
}

/// Fits `text` into a `max_width` by `max_height` box and justifies every line with
/// `alignment`.
pub fn layout_block<'t, M: Measure + ?Sized>(
    text: &'t str,
    font: &M,
    max_width: Px,
    max_height: Px,
    alignment: Alignment,
    options: &FitOptions,
) -> Result<TextBlock<'t>, LayoutError> {
    let fitted = fit_font_with(text, font, max_width, max_height, options)?;
    let size = fitted.size;

    let lines = fitted
        .lines
        .iter()
        .map(|wrapped| BlockLine {
            line: justify(wrapped, font, size, max_width, alignment),
            height: font.line_height(&wrapped.text(), size),
        })
        .collect();

    Ok(TextBlock { size, lines })
}
