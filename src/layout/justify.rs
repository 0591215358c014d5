use super::WrappedLine;
use crate::measure::Measure;
use crate::units::Px;

/// Where a justified line sits horizontally
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Alignment {
    /// Spread words across the box starting at offset 0. Single words sit at 0.
    Left,
    /// Spread words across the box, and centre the box on a canvas of the given width.
    /// Single words are centred on the canvas directly.
    Centered { canvas_width: Px },
}

/// A word and the horizontal offset it should be drawn at.
///
/// Offsets stay fractional so that rounding error does not build up along a line;
/// [PlacedWord::pixel_x] gives the whole-pixel column the word is drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord<'t> {
    pub word: &'t str,
    pub x: Px,
    pub width: Px,
}

impl PlacedWord<'_> {
    /// Offset rounded to the nearest pixel, as used when drawing
    pub fn pixel_x(&self) -> i64 {
        self.x.round()
    }
}

/// The words of one line with their horizontal offsets, left to right
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JustifiedLine<'t> {
    pub words: Vec<PlacedWord<'t>>,
    /// Space inserted between neighbouring words; `None` when the line has fewer than
    /// two words
    pub gap: Option<Px>,
}

impl<'t> JustifiedLine<'t> {
    /// True when the box was narrower than the words themselves, so the gap went
    /// negative and neighbouring words overlap. The line is still usable.
    pub fn overlaps(&self) -> bool {
        self.gap.is_some_and(|gap| gap < Px::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Spreads the words of `line` so that the first starts at the left edge of a
/// `max_width` box and the last ends exactly at its right edge, with equal gaps in
/// between.
///
/// If the words together are wider than the box the gap is negative and words
/// overlap; this is reported through [JustifiedLine::overlaps] rather than treated as
/// an error.
pub fn justify<'t, M: Measure + ?Sized>(
    line: &WrappedLine<'t>,
    font: &M,
    size: u32,
    max_width: Px,
    alignment: Alignment,
) -> JustifiedLine<'t> {
    let widths: Vec<Px> = line
        .words
        .iter()
        .map(|word| font.text_width(word, size))
        .collect();

    match (line.words.as_slice(), widths.as_slice()) {
        ([], _) => JustifiedLine::default(),
        ([word], [width]) => {
            let x = match alignment {
                Alignment::Left => Px::ZERO,
                Alignment::Centered { canvas_width } => (canvas_width - *width) / 2.0,
            };
            JustifiedLine {
                words: vec![PlacedWord {
                    word: *word,
                    x,
                    width: *width,
                }],
                gap: None,
            }
        }
        (words, widths) => {
            let words_width: Px = widths.iter().copied().sum();
            let gap = (max_width - words_width) / (words.len() - 1) as f32;
            if gap < Px::ZERO {
                log::warn!(
                    "line {:?} is {} wide but its box is only {}; words will overlap",
                    line.text(),
                    words_width,
                    max_width
                );
            }

            let mut x = match alignment {
                Alignment::Left => Px::ZERO,
                Alignment::Centered { canvas_width } => (canvas_width - max_width) / 2.0,
            };
            let mut placed = Vec::with_capacity(words.len());
            for (word, width) in words.iter().zip(widths.iter()) {
                placed.push(PlacedWord {
                    word: *word,
                    x,
                    width: *width,
                });
                x += *width + gap;
            }

            JustifiedLine {
                words: placed,
                gap: Some(gap),
            }
        }
    }
}
