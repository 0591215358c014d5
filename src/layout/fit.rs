use super::{wrap, LayoutError, WrappedLine};
use crate::measure::Measure;
use crate::units::Px;

/// The smallest size searched by default
pub const MIN_FONT_SIZE: u32 = 10;
/// The largest size searched by default
pub const MAX_FONT_SIZE: u32 = 400;

/// Bounds and spacing for the font size search
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitOptions {
    /// Smallest acceptable size; clamped to at least 1
    pub min_size: u32,
    /// Largest size to consider; text that fits at this size is not grown further
    pub max_size: u32,
    /// Extra space added between consecutive lines when summing their heights
    pub line_spacing: Px,
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions {
            min_size: MIN_FONT_SIZE,
            max_size: MAX_FONT_SIZE,
            line_spacing: Px::ZERO,
        }
    }
}

/// Text wrapped at the largest size that fits its box
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText<'t> {
    pub size: u32,
    pub lines: Vec<WrappedLine<'t>>,
    /// Total height of the lines, spacing included
    pub height: Px,
}

/// Finds the largest font size at which `text` wraps into a `max_width` by
/// `max_height` box, searching the default size range.
///
/// See [fit_font_with] for the details.
pub fn fit_font<'t, M: Measure + ?Sized>(
    text: &'t str,
    font: &M,
    max_width: Px,
    max_height: Px,
) -> Result<FittedText<'t>, LayoutError> {
    fit_font_with(text, font, max_width, max_height, &FitOptions::default())
}

/// Finds the largest font size in `options`' range at which `text` fits its box.
///
/// A size fits when the wrapped lines' heights (plus `line_spacing` between lines)
/// add up to no more than `max_height`, and no wrapped line is wider than `max_width`.
/// A word too long for the box therefore forces a smaller size rather than being
/// allowed to overflow.
///
/// Fitting is monotonic in size, so the range is binary searched. Text without any
/// words fits trivially at the minimum size. If even the minimum size does not fit,
/// [LayoutError::UnfittableContent] is returned; this never hands back a size of zero.
pub fn fit_font_with<'t, M: Measure + ?Sized>(
    text: &'t str,
    font: &M,
    max_width: Px,
    max_height: Px,
    options: &FitOptions,
) -> Result<FittedText<'t>, LayoutError> {
    let min_size = options.min_size.max(1);
    let max_size = options.max_size.max(min_size);

    if text.split_whitespace().next().is_none() {
        return Ok(FittedText {
            size: min_size,
            lines: Vec::new(),
            height: Px::ZERO,
        });
    }

    let attempt = |size: u32| -> Option<FittedText<'t>> {
        let lines = wrap(text, font, size, max_width);
        if lines
            .iter()
            .any(|line| font.text_width(&line.text(), size) > max_width)
        {
            return None;
        }

        let spacing = options.line_spacing * lines.len().saturating_sub(1) as f32;
        let height: Px = lines
            .iter()
            .map(|line| font.line_height(&line.text(), size))
            .sum::<Px>()
            + spacing;

        (height <= max_height).then_some(FittedText {
            size,
            lines,
            height,
        })
    };

    let mut best = attempt(min_size).ok_or(LayoutError::UnfittableContent {
        min_size,
        max_width,
        max_height,
    })?;

    if let Some(fitted) = attempt(max_size) {
        best = fitted;
    } else {
        // best always fits and `hi` never does
        let mut hi = max_size;
        while hi - best.size > 1 {
            let mid = best.size + (hi - best.size) / 2;
            match attempt(mid) {
                Some(fitted) => best = fitted,
                None => hi = mid,
            }
        }
    }

    log::debug!(
        "fitted {} words into {}x{} at size {} over {} lines",
        best.lines.iter().map(WrappedLine::len).sum::<usize>(),
        max_width,
        max_height,
        best.size,
        best.lines.len()
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedAdvance;

    // 0.5px per character and 1px per line for each unit of size
    fn face() -> FixedAdvance {
        FixedAdvance::new(0.5, 1.0)
    }

    fn linear_search(text: &str, font: &FixedAdvance, w: Px, h: Px, options: &FitOptions) -> u32 {
        let mut size = options.min_size;
        while size <= options.max_size {
            let lines = wrap(text, font, size, w);
            let height: Px = lines
                .iter()
                .map(|l| font.line_height(&l.text(), size))
                .sum::<Px>()
                + options.line_spacing * lines.len().saturating_sub(1) as f32;
            if height > h || lines.iter().any(|l| font.text_width(&l.text(), size) > w) {
                break;
            }
            size += 1;
        }
        size - 1
    }

    #[test]
    fn empty_text_fits_at_the_minimum() {
        let fitted = fit_font("   ", &face(), Px(10.0), Px(10.0)).expect("empty text fits");
        assert_eq!(fitted.size, MIN_FONT_SIZE);
        assert!(fitted.lines.is_empty());
        assert_eq!(fitted.height, Px::ZERO);
    }

    #[test]
    fn single_line_grows_until_height_binds() {
        // "abcd" is 2*size wide and size tall
        let fitted = fit_font("abcd", &face(), Px(100.0), Px(37.0)).expect("fits");
        assert_eq!(fitted.size, 37);
        assert_eq!(fitted.lines.len(), 1);
    }

    #[test]
    fn single_line_grows_until_width_binds() {
        let fitted = fit_font("abcd", &face(), Px(50.0), Px(1000.0)).expect("fits");
        assert_eq!(fitted.size, 25);
    }

    #[test]
    fn overlong_word_forces_smaller_size() {
        let err = fit_font("abcdefghijklmnopqrst", &face(), Px(50.0), Px(1000.0))
            .expect_err("twenty characters at size 10 are 100px wide");
        assert_eq!(
            err,
            LayoutError::UnfittableContent {
                min_size: 10,
                max_width: Px(50.0),
                max_height: Px(1000.0),
            }
        );
    }

    #[test]
    fn capped_at_the_maximum_size() {
        let options = FitOptions {
            max_size: 40,
            ..FitOptions::default()
        };
        let fitted = fit_font_with("ab", &face(), Px(1000.0), Px(1000.0), &options).expect("fits");
        assert_eq!(fitted.size, 40);
    }

    #[test]
    fn minimum_is_clamped_to_one() {
        let options = FitOptions {
            min_size: 0,
            max_size: 3,
            ..FitOptions::default()
        };
        let fitted = fit_font_with("ab", &face(), Px(2.0), Px(2.0), &options).expect("fits");
        assert_eq!(fitted.size, 2);

        let err = fit_font_with("abcdef", &face(), Px(2.0), Px(2.0), &options)
            .expect_err("too wide even at size 1");
        assert!(matches!(err, LayoutError::UnfittableContent { min_size: 1, .. }));
    }

    #[test]
    fn line_spacing_counts_against_height() {
        let text = "aa bb cc dd";
        let plain = fit_font(text, &face(), Px(30.0), Px(60.0)).expect("fits");
        let spaced = fit_font_with(
            text,
            &face(),
            Px(30.0),
            Px(60.0),
            &FitOptions {
                line_spacing: Px(10.0),
                ..FitOptions::default()
            },
        )
        .expect("fits");
        assert!(spaced.size < plain.size);
        assert!(spaced.height <= Px(60.0));
    }

    #[test]
    fn agrees_with_a_linear_search() {
        let text = "the quick brown fox jumps over the lazy dog and keeps on running";
        let options = FitOptions::default();
        for (w, h) in [(200.0, 100.0), (120.0, 300.0), (400.0, 40.0), (90.0, 900.0)] {
            let fitted = fit_font(text, &face(), Px(w), Px(h)).expect("fits");
            assert_eq!(
                fitted.size,
                linear_search(text, &face(), Px(w), Px(h), &options),
                "box {w}x{h}"
            );
        }
    }
}
