use approx::assert_abs_diff_eq;
use slide_gen::layout::{
    fit_font, fit_font_with, justify, layout_block, wrap, Alignment, FitOptions, LayoutError,
    WrappedLine,
};
use slide_gen::{Measure, Px};

/// Character widths that vary the way a proportional face's do, and add up exactly
struct Proportional;

impl Proportional {
    fn advance(ch: char) -> f32 {
        match ch {
            'i' | 'l' | 'j' | 't' | 'f' | '.' | ',' | ' ' => 0.3,
            'm' | 'w' | 'M' | 'W' => 0.9,
            c if c.is_uppercase() => 0.7,
            _ => 0.55,
        }
    }
}

impl Measure for Proportional {
    fn text_width(&self, text: &str, size: u32) -> Px {
        Px(text.chars().map(Proportional::advance).sum::<f32>() * size as f32)
    }

    fn line_height(&self, text: &str, size: u32) -> Px {
        if text.is_empty() {
            Px::ZERO
        } else {
            Px(1.2 * size as f32)
        }
    }
}

fn flatten<'t>(lines: &[WrappedLine<'t>]) -> Vec<&'t str> {
    lines.iter().flat_map(|l| l.words.iter().copied()).collect()
}

#[test]
fn wrapped_lines_stay_within_the_width() {
    let text = lipsum::lipsum(250);
    for width in [80.0, 150.0, 333.0, 1000.0] {
        let lines = wrap(&text, &Proportional, 16, Px(width));
        assert!(!lines.is_empty());
        for line in &lines {
            assert!(!line.is_empty());
            if line.len() > 1 {
                assert!(Proportional.text_width(&line.text(), 16) <= Px(width));
            }
        }
    }
}

#[test]
fn wrapping_keeps_every_word_in_order() {
    let text = format!("  {}\n\n\t{}  ", lipsum::lipsum(120), lipsum::lipsum(40));
    let lines = wrap(&text, &Proportional, 22, Px(240.0));
    let words: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(flatten(&lines), words);
}

#[test]
fn splits_at_the_width_of_the_first_pair() {
    let face = Proportional;
    let width = face.text_width("alpha beta", 12);
    let lines = wrap("alpha beta gamma delta", &face, 12, width);
    let lines: Vec<String> = lines.iter().map(WrappedLine::text).collect();
    assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
}

#[test]
fn overlong_word_sits_alone() {
    let lines = wrap("Pneumonoultramicroscopicsilicovolcanoconiosis", &Proportional, 30, Px(50.0));
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].words, vec!["Pneumonoultramicroscopicsilicovolcanoconiosis"]);

    let lines = wrap("a Pneumonoultramicroscopic b", &Proportional, 30, Px(50.0));
    let lines: Vec<String> = lines.iter().map(WrappedLine::text).collect();
    assert_eq!(lines, vec!["a", "Pneumonoultramicroscopic", "b"]);
}

#[test]
fn left_justified_lines_fill_the_box() {
    let face = Proportional;
    let max_width = Px(300.0);
    let text = lipsum::lipsum(150);

    for wrapped in wrap(&text, &face, 18, max_width).iter().filter(|l| l.len() >= 2) {
        let line = justify(wrapped, &face, 18, max_width, Alignment::Left);
        assert!(!line.overlaps());
        assert_eq!(line.words[0].x, Px::ZERO);
        for pair in line.words.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }

        let last = line.words.last().expect("at least two words");
        assert_abs_diff_eq!((last.x + last.width).0, max_width.0, epsilon = 1e-3);
    }
}

#[test]
fn centred_lines_sit_in_the_middle_of_the_canvas() {
    let face = Proportional;
    let canvas_width = Px(1080.0);
    let alignment = Alignment::Centered { canvas_width };

    let single = wrap("Surrealism", &face, 40, Px(600.0));
    let line = justify(&single[0], &face, 40, Px(600.0), alignment);
    let expected = (canvas_width - face.text_width("Surrealism", 40)) / 2.0;
    assert_abs_diff_eq!(line.words[0].x.0, expected.0, epsilon = 1e-3);

    let pair = wrap("Dada Manifesto", &face, 40, Px(600.0));
    assert_eq!(pair.len(), 1);
    let line = justify(&pair[0], &face, 40, Px(600.0), alignment);
    assert_abs_diff_eq!(line.words[0].x.0, 240.0, epsilon = 1e-3);
    let last = &line.words[1];
    assert_abs_diff_eq!((last.x + last.width).0, 840.0, epsilon = 1e-3);
}

#[test]
fn fitted_size_grows_with_the_box() {
    let text = lipsum::lipsum(40);
    let options = FitOptions {
        min_size: 1,
        ..FitOptions::default()
    };
    let size = |w: f32, h: f32| {
        fit_font_with(&text, &Proportional, Px(w), Px(h), &options)
            .map(|fitted| fitted.size)
            .unwrap_or(0)
    };

    let mut previous = 0;
    for width in (100..=1500).step_by(100) {
        let s = size(width as f32, 400.0);
        assert!(s >= previous, "width {width}: {s} < {previous}");
        previous = s;
    }

    let mut previous = 0;
    for height in (50..=1500).step_by(50) {
        let s = size(600.0, height as f32);
        assert!(s >= previous, "height {height}: {s} < {previous}");
        previous = s;
    }
}

#[test]
fn fitted_size_is_the_largest_that_fits() {
    let text = lipsum::lipsum(60);
    let (w, h) = (Px(500.0), Px(700.0));
    let fitted = fit_font(&text, &Proportional, w, h).expect("fits");
    assert!(fitted.height <= h);
    assert!(fitted.size < 400);

    let bigger = wrap(&text, &Proportional, fitted.size + 1, w);
    let too_wide = bigger
        .iter()
        .any(|l| Proportional.text_width(&l.text(), fitted.size + 1) > w);
    let too_tall = bigger.len() as f32 * 1.2 * (fitted.size + 1) as f32 > h.0;
    assert!(too_wide || too_tall);
}

#[test]
fn empty_text_fits_at_the_minimum_size() {
    for text in ["", "   ", "\n\t "] {
        let fitted = fit_font(text, &Proportional, Px(100.0), Px(100.0)).expect("never fails");
        assert_eq!(fitted.size, 10);
        assert!(fitted.lines.is_empty());
    }
}

#[test]
fn content_too_large_for_the_box_is_an_error() {
    let text = lipsum::lipsum(500);
    let err = fit_font(&text, &Proportional, Px(200.0), Px(100.0)).expect_err("far too much text");
    assert_eq!(
        err,
        LayoutError::UnfittableContent {
            min_size: 10,
            max_width: Px(200.0),
            max_height: Px(100.0),
        }
    );
}

#[test]
fn block_layout_combines_fitting_and_justification() {
    let text = lipsum::lipsum(50);
    let options = FitOptions {
        line_spacing: Px(8.0),
        ..FitOptions::default()
    };
    let block = layout_block(&text, &Proportional, Px(420.0), Px(600.0), Alignment::Left, &options)
        .expect("fits");

    assert!(block.height(Px(8.0)) <= Px(600.0));
    assert!(!block.overlaps());
    let words: Vec<&str> = block
        .lines
        .iter()
        .flat_map(|l| l.line.words.iter().map(|w| w.word))
        .collect();
    assert_eq!(words, text.split_whitespace().collect::<Vec<_>>());
}
