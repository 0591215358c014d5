use crate::measure::Measure;
use crate::units::Px;

/// One line of wrapped text: the words that share it, in reading order. Words borrow
/// from the text block that was wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrappedLine<'t> {
    pub words: Vec<&'t str>,
}

impl<'t> WrappedLine<'t> {
    /// The line as it would be typeset naively, words joined by single spaces
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

/// Breaks `text` into lines no wider than `max_width` when measured at `size`.
///
/// Words are split on whitespace and packed greedily: a word joins the current line
/// as long as the line, words separated by single spaces, still measures within
/// `max_width`. Words are never broken, so a word that is wider than `max_width` on
/// its own gets a line to itself and overflows it. No line is ever empty, and text
/// with no words produces no lines.
pub fn wrap<'t, M: Measure + ?Sized>(
    text: &'t str,
    font: &M,
    size: u32,
    max_width: Px,
) -> Vec<WrappedLine<'t>> {
    let mut lines: Vec<WrappedLine<'t>> = Vec::new();
    let mut current = WrappedLine::default();
    let mut current_text = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.words.push(word);
            current_text.push_str(word);
            continue;
        }

        current_text.push(' ');
        current_text.push_str(word);

        if font.text_width(&current_text, size) <= max_width {
            current.words.push(word);
        } else {
            // close the line before this word and start the next one with it
            lines.push(std::mem::take(&mut current));
            current_text.clear();
            current_text.push_str(word);
            current.words.push(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedAdvance;

    // one pixel per character at size 10
    fn face() -> FixedAdvance {
        FixedAdvance::new(0.1, 1.0)
    }

    fn words<'t>(lines: &[WrappedLine<'t>]) -> Vec<Vec<&'t str>> {
        lines.iter().map(|l| l.words.clone()).collect()
    }

    #[test]
    fn empty_and_blank_text_have_no_lines() {
        assert!(wrap("", &face(), 10, Px(100.0)).is_empty());
        assert!(wrap("  \t\n ", &face(), 10, Px(100.0)).is_empty());
    }

    #[test]
    fn exact_fit_stays_on_the_line() {
        // "alpha beta" and "gamma delt" are both ten characters wide
        let lines = wrap("alpha beta gamma delt", &face(), 10, Px(10.0));
        assert_eq!(
            words(&lines),
            vec![vec!["alpha", "beta"], vec!["gamma", "delt"]]
        );
    }

    #[test]
    fn one_pixel_over_starts_a_new_line() {
        let lines = wrap("alpha beta gamma delta", &face(), 10, Px(10.0));
        assert_eq!(
            words(&lines),
            vec![vec!["alpha", "beta"], vec!["gamma"], vec!["delta"]]
        );
    }

    #[test]
    fn overlong_word_sits_alone() {
        let lines = wrap("a supercalifragilisticexpialidocious b", &face(), 10, Px(5.0));
        assert_eq!(
            words(&lines),
            vec![
                vec!["a"],
                vec!["supercalifragilisticexpialidocious"],
                vec!["b"]
            ]
        );
    }

    #[test]
    fn leading_overlong_word_does_not_emit_an_empty_line() {
        let lines = wrap("supercalifragilisticexpialidocious", &face(), 10, Px(5.0));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "supercalifragilisticexpialidocious");
    }

    #[test]
    fn runs_of_whitespace_collapse() {
        let lines = wrap("one   two\n\nthree", &face(), 10, Px(100.0));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "one two three");
    }

    #[test]
    fn larger_sizes_wrap_earlier() {
        let text = "the quick brown fox jumps over the lazy dog";
        let small = wrap(text, &face(), 10, Px(20.0));
        let large = wrap(text, &face(), 20, Px(20.0));
        assert!(large.len() > small.len());
    }
}
