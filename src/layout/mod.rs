//! Text layout: wrapping, justification and font size fitting.
//!
//! Everything here is a pure function of its arguments and a [`Measure`](crate::Measure)
//! implementation, so layouts can be computed ahead of drawing and are safe to compute
//! from several threads at once.
//!
//! # Layout Functions
//!
//! - [`wrap`](crate::layout::wrap) - greedy word wrapping to a maximum width
//! - [`justify`](crate::layout::justify) - spreads a wrapped line across its box, left-aligned or centred
//! - [`fit_font`](crate::layout::fit_font) - largest font size whose wrapping fits a box
//! - [`layout_block`](crate::layout::layout_block) - all of the above in one call
//!
//! # Example
//!
//! ```
//! use slide_gen::{FixedAdvance, Px};
//! use slide_gen::layout::{layout_block, Alignment, FitOptions};
//!
//! let face = FixedAdvance::default();
//! let block = layout_block(
//!     "the impressionists painted light rather than things",
//!     &face,
//!     Px(300.0),
//!     Px(120.0),
//!     Alignment::Left,
//!     &FitOptions::default(),
//! )
//! .expect("text fits");
//!
//! let mut y = Px(0.0);
//! for line in &block.lines {
//!     for word in &line.line.words {
//!         println!("{} at ({}, {})", word.word, word.x, y);
//!     }
//!     y += line.height + Px(10.0);
//! }
//! ```

use crate::units::Px;
use thiserror::Error;

mod block;
mod fit;
mod justify;
mod wrap;

pub use block::*;
pub use fit::*;
pub use justify::*;
pub use wrap::*;

/// Layout failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// No size in the search range lets the text fit its box
    #[error("content does not fit a {max_width} x {max_height} box, even at size {min_size}")]
    UnfittableContent {
        min_size: u32,
        max_width: Px,
        max_height: Px,
    },
}
