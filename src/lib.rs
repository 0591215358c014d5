mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod compose;
pub use compose::*;

mod config;
pub use config::*;

mod content;
pub use content::*;

mod font;
pub use font::*;

/// Utility functions and structures to wrap, justify and size text within a box
pub mod layout;

mod measure;
pub use measure::*;

/// File and directory names for generated pictures and slides
pub mod naming;

mod picture;
pub use picture::*;

mod pipeline;
pub use pipeline::*;

mod units;
pub use units::*;

mod error;
pub use error::*;
