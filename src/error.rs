use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum SlideError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// A font could not be loaded
    Font(#[from] crate::font::FontError),

    #[error(transparent)]
    /// Text could not be laid out in its box
    Layout(#[from] crate::layout::LayoutError),

    #[error(transparent)]
    /// A picture could not be loaded or scaled
    Picture(#[from] crate::picture::PictureError),

    #[error(transparent)]
    /// A slide could not be composed
    Compose(#[from] crate::compose::ComposeError),

    #[error(transparent)]
    /// Slide text or the curriculum was malformed
    Content(#[from] crate::content::ContentError),

    #[error(transparent)]
    /// Configuration could not be loaded
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    /// [image] failed to encode the composed slide
    Image(#[from] image::ImageError),

    #[error("{source_name} failed: {message}")]
    /// An external generator (language or diffusion model) failed
    Generator {
        source_name: &'static str,
        message: String,
    },
}
