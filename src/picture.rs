use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PictureError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("picture has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

/// Load a raster picture from disk. The format is sniffed from the file contents,
/// falling back to the extension for formats without a magic number (TGA).
pub fn load_picture<P: AsRef<Path>>(path: P) -> Result<DynamicImage, PictureError> {
    let path = path.as_ref();
    let is_tga = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tga"));

    let data = std::fs::read(path)?;
    let format = if is_tga {
        image::ImageFormat::Tga
    } else {
        image::guess_format(&data)?
    };
    let picture = image::load_from_memory_with_format(&data, format)?;
    log::debug!(
        "loaded {}x{} picture from {}",
        picture.width(),
        picture.height(),
        path.display()
    );
    Ok(picture)
}

/// Scales `width` x `height` to `target_height`, keeping the aspect ratio, then shrinks
/// the result to `max_width` if it came out wider. Dimensions are truncated to whole
/// pixels.
pub fn scaled_size(width: u32, height: u32, target_height: u32, max_width: u32) -> (u32, u32) {
    let aspect = width as f64 / height as f64;
    let scaled_width = (target_height as f64 * aspect) as u32;
    if scaled_width > max_width {
        (max_width, (max_width as f64 / aspect) as u32)
    } else {
        (scaled_width, target_height)
    }
}

/// Resize `picture` for placement on a slide, see [scaled_size]. Resampling uses a
/// Lanczos filter.
pub fn fit_picture(
    picture: &DynamicImage,
    target_height: u32,
    max_width: u32,
) -> Result<RgbImage, PictureError> {
    let (width, height) = (picture.width(), picture.height());
    if width == 0 || height == 0 {
        return Err(PictureError::Empty { width, height });
    }

    let (new_width, new_height) = scaled_size(width, height, target_height, max_width);
    if new_width == 0 || new_height == 0 {
        return Err(PictureError::Empty {
            width: new_width,
            height: new_height,
        });
    }

    Ok(picture
        .resize_exact(new_width, new_height, FilterType::Lanczos3)
        .to_rgb8())
}
