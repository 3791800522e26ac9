use eframe::egui::ColorImage;
use image::imageops::FilterType;
use image::DynamicImage;

use crate::apod::error::FetchError;

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode raw bytes (JPEG, PNG, GIF, WebP), sniffing the format.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, FetchError> {
    let img = image::load_from_memory(bytes)?;
    if img.width() == 0 || img.height() == 0 {
        return Err(FetchError::EmptyImage);
    }
    Ok(img)
}

// ---------------------------------------------------------------------------
// Aspect-preserving fit
// ---------------------------------------------------------------------------

/// Target size for an image of `width`×`height` inside a `max_w`×`max_h` box.
///
/// Scales to the full box width first; if that makes it too tall, scales to
/// the box height instead. Small images are scaled up.
pub fn fitted_size(width: u32, height: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    let aspect = width as f64 / height as f64;
    let mut w = max_w;
    let mut h = (max_w as f64 / aspect) as u32;
    if h > max_h {
        w = (max_h as f64 * aspect) as u32;
        h = max_h;
    }
    (w.clamp(1, max_w), h.max(1))
}

/// Resize `img` to fit the box with a bilinear filter.
pub fn fit_within(img: &DynamicImage, max_w: u32, max_h: u32) -> DynamicImage {
    let (w, h) = fitted_size(img.width(), img.height(), max_w, max_h);
    img.resize_exact(w, h, FilterType::Triangle)
}

/// Convert to the pixel format egui uploads as a texture.
pub fn to_color_image(img: &DynamicImage) -> ColorImage {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
