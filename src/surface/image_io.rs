//! Adapter between decoded RGBA images and [`PixelSurface`].
//!
//! Image alpha becomes cell opacity; glyphs are left empty.

use image::{Rgba, RgbaImage};

use crate::foundation::core::Rgb8;
use crate::foundation::error::CellfxResult;
use crate::surface::pixel::PixelSurface;

/// Build a surface from straight-alpha RGBA pixels, one cell per pixel.
pub fn from_rgba_image(img: &RgbaImage) -> CellfxResult<PixelSurface> {
    let (w, h) = img.dimensions();
    let mut surface = PixelSurface::new(w, h, Rgb8::BLACK)?;
    let (colors, opacities, _) = surface.maps_mut();
    for ((c, a), px) in colors
        .iter_mut()
        .zip(opacities.iter_mut())
        .zip(img.pixels())
    {
        let [r, g, b, alpha] = px.0;
        *c = Rgb8::new(r, g, b);
        *a = alpha;
    }
    Ok(surface)
}

/// Flatten a surface back into straight-alpha RGBA pixels.
pub fn to_rgba_image(surface: &PixelSurface) -> RgbaImage {
    let w = surface.width();
    RgbaImage::from_fn(w, surface.height(), |x, y| {
        let i = y as usize * w as usize + x as usize;
        let c = surface.colors()[i];
        Rgba([c.r, c.g, c.b, surface.opacities()[i]])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/surface/image_io.rs"]
mod tests;
