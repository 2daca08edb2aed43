use kurbo::{Affine, Point, Rect, Vec2};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{CellfxError, CellfxResult};
use crate::surface::pixel::PixelSurface;
use crate::transform::sample::{Edge, Filter, sample};

/// Guards `ceil` against float noise on exact right angles.
const BBOX_EPSILON: f64 = 1e-6;

/// Canvas policy for [`rotated`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RotateMode {
    /// Keep the original size; corners may fall off.
    #[default]
    Clip,
    /// Grow the canvas to the rotated bounding box first.
    AutoEnlarge,
}

/// Resampling used by [`rotated`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RotateAlgorithm {
    #[default]
    NearestNeighbor,
    Bilinear,
}

impl RotateAlgorithm {
    fn filter(self) -> Filter {
        match self {
            Self::NearestNeighbor => Filter::Nearest,
            Self::Bilinear => Filter::Bilinear,
        }
    }
}

/// Canvas size that holds `(w, h)` rotated by `angle` without loss. Never smaller than
/// the input.
pub fn enlarged_size(w: u32, h: u32, angle: f64) -> (u32, u32) {
    let rect = Rect::new(0.0, 0.0, f64::from(w), f64::from(h));
    let bbox = Affine::rotate(angle).transform_rect_bbox(rect);
    let fit = |v: f64| (v - BBOX_EPSILON).ceil().max(0.0) as u32;
    (fit(bbox.width()).max(w), fit(bbox.height()).max(h))
}

/// Copy of `src` rotated by `angle` radians about its centre.
///
/// Cells sampled outside the source come out transparent. The result sits at position
/// `(0, 0, 0)`; callers restore `x, y, z`.
pub fn rotated(
    src: &PixelSurface,
    angle: f64,
    mode: RotateMode,
    algorithm: RotateAlgorithm,
) -> CellfxResult<PixelSurface> {
    if !angle.is_finite() {
        return Err(CellfxError::invalid_value(format!(
            "rotation angle must be finite, got {angle}"
        )));
    }
    let (w, h) = match mode {
        RotateMode::Clip => src.size(),
        RotateMode::AutoEnlarge => enlarged_size(src.width(), src.height(), angle),
    };
    let mut out = PixelSurface::new(w, h, Rgb8::BLACK)?;
    rotate_into(src, angle, algorithm, &mut out);
    Ok(out)
}

/// [`rotated`], replacing `surface`. Position and depth are reset to zero.
pub fn rotate_in_place(
    surface: &mut PixelSurface,
    angle: f64,
    mode: RotateMode,
    algorithm: RotateAlgorithm,
) -> CellfxResult<()> {
    *surface = rotated(surface, angle, mode, algorithm)?;
    Ok(())
}

/// Fill every cell of `dst` by sampling `src` rotated about the shared centre.
fn rotate_into(
    src: &PixelSurface,
    angle: f64,
    algorithm: RotateAlgorithm,
    dst: &mut PixelSurface,
) {
    let src_center = Vec2::new(f64::from(src.width()) / 2.0, f64::from(src.height()) / 2.0);
    let dst_center = Vec2::new(f64::from(dst.width()) / 2.0, f64::from(dst.height()) / 2.0);
    // dst -> src: undo the rotation around the destination centre.
    let inverse =
        Affine::translate(src_center) * Affine::rotate(-angle) * Affine::translate(-dst_center);
    let filter = algorithm.filter();

    for row in 0..dst.height() {
        for col in 0..dst.width() {
            let p = inverse * Point::new(f64::from(col) + 0.5, f64::from(row) + 0.5);
            sample(src, p.x, p.y, filter, Edge::Transparent).write(dst, col, row);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotate.rs"]
mod tests;
