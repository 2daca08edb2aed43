use crate::foundation::core::Rgb8;
use crate::foundation::error::{CellfxError, CellfxResult};
use crate::surface::pixel::PixelSurface;
use crate::transform::sample::{Edge, Filter, Sample, sample};

/// Resampling used by [`scaled`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScaleAlgorithm {
    /// Integer index remap, meant for exact integer ratios.
    None,
    /// Closest source cell to the target cell's centre.
    #[default]
    NearestNeighbor,
    /// 2x2 neighbourhood weighted by fractional distance.
    Bilinear,
    /// 4x4 neighbourhood with cubic convolution weights.
    Bicubic,
}

/// Resized copy of `src`'s content at `target_w x target_h`.
///
/// The result sits at position `(0, 0, 0)`; callers restore `x, y, z`.
pub fn scaled(
    src: &PixelSurface,
    target_w: u32,
    target_h: u32,
    algorithm: ScaleAlgorithm,
) -> CellfxResult<PixelSurface> {
    if target_w == 0 || target_h == 0 {
        return Err(CellfxError::invalid_value(format!(
            "scale target must be non-empty, got {target_w}x{target_h}"
        )));
    }
    let mut out = PixelSurface::new(target_w, target_h, Rgb8::BLACK)?;
    if src.is_empty() {
        return Ok(out);
    }

    for row in 0..target_h {
        for col in 0..target_w {
            let cell = scaled_cell(src, col, row, (target_w, target_h), algorithm);
            cell.write(&mut out, col, row);
        }
    }
    Ok(out)
}

/// Cell `(col, row)` of `src` resized to `target`, without building the whole result.
pub(crate) fn scaled_cell(
    src: &PixelSurface,
    col: u32,
    row: u32,
    target: (u32, u32),
    algorithm: ScaleAlgorithm,
) -> Sample {
    let (sw, sh) = src.size();
    let (tw, th) = target;
    let filter = match algorithm {
        ScaleAlgorithm::None => {
            let c = (u64::from(col) * u64::from(sw) / u64::from(tw)) as f64;
            let r = (u64::from(row) * u64::from(sh) / u64::from(th)) as f64;
            return sample(src, c + 0.5, r + 0.5, Filter::Nearest, Edge::Clamp);
        }
        ScaleAlgorithm::NearestNeighbor => Filter::Nearest,
        ScaleAlgorithm::Bilinear => Filter::Bilinear,
        ScaleAlgorithm::Bicubic => Filter::Bicubic,
    };
    let px = (f64::from(col) + 0.5) * (f64::from(sw) / f64::from(tw));
    let py = (f64::from(row) + 0.5) * (f64::from(sh) / f64::from(th));
    sample(src, px, py, filter, Edge::Clamp)
}

/// [`scaled`], replacing `surface`. Position and depth are reset to zero.
pub fn scale_in_place(
    surface: &mut PixelSurface,
    target_w: u32,
    target_h: u32,
    algorithm: ScaleAlgorithm,
) -> CellfxResult<()> {
    *surface = scaled(surface, target_w, target_h, algorithm)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/scale.rs"]
mod tests;
