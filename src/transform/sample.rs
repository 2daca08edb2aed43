//! Resampling kernels shared by scaling and rotation.
//!
//! Coordinates are continuous: cell `(c, r)` covers `[c, c+1) x [r, r+1)` and its centre
//! sits at `(c + 0.5, r + 0.5)`.

use crate::foundation::core::Rgb8;
use crate::foundation::math::f32_to_u8;
use crate::surface::pixel::{PixelSurface, TRANSPARENT};

/// Interpolation kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Filter {
    Nearest,
    Bilinear,
    Bicubic,
}

/// What a tap outside the source reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Edge {
    /// Repeat the nearest edge cell.
    Clamp,
    /// Empty cell.
    Transparent,
}

/// One resampled cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Sample {
    pub(crate) color: Rgb8,
    pub(crate) opacity: u8,
    pub(crate) glyph: Option<char>,
}

impl Sample {
    const EMPTY: Self = Self {
        color: Rgb8::BLACK,
        opacity: TRANSPARENT,
        glyph: None,
    };

    pub(crate) fn write(self, dst: &mut PixelSurface, col: u32, row: u32) {
        dst.set_cell(col, row, self.color, self.opacity);
        dst.set_glyph(col, row, self.glyph);
    }
}

/// Cubic convolution constant (Keys, `a = -0.5`).
const CUBIC_A: f64 = -0.5;

pub(crate) fn sample(src: &PixelSurface, px: f64, py: f64, filter: Filter, edge: Edge) -> Sample {
    if src.is_empty() {
        return Sample::EMPTY;
    }
    let glyph_cell = tap_index(src, px.floor() as i64, py.floor() as i64, edge);
    let glyph = glyph_cell.and_then(|i| src.glyphs()[i]);

    match filter {
        Filter::Nearest => match glyph_cell {
            Some(i) => Sample {
                color: src.colors()[i],
                opacity: src.opacities()[i],
                glyph,
            },
            None => Sample::EMPTY,
        },
        Filter::Bilinear => bilinear(src, px, py, edge, glyph),
        Filter::Bicubic => bicubic(src, px, py, edge, glyph),
    }
}

fn tap_index(src: &PixelSurface, col: i64, row: i64, edge: Edge) -> Option<usize> {
    let (w, h) = (i64::from(src.width()), i64::from(src.height()));
    let (col, row) = match edge {
        Edge::Clamp => (col.clamp(0, w - 1), row.clamp(0, h - 1)),
        Edge::Transparent => {
            if !src.contains(col, row) {
                return None;
            }
            (col, row)
        }
    };
    Some(row as usize * w as usize + col as usize)
}

/// Opacity-weighted bilinear: empty taps dilute coverage without darkening color.
fn bilinear(src: &PixelSurface, px: f64, py: f64, edge: Edge, glyph: Option<char>) -> Sample {
    let u = px - 0.5;
    let v = py - 0.5;
    let x0 = u.floor();
    let y0 = v.floor();
    let fx = u - x0;
    let fy = v - y0;

    let mut acc = [0.0f64; 3];
    let mut acc_a = 0.0f64;
    for (dy, wy) in [(0i64, 1.0 - fy), (1, fy)] {
        for (dx, wx) in [(0i64, 1.0 - fx), (1, fx)] {
            let w = wx * wy;
            if w <= 0.0 {
                continue;
            }
            let Some(i) = tap_index(src, x0 as i64 + dx, y0 as i64 + dy, edge) else {
                continue;
            };
            let wa = w * f64::from(src.opacities()[i]);
            let c = src.colors()[i];
            acc[0] += wa * f64::from(c.r);
            acc[1] += wa * f64::from(c.g);
            acc[2] += wa * f64::from(c.b);
            acc_a += wa;
        }
    }

    if acc_a <= f64::EPSILON {
        return Sample::EMPTY;
    }
    let ch = |v: f64| f32_to_u8((v / acc_a) as f32);
    Sample {
        color: Rgb8::new(ch(acc[0]), ch(acc[1]), ch(acc[2])),
        opacity: f32_to_u8(acc_a as f32),
        glyph,
    }
}

fn cubic_weight(t: f64) -> f64 {
    let t = t.abs();
    if t <= 1.0 {
        (CUBIC_A + 2.0) * t * t * t - (CUBIC_A + 3.0) * t * t + 1.0
    } else if t < 2.0 {
        CUBIC_A * t * t * t - 5.0 * CUBIC_A * t * t + 8.0 * CUBIC_A * t - 4.0 * CUBIC_A
    } else {
        0.0
    }
}

/// Bicubic with the same opacity weighting as [`bilinear`]. Overshoot is clamped.
fn bicubic(src: &PixelSurface, px: f64, py: f64, edge: Edge, glyph: Option<char>) -> Sample {
    let u = px - 0.5;
    let v = py - 0.5;
    let x0 = u.floor() as i64;
    let y0 = v.floor() as i64;

    let mut acc = [0.0f64; 3];
    let mut acc_a = 0.0f64;
    let mut wsum = 0.0f64;
    for ty in (y0 - 1)..=(y0 + 2) {
        let wy = cubic_weight(v - ty as f64);
        for tx in (x0 - 1)..=(x0 + 2) {
            let w = wy * cubic_weight(u - tx as f64);
            if w == 0.0 {
                continue;
            }
            wsum += w;
            let Some(i) = tap_index(src, tx, ty, edge) else {
                continue;
            };
            let wa = w * f64::from(src.opacities()[i]);
            let c = src.colors()[i];
            acc[0] += wa * f64::from(c.r);
            acc[1] += wa * f64::from(c.g);
            acc[2] += wa * f64::from(c.b);
            acc_a += wa;
        }
    }
    if wsum.abs() <= f64::EPSILON || acc_a <= f64::EPSILON {
        return Sample::EMPTY;
    }
    let opacity = f32_to_u8((acc_a / wsum) as f32);
    if opacity == TRANSPARENT {
        return Sample::EMPTY;
    }
    let ch = |v: f64| f32_to_u8((v / acc_a) as f32);
    Sample {
        color: Rgb8::new(ch(acc[0]), ch(acc[1]), ch(acc[2])),
        opacity,
        glyph,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/sample.rs"]
mod tests;
