//! Animated geometric effects built on [`crate::transform`].

use crate::effects::effect::{RenderEffect, blit_centered, content_rect};
use crate::foundation::core::{FrameIndex, Rgb8};
use crate::foundation::error::{CellfxError, CellfxResult};
use crate::foundation::math::lerp_f32;
use crate::surface::pixel::PixelSurface;
use crate::transform::rotate::{RotateAlgorithm, RotateMode, rotated};
use crate::transform::scale::{ScaleAlgorithm, scaled_cell};

fn check_duration(effect: &str, duration: u64) -> CellfxResult<()> {
    if duration == 0 {
        return Err(CellfxError::invalid_duration(format!(
            "{effect} duration must be > 0"
        )));
    }
    Ok(())
}

/// Rotation about the content centre, interpolated from `angle_start` to `angle_end`
/// radians. Corners leaving the input canvas are clipped.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spin {
    pub angle_start: f32,
    pub angle_end: f32,
    pub duration: u64,
    #[serde(default)]
    pub algorithm: RotateAlgorithm,
}

impl Spin {
    pub fn new(angle_start: f32, angle_end: f32, duration: u64) -> Self {
        Self {
            angle_start,
            angle_end,
            duration,
            algorithm: RotateAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: RotateAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn angle_at(&self, frame: FrameIndex) -> f32 {
        lerp_f32(self.angle_start, self.angle_end, frame.progress(self.duration))
    }
}

impl RenderEffect for Spin {
    fn name(&self) -> &'static str {
        "spin"
    }

    fn validate(&self, _input: &PixelSurface) -> CellfxResult<()> {
        check_duration("spin", self.duration)?;
        if !self.angle_start.is_finite() || !self.angle_end.is_finite() {
            return Err(CellfxError::invalid_value(format!(
                "spin angles must be finite, got {} -> {}",
                self.angle_start, self.angle_end
            )));
        }
        Ok(())
    }

    fn run(
        &self,
        input: &PixelSurface,
        output: &mut PixelSurface,
        frame: FrameIndex,
    ) -> CellfxResult<()> {
        let angle = f64::from(self.angle_at(frame));
        let turned = rotated(input, angle, RotateMode::Clip, self.algorithm)?;
        blit_centered(&turned, output)?;
        Ok(())
    }
}

/// Scaling about the content centre, interpolated from `scale_start` to `scale_end`.
/// The result is cropped or padded back to the input canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Zoom {
    pub scale_start: f32,
    pub scale_end: f32,
    pub duration: u64,
    #[serde(default)]
    pub algorithm: ScaleAlgorithm,
}

impl Zoom {
    pub fn new(scale_start: f32, scale_end: f32, duration: u64) -> Self {
        Self {
            scale_start,
            scale_end,
            duration,
            algorithm: ScaleAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: ScaleAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn scale_at(&self, frame: FrameIndex) -> f32 {
        lerp_f32(self.scale_start, self.scale_end, frame.progress(self.duration))
    }
}

impl RenderEffect for Zoom {
    fn name(&self) -> &'static str {
        "zoom"
    }

    fn validate(&self, _input: &PixelSurface) -> CellfxResult<()> {
        check_duration("zoom", self.duration)?;
        for v in [self.scale_start, self.scale_end] {
            if !v.is_finite() || v <= 0.0 {
                return Err(CellfxError::invalid_value(format!(
                    "zoom factor must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }

    fn run(
        &self,
        input: &PixelSurface,
        output: &mut PixelSurface,
        frame: FrameIndex,
    ) -> CellfxResult<()> {
        let rect = content_rect(input, output)?;
        output.clear(Rgb8::BLACK);
        if input.is_empty() {
            return Ok(());
        }
        let factor = f64::from(self.scale_at(frame));
        let (w, h) = input.size();
        let fit = |v: u32| (f64::from(v) * factor).round().clamp(1.0, f64::from(u32::MAX)) as u32;
        let target = (fit(w), fit(h));

        // Only the input-sized window at the centre of the scaled image is sampled.
        let dx = (i64::from(w) - i64::from(target.0)).div_euclid(2);
        let dy = (i64::from(h) - i64::from(target.1)).div_euclid(2);
        for row in 0..h {
            let Ok(zr) = u32::try_from(i64::from(row) - dy) else {
                continue;
            };
            if zr >= target.1 {
                continue;
            }
            for col in 0..w {
                let Ok(zc) = u32::try_from(i64::from(col) - dx) else {
                    continue;
                };
                if zc >= target.0 {
                    continue;
                }
                scaled_cell(input, zc, zr, target, self.algorithm).write(
                    output,
                    rect.x + col,
                    rect.y + row,
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/motion.rs"]
mod tests;
