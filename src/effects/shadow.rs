use crate::effects::effect::{RenderEffect, blit_centered};
use crate::foundation::core::{FrameIndex, Rgb8, SurfaceExpand};
use crate::foundation::error::{CellfxError, CellfxResult};
use crate::surface::pixel::{PixelSurface, TRANSPARENT};

/// Flat silhouette of the occupied cells, offset behind the content.
///
/// Shadow cells carry `color` with coverage `alpha` and no glyph. They only land where
/// the content left the output empty.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DropShadow {
    pub offset_x: i32,
    pub offset_y: i32,
    #[serde(default)]
    pub color: Rgb8,
    #[serde(default = "default_shadow_alpha")]
    pub alpha: u8,
}

fn default_shadow_alpha() -> u8 {
    128
}

impl DropShadow {
    /// Black shadow at half coverage.
    pub fn new(offset_x: i32, offset_y: i32) -> Self {
        Self {
            offset_x,
            offset_y,
            color: Rgb8::BLACK,
            alpha: default_shadow_alpha(),
        }
    }

    pub fn with_color(mut self, color: Rgb8) -> Self {
        self.color = color;
        self
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }
}

impl RenderEffect for DropShadow {
    fn name(&self) -> &'static str {
        "drop_shadow"
    }

    fn validate(&self, _input: &PixelSurface) -> CellfxResult<()> {
        if self.alpha == 0 {
            return Err(CellfxError::invalid_value("drop shadow alpha must be > 0"));
        }
        Ok(())
    }

    fn surface_expand(&self) -> SurfaceExpand {
        SurfaceExpand::new(self.offset_x.unsigned_abs(), self.offset_y.unsigned_abs())
    }

    fn run(
        &self,
        input: &PixelSurface,
        output: &mut PixelSurface,
        _frame: FrameIndex,
    ) -> CellfxResult<()> {
        let rect = blit_centered(input, output)?;
        let base_x = i64::from(rect.x) + i64::from(self.offset_x);
        let base_y = i64::from(rect.y) + i64::from(self.offset_y);

        for row in 0..input.height() {
            for col in 0..input.width() {
                if !input.is_occupied(col, row) {
                    continue;
                }
                let tx = base_x + i64::from(col);
                let ty = base_y + i64::from(row);
                if !output.contains(tx, ty) {
                    continue;
                }
                let (tx, ty) = (tx as u32, ty as u32);
                if output.coverage(tx, ty) == TRANSPARENT {
                    output.set_cell(tx, ty, self.color, self.alpha);
                    output.set_glyph(tx, ty, None);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shadow.rs"]
mod tests;
