use std::any::Any;
use std::fmt;

use crate::composite::clip_rect;
use crate::foundation::core::{FrameIndex, Rgb8, SurfaceExpand};
use crate::foundation::error::{CellfxError, CellfxResult};
use crate::surface::pixel::PixelSurface;

/// A frame-driven transformation from one surface to another.
///
/// Implementations hold their own parameters. `run` must be a pure function of
/// `(input, frame)`: it never mutates `input` and should define every output cell it
/// cares about (built-ins clear the output first).
pub trait RenderEffect: Any + fmt::Debug {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Check parameter sanity against the surface the effect is about to read.
    fn validate(&self, input: &PixelSurface) -> CellfxResult<()>;

    /// Render `input` at `frame` into `output`, which is at least as large as `input`.
    fn run(
        &self,
        input: &PixelSurface,
        output: &mut PixelSurface,
        frame: FrameIndex,
    ) -> CellfxResult<()>;

    /// Border the output needs beyond the input to avoid clipping.
    fn surface_expand(&self) -> SurfaceExpand {
        SurfaceExpand::NONE
    }
}

/// Job state of one render pass: what to read, where to write, and how much the output
/// was grown on the way.
#[derive(Debug)]
pub struct RenderEffectContext<'a> {
    pub input: &'a PixelSurface,
    pub output: &'a mut PixelSurface,
    pub expansion_applied: SurfaceExpand,
}

impl<'a> RenderEffectContext<'a> {
    pub fn new(input: &'a PixelSurface, output: &'a mut PixelSurface) -> Self {
        Self {
            input,
            output,
            expansion_applied: SurfaceExpand::NONE,
        }
    }
}

/// Type-erased handle around any [`RenderEffect`].
#[derive(Debug)]
pub struct Effect {
    inner: Box<dyn RenderEffect>,
}

impl Effect {
    pub fn new<E: RenderEffect>(effect: E) -> Self {
        Self {
            inner: Box::new(effect),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    pub fn surface_expand(&self) -> SurfaceExpand {
        self.inner.surface_expand()
    }

    pub fn validate(&self, input: &PixelSurface) -> CellfxResult<()> {
        self.inner.validate(input)
    }

    /// Borrow the concrete parameters back out of the handle.
    pub fn downcast_ref<T: RenderEffect>(&self) -> CellfxResult<&T> {
        let any: &dyn Any = &*self.inner;
        any.downcast_ref::<T>().ok_or_else(|| {
            CellfxError::wrong_effect_kind(format!(
                "effect '{}' is not a {}",
                self.name(),
                std::any::type_name::<T>()
            ))
        })
    }

    /// Mutable counterpart of [`Effect::downcast_ref`], for tweaking parameters between
    /// frames.
    pub fn downcast_mut<T: RenderEffect>(&mut self) -> CellfxResult<&mut T> {
        let name = self.name();
        let any: &mut dyn Any = &mut *self.inner;
        any.downcast_mut::<T>().ok_or_else(|| {
            CellfxError::wrong_effect_kind(format!(
                "effect '{name}' is not a {}",
                std::any::type_name::<T>()
            ))
        })
    }

    /// Validate, then run on caller-sized surfaces.
    pub fn run_on_surfaces(
        &self,
        input: &PixelSurface,
        output: &mut PixelSurface,
        frame: FrameIndex,
    ) -> CellfxResult<()> {
        check_fits(input, output)?;
        self.inner.validate(input)?;
        self.inner.run(input, output, frame)
    }

    /// Grow `ctx.output` for the declared expansion if needed, then run.
    pub fn run(&self, ctx: &mut RenderEffectContext<'_>, frame: FrameIndex) -> CellfxResult<()> {
        let expand = self.surface_expand();
        if !expand.is_none() {
            let (tw, th) = expand.grow(ctx.input.size());
            let (ow, oh) = ctx.output.size();
            if ow < tw || oh < th {
                ctx.output.resize(ow.max(tw), oh.max(th))?;
            }
            ctx.expansion_applied = expand;
        }
        self.run_on_surfaces(ctx.input, ctx.output, frame)
    }
}

impl<E: RenderEffect> From<E> for Effect {
    fn from(effect: E) -> Self {
        Self::new(effect)
    }
}

/// Placement of an effect's input inside its (possibly larger) output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl ContentRect {
    /// Output index of input cell `(col, row)`.
    pub fn output_index(&self, output: &PixelSurface, col: u32, row: u32) -> usize {
        (self.y + row) as usize * output.width() as usize + (self.x + col) as usize
    }
}

/// `SurfaceSizeMismatch` unless `output` can hold all of `input`.
pub fn check_fits(input: &PixelSurface, output: &PixelSurface) -> CellfxResult<()> {
    if output.width() < input.width() || output.height() < input.height() {
        return Err(CellfxError::size_mismatch(format!(
            "output {}x{} is smaller than input {}x{}",
            output.width(),
            output.height(),
            input.width(),
            input.height()
        )));
    }
    Ok(())
}

/// Where `input` lands when centred in `output`.
pub fn content_rect(input: &PixelSurface, output: &PixelSurface) -> CellfxResult<ContentRect> {
    check_fits(input, output)?;
    Ok(ContentRect {
        x: (output.width() - input.width()) / 2,
        y: (output.height() - input.height()) / 2,
        w: input.width(),
        h: input.height(),
    })
}

/// Clear `output` and copy `input`'s maps, unchanged, into its centre.
///
/// Every built-in effect starts here, so an undersized output fails before any write.
pub fn blit_centered(
    input: &PixelSurface,
    output: &mut PixelSurface,
) -> CellfxResult<ContentRect> {
    let rect = content_rect(input, output)?;
    output.clear(Rgb8::BLACK);
    blit_at(input, output, rect.x as i32, rect.y as i32);
    Ok(rect)
}

/// Raw copy of every `src` cell (opacity included) into `dst` at `(x, y)`, clipped.
///
/// Unlike the compositors this does not interpret opacity at all.
pub fn blit_at(src: &PixelSurface, dst: &mut PixelSurface, x: i32, y: i32) {
    let Some((cols, rows)) = clip_rect(src, (x, y), dst) else {
        return;
    };
    let sw = src.width() as usize;
    let dw = dst.width() as usize;
    let (d_colors, d_opacity, d_glyphs) = dst.maps_mut();
    for r in 0..rows.len {
        let s = (rows.src_start + r) * sw + cols.src_start;
        let d = (rows.dst_start + r) * dw + cols.dst_start;
        d_colors[d..d + cols.len].copy_from_slice(&src.colors()[s..s + cols.len]);
        d_opacity[d..d + cols.len].copy_from_slice(&src.opacities()[s..s + cols.len]);
        d_glyphs[d..d + cols.len].copy_from_slice(&src.glyphs()[s..s + cols.len]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/effect.rs"]
mod tests;
