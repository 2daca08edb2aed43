use smallvec::SmallVec;

use crate::effects::effect::{Effect, RenderEffectContext};
use crate::foundation::core::{FrameIndex, Rgb8, SurfaceExpand};
use crate::foundation::error::{CellfxError, CellfxResult};
use crate::surface::pixel::PixelSurface;

/// Ordered effects run as `input -> e1 -> e2 -> ... -> output`.
///
/// The chain owns one intermediate surface per non-final link. They are created on the
/// first run, resized as inputs change, and never leave the chain.
#[derive(Debug, Default)]
pub struct EffectChain {
    effects: SmallVec<[Effect; 4]>,
    total_expand: SurfaceExpand,
    intermediates: Vec<PixelSurface>,
}

impl EffectChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `effect` and fold its border into the chain total.
    pub fn chain_effect(&mut self, effect: impl Into<Effect>) -> &mut Self {
        let effect = effect.into();
        self.total_expand += effect.surface_expand();
        self.effects.push(effect);
        self
    }

    /// Builder form of [`EffectChain::chain_effect`].
    pub fn with_effect(mut self, effect: impl Into<Effect>) -> Self {
        self.chain_effect(effect);
        self
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Mutable access to the links, e.g. to retune parameters between frames.
    ///
    /// Borders are fixed at `chain_effect` time; changing an effect's expansion here is
    /// not reflected in [`EffectChain::total_expand`].
    pub fn effects_mut(&mut self) -> &mut [Effect] {
        &mut self.effects
    }

    /// Sum of every link's border.
    pub fn total_expand(&self) -> SurfaceExpand {
        self.total_expand
    }

    /// Number of intermediate surfaces currently allocated.
    pub fn intermediate_count(&self) -> usize {
        self.intermediates.len()
    }

    /// Size every surface the next run writes to `input + 2 * total_expand`.
    ///
    /// One link writes straight into `ctx.output`; longer chains also get one
    /// intermediate per non-final link.
    pub fn dry_resize(&mut self, ctx: &mut RenderEffectContext<'_>) -> CellfxResult<()> {
        let (tw, th) = self.total_expand.grow(ctx.input.size());
        ctx.output.resize(tw, th)?;
        ctx.expansion_applied = self.total_expand;

        let needed = self.effects.len().saturating_sub(1);
        self.intermediates.truncate(needed);
        for surface in &mut self.intermediates {
            surface.resize(tw, th)?;
        }
        while self.intermediates.len() < needed {
            self.intermediates.push(PixelSurface::new(tw, th, Rgb8::BLACK)?);
        }
        Ok(())
    }

    /// Run every link in order for `frame`, leaving the result in `ctx.output`.
    #[tracing::instrument(skip(self, ctx), fields(links = self.effects.len()))]
    pub fn run(&mut self, ctx: &mut RenderEffectContext<'_>, frame: FrameIndex) -> CellfxResult<()> {
        if self.effects.is_empty() {
            return Err(CellfxError::EmptyChain);
        }
        self.dry_resize(ctx)?;

        let last = self.effects.len() - 1;
        if last == 0 {
            return self.effects[0].run_on_surfaces(ctx.input, ctx.output, frame);
        }

        let first_out = self
            .intermediates
            .first_mut()
            .ok_or_else(|| missing_intermediate(0))?;
        self.effects[0].run_on_surfaces(ctx.input, first_out, frame)?;

        for i in 1..last {
            let (done, rest) = self.intermediates.split_at_mut(i);
            let src = done.last().ok_or_else(|| missing_intermediate(i - 1))?;
            let dst = rest.first_mut().ok_or_else(|| missing_intermediate(i))?;
            self.effects[i].run_on_surfaces(src, dst, frame)?;
        }

        let src = self
            .intermediates
            .get(last - 1)
            .ok_or_else(|| missing_intermediate(last - 1))?;
        self.effects[last].run_on_surfaces(src, ctx.output, frame)
    }
}

fn missing_intermediate(link: usize) -> CellfxError {
    CellfxError::null_surface(format!("no intermediate surface for link {link}"))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/chain.rs"]
mod tests;
