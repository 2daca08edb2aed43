use crate::effects::chain::EffectChain;
use crate::effects::effect::RenderEffectContext;
use crate::foundation::core::{FrameIndex, Rgb8};
use crate::foundation::error::CellfxResult;
use crate::surface::pixel::PixelSurface;

/// A positioned surface plus an optional effect chain, producing one output per frame.
///
/// The object borrows its input and chain; it owns only the output.
#[derive(Debug)]
pub struct RenderObject<'a> {
    input: &'a PixelSurface,
    chain: Option<&'a mut EffectChain>,
    output: PixelSurface,
}

impl<'a> RenderObject<'a> {
    /// Allocate an output matching `input` in size and position.
    pub fn new(input: &'a PixelSurface, chain: Option<&'a mut EffectChain>) -> CellfxResult<Self> {
        let mut output = PixelSurface::new(input.width(), input.height(), Rgb8::BLACK)?;
        output.set_position(input.x, input.y, input.z);
        Ok(Self {
            input,
            chain,
            output,
        })
    }

    pub fn input(&self) -> &PixelSurface {
        self.input
    }

    /// Output of the last [`RenderObject::process`] call.
    pub fn output(&self) -> &PixelSurface {
        &self.output
    }

    pub fn has_chain(&self) -> bool {
        self.chain.is_some()
    }

    /// Produce this frame's output.
    ///
    /// With a chain, the output is shifted up-left by the chain's border so the content
    /// stays where the input was. Without one, the output is a deep copy of the input.
    #[tracing::instrument(skip(self), fields(chained = self.chain.is_some()))]
    pub fn process(&mut self, frame: FrameIndex) -> CellfxResult<()> {
        let input = self.input;
        let Some(chain) = self.chain.as_deref_mut() else {
            return self.output.copy_from(input);
        };

        let mut ctx = RenderEffectContext::new(input, &mut self.output);
        chain.run(&mut ctx, frame)?;
        let border = ctx.expansion_applied;

        let dx = i32::try_from(border.border_x).unwrap_or(i32::MAX);
        let dy = i32::try_from(border.border_y).unwrap_or(i32::MAX);
        self.output.set_position(
            input.x.saturating_sub(dx),
            input.y.saturating_sub(dy),
            input.z,
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/object.rs"]
mod tests;
