use std::cmp::Reverse;

use crate::composite::composite;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::CellfxResult;
use crate::render::object::RenderObject;
use crate::render::opts::{DepthOrder, PipelineOpts};
use crate::surface::pixel::PixelSurface;

/// Processes a set of render objects and composites their outputs onto one destination.
///
/// With the default options objects are composited with the occupancy merge in insertion
/// order, so the first object added is the front-most.
#[derive(Debug, Default)]
pub struct Pipeline<'a> {
    opts: PipelineOpts,
    objects: Vec<RenderObject<'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_opts(opts: PipelineOpts) -> Self {
        Self {
            opts,
            objects: Vec::new(),
        }
    }

    pub fn opts(&self) -> &PipelineOpts {
        &self.opts
    }

    pub fn add_object(&mut self, object: RenderObject<'a>) -> &mut Self {
        self.objects.push(object);
        self
    }

    pub fn objects(&self) -> &[RenderObject<'a>] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Render one frame into `dst`.
    ///
    /// Under the default occupancy merge, cells left occupied by the previous frame block
    /// new content. Set [`PipelineOpts::with_clear`] when running frame after frame into
    /// the same destination.
    #[tracing::instrument(skip(self, dst), fields(objects = self.objects.len()))]
    pub fn run(&mut self, dst: &mut PixelSurface, frame: FrameIndex) -> CellfxResult<()> {
        if let Some(fill) = self.opts.clear {
            dst.clear(fill);
        }
        for object in &mut self.objects {
            object.process(frame)?;
        }

        let mut outputs: Vec<&PixelSurface> = self.objects.iter().map(|o| o.output()).collect();
        if self.opts.depth_order == DepthOrder::Z {
            // Stable, so equal depths keep insertion order.
            if self.opts.merge.first_wins() {
                outputs.sort_by_key(|s| Reverse(s.z));
            } else {
                outputs.sort_by_key(|s| s.z);
            }
        }
        composite(self.opts.merge, outputs, dst);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
