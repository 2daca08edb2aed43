#![forbid(unsafe_code)]
//! `cellfx` composites terminal cell surfaces and animates them with effect chains.
//!
//! A [`PixelSurface`] is a grid of cells (color, opacity, glyph) with a screen position.
//! Surfaces are combined by the stateless compositors in [`composite`], reshaped by the
//! helpers in [`transform`], and animated per frame by [`EffectChain`]s. A [`Pipeline`]
//! ties it together: it processes each [`RenderObject`] for a frame and composites the
//! results onto a destination surface.
//!
//! Everything runs synchronously on the caller's thread.

pub mod composite;
pub mod effects;
pub mod foundation;
pub mod render;
pub mod surface;
pub mod transform;

pub use composite::{MergePolicy, composite};
pub use effects::blur::Blur;
pub use effects::chain::EffectChain;
pub use effects::effect::{Effect, RenderEffect, RenderEffectContext};
pub use effects::fade::Fade;
pub use effects::motion::{Spin, Zoom};
pub use effects::outline::{Direction, OutlineEnd, OutlineRotator, OutlineTrace};
pub use effects::shadow::DropShadow;
pub use effects::spec::{ChainSpec, EffectSpec, parse_effect_json};
pub use foundation::core::{FrameIndex, Rgb8, SurfaceExpand};
pub use foundation::error::{CellfxError, CellfxResult};
pub use render::object::RenderObject;
pub use render::opts::{DepthOrder, PipelineOpts};
pub use render::pipeline::Pipeline;
pub use surface::pixel::PixelSurface;
pub use transform::rotate::{RotateAlgorithm, RotateMode};
pub use transform::scale::ScaleAlgorithm;
