//! Frame-level orchestration: render objects and the pipeline that composites them.

pub mod object;
pub mod opts;
pub mod pipeline;
