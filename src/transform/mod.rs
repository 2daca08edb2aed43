//! Scale and rotate helpers. Both allocate a fresh surface at the origin.

pub mod rotate;
pub(crate) mod sample;
pub mod scale;
