//! Frame-driven effects and the chains that run them.

pub mod blur;
pub mod chain;
pub mod effect;
pub mod fade;
pub mod motion;
pub mod outline;
pub mod shadow;
pub mod spec;
