use crate::composite::MergePolicy;
use crate::foundation::core::Rgb8;

/// Environment variable naming the merge policy (`occupancy|overwrite|blend`).
pub const ENV_MERGE: &str = "CELLFX_MERGE";
/// Environment variable naming the depth order (`insertion|z`).
pub const ENV_DEPTH_ORDER: &str = "CELLFX_DEPTH_ORDER";

/// How a [`crate::render::pipeline::Pipeline`] orders object outputs before compositing.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DepthOrder {
    /// Objects composite in the order they were added.
    #[default]
    Insertion,
    /// Objects are stably sorted by `z` (larger is nearer) for the merge policy in use.
    Z,
}

/// Frame-level pipeline options.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PipelineOpts {
    pub merge: MergePolicy,
    pub depth_order: DepthOrder,
    /// Clear the destination to this color (fully transparent) before compositing.
    pub clear: Option<Rgb8>,
}

impl PipelineOpts {
    pub fn with_merge(mut self, merge: MergePolicy) -> Self {
        self.merge = merge;
        self
    }

    pub fn with_depth_order(mut self, depth_order: DepthOrder) -> Self {
        self.depth_order = depth_order;
        self
    }

    pub fn with_clear(mut self, clear: Option<Rgb8>) -> Self {
        self.clear = clear;
        self
    }

    /// Defaults overridden by `CELLFX_MERGE` and `CELLFX_DEPTH_ORDER`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`PipelineOpts::from_env`] against an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut opts = Self::default();
        if let Some(raw) = lookup(ENV_MERGE) {
            match parse_merge(&raw) {
                Some(merge) => opts.merge = merge,
                None => tracing::warn!(var = ENV_MERGE, value = %raw, "ignoring unknown merge policy"),
            }
        }
        if let Some(raw) = lookup(ENV_DEPTH_ORDER) {
            match parse_depth_order(&raw) {
                Some(order) => opts.depth_order = order,
                None => tracing::warn!(var = ENV_DEPTH_ORDER, value = %raw, "ignoring unknown depth order"),
            }
        }
        opts
    }
}

fn parse_merge(raw: &str) -> Option<MergePolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "occupancy" | "merge" => Some(MergePolicy::Occupancy),
        "overwrite" | "over" => Some(MergePolicy::Overwrite),
        "blend" | "alpha" => Some(MergePolicy::Blend),
        _ => None,
    }
}

fn parse_depth_order(raw: &str) -> Option<DepthOrder> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "insertion" | "list" => Some(DepthOrder::Insertion),
        "z" => Some(DepthOrder::Z),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/opts.rs"]
mod tests;
