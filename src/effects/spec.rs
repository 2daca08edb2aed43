//! JSON descriptions of effects and chains.
//!
//! ```json
//! { "effects": [
//!     { "kind": "blur", "radius": 2 },
//!     { "kind": "fade", "alpha_start": 0.0, "alpha_end": 1.0, "duration": 60 }
//! ] }
//! ```
//!
//! Kinds are matched case-insensitively and `-`/`_` are optional (`Drop-Shadow`,
//! `drop_shadow` and `dropshadow` all name [`DropShadow`]).

use crate::effects::blur::Blur;
use crate::effects::chain::EffectChain;
use crate::effects::effect::Effect;
use crate::effects::fade::Fade;
use crate::effects::motion::{Spin, Zoom};
use crate::effects::outline::OutlineRotator;
use crate::effects::shadow::DropShadow;
use crate::foundation::error::{CellfxError, CellfxResult};

/// One built-in effect with its parameters, tagged by `"kind"`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectSpec {
    Fade(Fade),
    Blur(Blur),
    DropShadow(DropShadow),
    Spin(Spin),
    Zoom(Zoom),
    OutlineRotator(OutlineRotator),
}

impl EffectSpec {
    /// Canonical kind string, as written by `Serialize`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fade(_) => "fade",
            Self::Blur(_) => "blur",
            Self::DropShadow(_) => "drop_shadow",
            Self::Spin(_) => "spin",
            Self::Zoom(_) => "zoom",
            Self::OutlineRotator(_) => "outline_rotator",
        }
    }

    pub fn into_effect(self) -> Effect {
        match self {
            Self::Fade(e) => Effect::new(e),
            Self::Blur(e) => Effect::new(e),
            Self::DropShadow(e) => Effect::new(e),
            Self::Spin(e) => Effect::new(e),
            Self::Zoom(e) => Effect::new(e),
            Self::OutlineRotator(e) => Effect::new(e),
        }
    }
}

fn canonical_kind(raw: &str) -> Option<&'static str> {
    let key: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match key.as_str() {
        "fade" => Some("fade"),
        "blur" => Some("blur"),
        "dropshadow" | "shadow" => Some("drop_shadow"),
        "spin" | "rotate" => Some("spin"),
        "zoom" | "scale" => Some("zoom"),
        "outlinerotator" | "outline" => Some("outline_rotator"),
        _ => None,
    }
}

/// Parse one effect from a JSON object.
pub fn parse_effect_value(mut value: serde_json::Value) -> CellfxResult<EffectSpec> {
    let obj = value
        .as_object_mut()
        .ok_or_else(|| CellfxError::serde("effect must be a JSON object"))?;
    let raw = obj
        .get("kind")
        .and_then(|k| k.as_str())
        .ok_or_else(|| CellfxError::wrong_effect_kind("effect is missing a string 'kind'"))?;
    let kind = canonical_kind(raw)
        .ok_or_else(|| CellfxError::wrong_effect_kind(format!("unknown effect kind '{raw}'")))?;
    obj.insert("kind".to_owned(), serde_json::Value::from(kind));
    Ok(serde_json::from_value(value)?)
}

/// Parse one effect from JSON text.
pub fn parse_effect_json(s: &str) -> CellfxResult<EffectSpec> {
    parse_effect_value(serde_json::from_str(s)?)
}

/// Ordered list of effects that builds an [`EffectChain`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChainSpec {
    #[serde(default)]
    pub effects: Vec<EffectSpec>,
}

impl ChainSpec {
    /// Accepts `{ "effects": [...] }` or a bare array of effects.
    pub fn from_json_str(s: &str) -> CellfxResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        let items = match value {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(mut obj) => match obj.remove("effects") {
                Some(serde_json::Value::Array(items)) => items,
                None => Vec::new(),
                Some(_) => return Err(CellfxError::serde("chain 'effects' must be an array")),
            },
            _ => return Err(CellfxError::serde("chain must be a JSON object or array")),
        };
        let effects = items
            .into_iter()
            .map(parse_effect_value)
            .collect::<CellfxResult<Vec<_>>>()?;
        Ok(Self { effects })
    }

    pub fn to_json_string(&self) -> CellfxResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build(&self) -> EffectChain {
        let mut chain = EffectChain::new();
        for spec in &self.effects {
            chain.chain_effect(spec.clone().into_effect());
        }
        chain
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/spec.rs"]
mod tests;
