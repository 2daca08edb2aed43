/// Result type used across cellfx.
pub type CellfxResult<T> = Result<T, CellfxError>;

/// Every failure a surface, effect, chain or pipeline can report.
#[derive(thiserror::Error, Debug)]
pub enum CellfxError {
    /// An animated effect was given a zero frame duration.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// A fade amount outside `[0, 1]`.
    #[error("invalid alpha range: {0}")]
    InvalidAlphaRange(String),

    /// Blur radius of zero or above the supported maximum.
    #[error("invalid blur radius: {0}")]
    InvalidBlurRadius(String),

    /// A start cell outside the input or not occupied.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// Any other effect parameter out of range.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Unknown effect kind in a description, or a failed downcast.
    #[error("wrong effect kind: {0}")]
    WrongEffectKind(String),

    /// Surfaces whose sizes break an operation's contract.
    #[error("surface size mismatch: {0}")]
    SurfaceSizeMismatch(String),

    /// A chain was run without any effects.
    #[error("effect chain has no effects")]
    EmptyChain,

    /// An intermediate surface the chain expected was not there.
    #[error("missing surface: {0}")]
    NullSurface(String),

    /// Surface storage could not be allocated.
    #[error("allocation failed: {0}")]
    Alloc(String),

    /// Errors when serializing or deserializing effect descriptions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CellfxError {
    /// Build a [`CellfxError::InvalidDuration`] value.
    pub fn invalid_duration(msg: impl Into<String>) -> Self {
        Self::InvalidDuration(msg.into())
    }

    /// Build a [`CellfxError::InvalidAlphaRange`] value.
    pub fn invalid_alpha_range(msg: impl Into<String>) -> Self {
        Self::InvalidAlphaRange(msg.into())
    }

    /// Build a [`CellfxError::InvalidBlurRadius`] value.
    pub fn invalid_blur_radius(msg: impl Into<String>) -> Self {
        Self::InvalidBlurRadius(msg.into())
    }

    /// Build a [`CellfxError::InvalidPosition`] value.
    pub fn invalid_position(msg: impl Into<String>) -> Self {
        Self::InvalidPosition(msg.into())
    }

    /// Build a [`CellfxError::InvalidValue`] value.
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Build a [`CellfxError::WrongEffectKind`] value.
    pub fn wrong_effect_kind(msg: impl Into<String>) -> Self {
        Self::WrongEffectKind(msg.into())
    }

    /// Build a [`CellfxError::SurfaceSizeMismatch`] value.
    pub fn size_mismatch(msg: impl Into<String>) -> Self {
        Self::SurfaceSizeMismatch(msg.into())
    }

    /// Build a [`CellfxError::NullSurface`] value.
    pub fn null_surface(msg: impl Into<String>) -> Self {
        Self::NullSurface(msg.into())
    }

    /// Build a [`CellfxError::Alloc`] value.
    pub fn alloc(msg: impl Into<String>) -> Self {
        Self::Alloc(msg.into())
    }

    /// Build a [`CellfxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Parameter problems reported by an effect's `validate`. Fixing the effect's
    /// configuration makes them go away.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDuration(_)
                | Self::InvalidAlphaRange(_)
                | Self::InvalidBlurRadius(_)
                | Self::InvalidPosition(_)
                | Self::InvalidValue(_)
                | Self::WrongEffectKind(_)
        )
    }

    /// Caller contract violations (mis-sized surfaces, empty chains).
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::SurfaceSizeMismatch(_) | Self::EmptyChain | Self::NullSurface(_)
        )
    }
}

impl From<std::collections::TryReserveError> for CellfxError {
    fn from(e: std::collections::TryReserveError) -> Self {
        Self::Alloc(e.to_string())
    }
}

impl From<serde_json::Error> for CellfxError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
