/// Convenience result type used across promokit.
pub type PromoResult<T> = Result<T, PromoError>;

/// Error taxonomy for the render pipeline.
///
/// `InvalidDimension` and `Io` abort the single render they occur in. `AssetLoad` and
/// `FontResolution` are recoverable: callers log them and continue with a degraded result.
#[derive(thiserror::Error, Debug)]
pub enum PromoError {
    /// Non-positive or overflowing canvas/icon dimensions.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Icon file missing, unreadable or undecodable.
    #[error("asset load failure: {0}")]
    AssetLoad(String),

    /// No usable font could be resolved from the configured sources.
    #[error("font resolution failure: {0}")]
    FontResolution(String),

    /// Export or directory write failure.
    #[error("io failure: {0}")]
    Io(String),

    /// Errors when serializing or deserializing job configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PromoError {
    /// Build a [`PromoError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`PromoError::AssetLoad`] value.
    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoad(msg.into())
    }

    /// Build a [`PromoError::FontResolution`] value.
    pub fn font_resolution(msg: impl Into<String>) -> Self {
        Self::FontResolution(msg.into())
    }

    /// Build a [`PromoError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`PromoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether the pipeline may continue after this error with degraded output.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::AssetLoad(_) | Self::FontResolution(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
