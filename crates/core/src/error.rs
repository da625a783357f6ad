/// Result alias that carries the custom [`RainbowBarError`] type.
pub type Result<T> = std::result::Result<T, RainbowBarError>;

/// Common error type for the core crate.
///
/// The wave controller itself never fails; errors only surface at the
/// configuration and output boundaries.
#[derive(Debug, thiserror::Error)]
pub enum RainbowBarError {
    /// A configuration value is outside its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A color literal could not be parsed.
    #[error("invalid color `{0}`, expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Configuration (de)serialization failure.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl RainbowBarError {
    pub(crate) fn config<T: Into<String>>(msg: T) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_boundary_errors() {
        let err = RainbowBarError::config("visible_waves_count must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: visible_waves_count must be at least 1"
        );

        let io: RainbowBarError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "bar.json").into();
        assert!(matches!(io, RainbowBarError::Io(_)));
    }
}
