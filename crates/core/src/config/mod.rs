use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Color, NotchSize, RainbowBarError, Result};

/// Top-level configuration of a rainbow bar. Fixed once the bar is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainbowBarConfig {
    /// Stagger between consecutive waves, in seconds.
    pub wave_emit_period: f64,
    /// Number of waves emitted in the initial burst.
    pub visible_waves_count: usize,
    pub palette: Vec<Color>,
    pub background_color: Color,
    pub notch: NotchSize,
}

impl Default for RainbowBarConfig {
    fn default() -> Self {
        Self {
            wave_emit_period: 0.66,
            visible_waves_count: 3,
            palette: vec![Color::RED, Color::GREEN, Color::BLUE],
            background_color: Color::BLACK,
            notch: NotchSize::None,
        }
    }
}

impl RainbowBarConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "loading configuration");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects values the scheduler cannot work with. An empty palette is
    /// accepted: it only stalls the animation.
    pub fn validate(&self) -> Result<()> {
        if !self.wave_emit_period.is_finite() || self.wave_emit_period <= 0.0 {
            return Err(RainbowBarError::config(format!(
                "wave_emit_period must be a positive number of seconds, got {}",
                self.wave_emit_period
            )));
        }
        if self.visible_waves_count == 0 {
            return Err(RainbowBarError::config(
                "visible_waves_count must be at least 1",
            ));
        }
        if self.palette.is_empty() {
            tracing::warn!("palette is empty, no waves will be produced");
        }
        Ok(())
    }

    /// Phase duration of every wave: one full stagger cycle.
    pub fn animation_duration(&self) -> f64 {
        self.wave_emit_period * self.visible_waves_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_demo_settings() {
        let config = RainbowBarConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.palette.len(), 3);
        assert!((config.animation_duration() - 1.98).abs() < 1e-9);
    }

    #[test]
    fn parses_partial_json_over_defaults() {
        let config = RainbowBarConfig::from_json_str(
            r##"{ "wave_emit_period": 0.3, "palette": ["#ffffff", "#000000"], "notch": "big" }"##,
        )
        .unwrap();

        assert_eq!(config.wave_emit_period, 0.3);
        assert_eq!(config.visible_waves_count, 3);
        assert_eq!(config.palette, vec![Color::WHITE, Color::BLACK]);
        assert_eq!(config.notch, NotchSize::Big);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let zero_period = RainbowBarConfig {
            wave_emit_period: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            zero_period.validate(),
            Err(RainbowBarError::InvalidConfig(_))
        ));

        let no_waves = RainbowBarConfig {
            visible_waves_count: 0,
            ..Default::default()
        };
        assert!(no_waves.validate().is_err());

        let bad_color = RainbowBarConfig::from_json_str(r#"{ "palette": ["red"] }"#);
        assert!(matches!(bad_color, Err(RainbowBarError::Json(_))));
    }

    #[test]
    fn empty_palette_is_not_an_error() {
        let config = RainbowBarConfig {
            palette: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_round_trip_keeps_hex_colors() {
        let json = RainbowBarConfig::default().to_json_pretty().unwrap();
        assert!(json.contains("\"#ff0000\""));
        assert_eq!(
            RainbowBarConfig::from_json_str(&json).unwrap(),
            RainbowBarConfig::default()
        );
    }
}
