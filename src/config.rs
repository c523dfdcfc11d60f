//! Simulation configuration
//!
//! The historical variants (1, 3, up to 6, and 2-4 random projectiles) differ
//! only in how many projectiles spawn, how they are colored and how colors are
//! blended. `FlowConfig` captures those choices; `Preset` names the variants.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{FlowError, Result};

/// Render surface scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Scale {
    /// Full screen
    #[default]
    Normal,
    /// Small settings-panel preview; everything moves 10x slower
    Preview,
}

impl Scale {
    /// Pick the scale from the host window size
    pub fn detect(width: f64, height: f64) -> Self {
        if width < PREVIEW_THRESHOLD && height < PREVIEW_THRESHOLD {
            Scale::Preview
        } else {
            Scale::Normal
        }
    }

    pub fn from_preview_flag(preview: bool) -> Self {
        if preview { Scale::Preview } else { Scale::Normal }
    }

    pub fn is_preview(&self) -> bool {
        *self == Scale::Preview
    }

    /// Edge length of a rendered block in pixels
    pub fn block_size(&self) -> u32 {
        match self {
            Scale::Normal => BLOCK_SIZE,
            Scale::Preview => PREVIEW_BLOCK_SIZE,
        }
    }

    pub fn initial_speed(&self) -> f64 {
        match self {
            Scale::Normal => INITIAL_SPEED,
            Scale::Preview => PREVIEW_INITIAL_SPEED,
        }
    }

    pub fn initial_x_range(&self) -> (f64, f64) {
        match self {
            Scale::Normal => INITIAL_X_RANGE,
            Scale::Preview => PREVIEW_INITIAL_X_RANGE,
        }
    }

    /// Half-width of the velocity noise added on each perturbation
    pub fn perturb_magnitude(&self) -> f64 {
        match self {
            Scale::Normal => PERTURB_MAGNITUDE,
            Scale::Preview => PREVIEW_PERTURB_MAGNITUDE,
        }
    }
}

/// How many projectiles a run starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountPolicy {
    /// Exactly `n` projectiles
    Fixed(u32),
    /// For each of red, green and blue, a count drawn from `min..=max`
    PerChannel { min: u32, max: u32 },
    /// A single count drawn from `min..=max`
    Uniform { min: u32, max: u32 },
}

/// How projectiles are colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorPolicy {
    /// Pure red, green or blue per projectile
    ChannelIdentity,
    /// Random color per projectile, optionally re-rolled for one projectile on
    /// every perturbation
    Random { recolor: bool },
}

/// How projectile colors combine at a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BlendMode {
    /// Sum of closeness-weighted colors divided by projectile count.
    /// Not normalized by the weight sum, so distant projectiles darken the field.
    #[default]
    Average,
    /// Sum of closeness-weighted colors, clamped to 1.0 per channel
    ChannelSum,
}

/// Named variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// One random-colored projectile
    Solo,
    /// One red, one green and one blue projectile
    Classic,
    /// Zero to two projectiles per channel
    Spectrum,
    /// Two to four random-colored projectiles, periodically recolored
    #[default]
    Drift,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Solo, Preset::Classic, Preset::Spectrum, Preset::Drift];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Solo => "solo",
            Preset::Classic => "classic",
            Preset::Spectrum => "spectrum",
            Preset::Drift => "drift",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solo" | "one" => Ok(Preset::Solo),
            "classic" | "rgb" => Ok(Preset::Classic),
            "spectrum" => Ok(Preset::Spectrum),
            "drift" | "random" => Ok(Preset::Drift),
            other => Err(format!(
                "unknown preset '{}' (expected solo, classic, spectrum or drift)",
                other
            )),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowConfig {
    pub count: CountPolicy,
    pub color: ColorPolicy,
    #[serde(default)]
    pub blend: BlendMode,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl FlowConfig {
    /// Configuration of a named variant
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Solo => Self {
                count: CountPolicy::Fixed(1),
                color: ColorPolicy::Random { recolor: false },
                blend: BlendMode::Average,
            },
            Preset::Classic => Self {
                count: CountPolicy::Fixed(3),
                color: ColorPolicy::ChannelIdentity,
                blend: BlendMode::ChannelSum,
            },
            Preset::Spectrum => Self {
                count: CountPolicy::PerChannel { min: 0, max: 2 },
                color: ColorPolicy::ChannelIdentity,
                blend: BlendMode::Average,
            },
            Preset::Drift => Self {
                count: CountPolicy::Uniform { min: 2, max: 4 },
                color: ColorPolicy::Random { recolor: true },
                blend: BlendMode::Average,
            },
        }
    }

    /// Whether one projectile is recolored on every perturbation
    pub fn recolors(&self) -> bool {
        matches!(self.color, ColorPolicy::Random { recolor: true })
    }

    /// Reject policies that could spawn no projectiles
    pub fn validate(&self) -> Result<()> {
        match self.count {
            CountPolicy::Fixed(0) => Err(FlowError::InvalidConfig(
                "fixed projectile count must be at least 1".to_string(),
            )),
            CountPolicy::PerChannel { min, max } | CountPolicy::Uniform { min, max }
                if min > max =>
            {
                Err(FlowError::InvalidConfig(format!(
                    "projectile count range {}..={} is empty",
                    min, max
                )))
            }
            CountPolicy::PerChannel { max: 0, .. } => Err(FlowError::InvalidConfig(
                "per-channel count range must allow at least 1 projectile".to_string(),
            )),
            CountPolicy::Uniform { min: 0, .. } => Err(FlowError::InvalidConfig(
                "uniform count range must start at 1 or more".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FlowConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_detect() {
        assert_eq!(Scale::detect(150.0, 100.0), Scale::Preview);
        assert_eq!(Scale::detect(150.0, 800.0), Scale::Normal);
        assert_eq!(Scale::detect(1920.0, 1080.0), Scale::Normal);
    }

    #[test]
    fn test_scale_constants() {
        assert_eq!(Scale::Normal.block_size(), 50);
        assert_eq!(Scale::Preview.block_size(), 1);
        assert_eq!(Scale::Preview.initial_speed(), 1.5);
        assert_eq!(Scale::Normal.perturb_magnitude(), 1.0);
    }

    #[test]
    fn test_presets_validate() {
        for preset in Preset::ALL {
            assert!(FlowConfig::from_preset(preset).validate().is_ok(), "{}", preset);
        }
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!("Classic".parse::<Preset>(), Ok(Preset::Classic));
        assert_eq!("random".parse::<Preset>(), Ok(Preset::Drift));
        assert!("plaid".parse::<Preset>().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_ranges() {
        let mut config = FlowConfig::default();
        config.count = CountPolicy::Fixed(0);
        assert!(config.validate().is_err());
        config.count = CountPolicy::Uniform { min: 4, max: 2 };
        assert!(config.validate().is_err());
        config.count = CountPolicy::Uniform { min: 0, max: 2 };
        assert!(config.validate().is_err());
        config.count = CountPolicy::PerChannel { min: 0, max: 0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip_and_default_blend() {
        let json = r#"{ "count": { "Fixed": 2 }, "color": "ChannelIdentity" }"#;
        let config = FlowConfig::from_json(json).unwrap();
        assert_eq!(config.count, CountPolicy::Fixed(2));
        assert_eq!(config.blend, BlendMode::Average);

        let back = FlowConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_json_invalid_policy_rejected() {
        let json = r#"{ "count": { "Fixed": 0 }, "color": "ChannelIdentity" }"#;
        assert!(matches!(
            FlowConfig::from_json(json),
            Err(FlowError::InvalidConfig(_))
        ));
    }
}
