use crate::assets::AssetLoader;
use pixel_engine::{ControlPoint, EngineResult, ToneCurve};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Named kernels added to (or replacing) the built-in presets
    #[serde(default)]
    pub presets: BTreeMap<String, PresetConfig>,

    /// Default tone curve control points
    #[serde(default)]
    pub curve: CurveConfig,

    /// Convolution limits
    #[serde(default)]
    pub filter: FilterConfig,
}

/// A kernel defined in the config file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PresetConfig {
    /// Kernel rows; validated when the preset is resolved
    pub weights: Vec<Vec<f64>>,

    /// Shown by `photolab kernels`
    #[serde(default)]
    pub description: Option<String>,
}

/// Default control points for the curve command
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CurveConfig {
    #[serde(default)]
    pub input1: u8,
    #[serde(default)]
    pub output1: u8,
    #[serde(default = "channel_max")]
    pub input2: u8,
    #[serde(default = "channel_max")]
    pub output2: u8,
}

fn channel_max() -> u8 {
    u8::MAX
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            input1: 0,
            output1: 0,
            input2: u8::MAX,
            output2: u8::MAX,
        }
    }
}

impl CurveConfig {
    /// Validate the control points into a curve.
    pub fn tone_curve(&self) -> EngineResult<ToneCurve> {
        ToneCurve::new(
            ControlPoint::new(self.input1, self.output1),
            ControlPoint::new(self.input2, self.output2),
        )
    }
}

/// Limits applied to user-supplied kernels
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    /// Largest weight a custom kernel may carry; bigger values are clamped
    #[serde(default = "default_max_weight")]
    pub max_weight: f64,
}

fn default_max_weight() -> f64 {
    100.0
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_weight: default_max_weight(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        presets = config.presets.len(),
                        max_weight = config.filter.max_weight,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
