//! Named convolution kernels: built-in presets plus config-defined ones.

use crate::error::{AppError, AppResult};
use crate::models::AppConfig;
use pixel_engine::filter::normalize_preset_name;
use pixel_engine::{Kernel, Preset};

/// A named kernel ready to apply
#[derive(Debug, Clone, PartialEq)]
pub struct KernelEntry {
    pub name: String,
    pub kernel: Kernel,
    pub description: Option<String>,
    /// `false` when the entry came from the config file
    pub builtin: bool,
}

/// Resolves kernel names and user-supplied weights
#[derive(Debug, Clone)]
pub struct KernelLibrary {
    entries: Vec<KernelEntry>,
    max_weight: f64,
}

impl KernelLibrary {
    /// The built-in presets only, with the default weight limit
    pub fn builtin() -> Self {
        Self::from_config(&AppConfig::default())
    }

    /// Built-in presets extended (or overridden) by `config.presets`
    ///
    /// A malformed config kernel is logged and skipped.
    pub fn from_config(config: &AppConfig) -> Self {
        let max_weight = config.filter.max_weight;
        let mut entries: Vec<KernelEntry> = Preset::ALL
            .into_iter()
            .map(|preset| KernelEntry {
                name: preset.name().to_string(),
                kernel: preset.kernel(),
                description: None,
                builtin: true,
            })
            .collect();

        for (name, preset) in &config.presets {
            let kernel = match Kernel::from_rows(&preset.weights) {
                Ok(kernel) => kernel.clamp_weights(max_weight),
                Err(e) => {
                    tracing::warn!(preset = %name, %e, "Skipping invalid kernel preset");
                    continue;
                }
            };
            let entry = KernelEntry {
                name: name.clone(),
                kernel,
                description: preset.description.clone(),
                builtin: false,
            };

            let key = normalize_preset_name(name);
            match entries
                .iter_mut()
                .find(|e| normalize_preset_name(&e.name) == key)
            {
                Some(existing) => {
                    tracing::debug!(preset = %name, "Config preset overrides built-in");
                    *existing = entry;
                }
                None => entries.push(entry),
            }
        }

        Self {
            entries,
            max_weight,
        }
    }

    /// Look up a kernel by name, ignoring case, `-`, `_` and spaces
    pub fn get(&self, name: &str) -> AppResult<&KernelEntry> {
        let key = normalize_preset_name(name);
        self.entries
            .iter()
            .find(|e| normalize_preset_name(&e.name) == key)
            .ok_or_else(|| AppError::UnknownPreset(name.to_string()))
    }

    /// Build a kernel from user-entered rows
    ///
    /// Each weight is capped at the configured maximum, then the shape is
    /// validated by the engine.
    pub fn custom<R: AsRef<[f64]>>(&self, rows: &[R]) -> AppResult<Kernel> {
        Ok(Kernel::from_rows(rows)?.clamp_weights(self.max_weight))
    }

    /// All entries, built-ins first
    pub fn entries(&self) -> &[KernelEntry] {
        &self.entries
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }
}

impl Default for KernelLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
