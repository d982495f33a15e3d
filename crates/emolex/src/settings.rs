//! Persistent evaluation settings.

use anyhow::{Context, Result};
use emolex_core::DEFAULT_ALPHA;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which classifier to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// Fixed trigger-word rules.
    #[default]
    Lexicon,
    /// Multinomial Naive Bayes trained on the training corpus.
    Bayes,
}

/// Settings read from `settings.json`; every field may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Labeled test corpus.
    pub test_path: PathBuf,
    /// Labeled training corpus (Naive Bayes only).
    pub train_path: PathBuf,
    /// Default model for `evaluate`.
    pub model: Model,
    /// Naive Bayes smoothing.
    pub alpha: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            test_path: PathBuf::from("data").join("test.txt"),
            train_path: PathBuf::from("data").join("train.txt"),
            model: Model::Lexicon,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl Settings {
    /// Default settings location: `<config dir>/emolex/settings.json`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("emolex")
            .join("settings.json")
    }

    /// Loads settings from `path`, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = serde_json::from_str(&contents)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Writes settings to `path` as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        tracing::info!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Replaces every field given on the command line.
    #[must_use]
    pub fn with_overrides(
        self,
        test_path: Option<PathBuf>,
        train_path: Option<PathBuf>,
        model: Option<Model>,
        alpha: Option<f64>,
    ) -> Self {
        Self {
            test_path: test_path.unwrap_or(self.test_path),
            train_path: train_path.unwrap_or(self.train_path),
            model: model.unwrap_or(self.model),
            alpha: alpha.unwrap_or(self.alpha),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"model": "bayes"}"#).unwrap();
        assert_eq!(settings.model, Model::Bayes);
        assert_eq!(settings.test_path, Settings::default().test_path);
        assert!((settings.alpha - DEFAULT_ALPHA).abs() < f64::EPSILON);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            test_path: PathBuf::from("/tmp/test.txt"),
            train_path: PathBuf::from("/tmp/train.txt"),
            model: Model::Bayes,
            alpha: 0.5,
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_missing_file_is_default() {
        let settings = Settings::load(Path::new("/nonexistent/emolex/settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let settings = Settings::default().with_overrides(
            Some(PathBuf::from("dev.txt")),
            None,
            Some(Model::Bayes),
            None,
        );
        assert_eq!(settings.test_path, PathBuf::from("dev.txt"));
        assert_eq!(settings.train_path, Settings::default().train_path);
        assert_eq!(settings.model, Model::Bayes);
        assert!((settings.alpha - DEFAULT_ALPHA).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_overrides_keeps_settings() {
        let settings = Settings {
            alpha: 0.25,
            ..Settings::default()
        };
        assert_eq!(settings.clone().with_overrides(None, None, None, None), settings);
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("emolex-settings-{}", std::process::id()));
        let path = dir.join("nested").join("settings.json");
        let settings = Settings {
            model: Model::Bayes,
            alpha: 0.5,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_default_path_file_name() {
        assert!(Settings::default_path().ends_with("emolex/settings.json"));
    }
}
