use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::PromptTemplate;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Optional settings file. The API key is not a field here: it
/// is typed into the form each run and never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Completion service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Base URL of an OpenAI-compatible API (default: Groq)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Instruction template the form starts with
    #[serde(default)]
    pub template: PromptTemplate,
    /// Upper bound on generated tokens (service default when unset)
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Sampling temperature (service default when unset)
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            template: PromptTemplate::default(),
            max_tokens: None,
            temperature: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeVariant,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    #[serde(rename = "high-contrast")]
    HighContrast,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Where reports are written (default: the user's download directory)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl ExportConfig {
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("mailsift");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.completion.base_url.trim().is_empty() {
            anyhow::bail!("completion.base_url must not be empty");
        }
        if self.completion.model.trim().is_empty() {
            anyhow::bail!("completion.model must not be empty");
        }
        if let Some(t) = self.completion.temperature
            && !(0.0..=2.0).contains(&t)
        {
            anyhow::bail!("completion.temperature must be between 0 and 2 (got {})", t);
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create config directory: {}", dir.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn ensure_dirs() -> Result<()> {
        fs::create_dir_all(Self::config_dir()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.completion.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.completion.model, DEFAULT_MODEL);
        assert_eq!(config.completion.template, PromptTemplate::SpamNonSpam);
        assert_eq!(config.completion.max_tokens, None);
        assert_eq!(config.ui.theme, ThemeVariant::Dark);
        assert!(config.export.dir.is_none());
    }

    #[test]
    fn test_parse_partial_sections() {
        let toml = r#"
            [completion]
            template = "genuine-fraud"
            max_tokens = 800

            [ui]
            theme = "high-contrast"

            [export]
            dir = "/tmp/reports"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.completion.template, PromptTemplate::GenuineFraud);
        assert_eq!(config.completion.max_tokens, Some(800));
        assert_eq!(config.completion.model, DEFAULT_MODEL);
        assert_eq!(config.ui.theme, ThemeVariant::HighContrast);
        assert_eq!(
            config.export.resolved_dir(),
            PathBuf::from("/tmp/reports")
        );
    }

    #[test]
    fn test_unknown_template_is_rejected() {
        let toml = r#"
            [completion]
            template = "ham-or-eggs"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_load_from_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [completion]
            temperature = 7.5
        "#,
        )
        .unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn test_save_and_load_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = Config::default();
        config.completion.template = PromptTemplate::GenuineFraud;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.completion.template, PromptTemplate::GenuineFraud);
        assert!(!fs::read_to_string(&path).unwrap().contains("api_key"));
    }

    #[test]
    fn test_missing_file_is_an_error_for_load_from() {
        assert!(Config::load_from(Path::new("/nonexistent/mailsift.toml")).is_err());
    }
}
