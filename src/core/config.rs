use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::codec::Codec;

/// Per-codec settings loaded from TOML.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// One-line description for `config list`
    #[serde(default)]
    pub description: String,
    /// Extra names accepted on the command line
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Default line width for encoded output (0 = no wrapping)
    #[serde(default)]
    pub wrap: usize,
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Codec used when none is named on the command line
    #[serde(default)]
    pub default_codec: Option<String>,
    /// Maximum input size in bytes (0 = unlimited)
    #[serde(default)]
    pub max_size: Option<usize>,
}

/// Codec entries plus global settings, as loaded from `codecs.toml` files.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CodecRegistry {
    /// Map of codec names to their configurations
    #[serde(default)]
    pub codecs: HashMap<String, CodecConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl CodecRegistry {
    /// Parses a registry from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in registry bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../codecs.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads a registry from a file path. A leading `~` is expanded.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let content = std::fs::read_to_string(&expanded)
            .map_err(|e| format!("Cannot read config '{}': {}", expanded, e))?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads the registry with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in registry (from library)
    /// 2. `~/.config/rfc-basenc/codecs.toml` (user overrides)
    /// 3. `./codecs.toml` (project-local overrides)
    ///
    /// Later files override earlier ones for matching codec names and for
    /// any setting they set. A file that fails to parse is skipped with a
    /// warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("rfc-basenc").join("codecs.toml");
            config.merge_file_if_present(&user_config_path);
        }

        config.merge_file_if_present(Path::new("codecs.toml"));

        Ok(config)
    }

    fn merge_file_if_present(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => self.merge(other),
            Err(e) => eprintln!("warning: failed to load config from {:?}: {}", path, e),
        }
    }

    /// Merges another registry into this one.
    ///
    /// Codec entries from `other` replace entries of the same name; settings
    /// from `other` replace settings only where they are set.
    pub fn merge(&mut self, other: CodecRegistry) {
        for (name, codec) in other.codecs {
            self.codecs.insert(name, codec);
        }
        if other.settings.default_codec.is_some() {
            self.settings.default_codec = other.settings.default_codec;
        }
        if other.settings.max_size.is_some() {
            self.settings.max_size = other.settings.max_size;
        }
    }

    /// Resolves a name or alias (built-in or configured) to a codec.
    pub fn resolve(&self, name: &str) -> Result<Codec, Box<dyn std::error::Error>> {
        let lowered = name.to_lowercase();
        for (codec_name, codec_config) in &self.codecs {
            if codec_config.aliases.iter().any(|alias| alias.to_lowercase() == lowered) {
                return Ok(codec_name.parse::<Codec>()?);
            }
        }
        Ok(name.parse::<Codec>()?)
    }

    /// The configured default codec, if any.
    pub fn default_codec(&self) -> Result<Option<Codec>, Box<dyn std::error::Error>> {
        self.settings
            .default_codec
            .as_deref()
            .map(|name| self.resolve(name))
            .transpose()
    }

    /// Retrieves the configuration entry for a codec.
    pub fn get_codec(&self, codec: Codec) -> Option<&CodecConfig> {
        self.codecs.get(codec.as_str())
    }

    /// Default wrap width for a codec (0 when unset).
    pub fn wrap_for(&self, codec: Codec) -> usize {
        self.get_codec(codec).map_or(0, |c| c.wrap)
    }

    /// Checks that every entry names one of the supported codecs.
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        for name in self.codecs.keys() {
            name.parse::<Codec>()?;
        }
        self.default_codec()?;
        Ok(())
    }
}
