use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default file the CLI writes rendered HTML to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub render: RenderConfig,
}

/// Registry adjustments applied on top of the default components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Block kinds (by `type` name) removed from the registry
    pub disabled_blocks: Vec<String>,
    /// Modifier names removed from the registry
    pub disabled_modifiers: Vec<String>,
    /// Emit diagnostics for content that could not be rendered
    pub diagnostics: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            disabled_blocks: Vec::new(),
            disabled_modifiers: Vec::new(),
            diagnostics: true,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config = Self::from_toml(&content).map_err(|source| {
            ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        // Expand shell variables and tilde in the output path
        config.output = config
            .output
            .map(|output| Self::expand_path(&output).unwrap_or(output));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/blocks-renderer");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/blocks-renderer/config.toml"));
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config, Config::default());
        assert!(config.render.diagnostics);
        assert!(config.render.disabled_blocks.is_empty());
    }

    #[test]
    fn test_parse_render_section() {
        let config = Config::from_toml(
            r#"
output = "/tmp/out.html"

[render]
disabled_blocks = ["image", "not-a-kind"]
disabled_modifiers = ["underline"]
diagnostics = false
"#,
        )
        .unwrap();

        assert_eq!(config.output, Some(PathBuf::from("/tmp/out.html")));
        assert_eq!(
            config.render.disabled_blocks,
            vec!["image".to_string(), "not-a-kind".to_string()]
        );
        assert_eq!(config.render.disabled_modifiers, vec!["underline".to_string()]);
        assert!(!config.render.diagnostics);
    }

    #[test]
    fn test_partial_render_section_keeps_defaults() {
        let config = Config::from_toml(
            r#"
[render]
disabled_modifiers = ["code"]
"#,
        )
        .unwrap();

        assert!(config.render.diagnostics);
        assert!(config.render.disabled_blocks.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[render\ndiagnostics = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config {
            output: Some(PathBuf::from("/tmp/rendered.html")),
            render: RenderConfig {
                disabled_blocks: vec!["code".to_string()],
                disabled_modifiers: Vec::new(),
                diagnostics: false,
            },
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_output_with_env_var_is_expanded() {
        unsafe {
            env::set_var("BLOCKS_RENDERER_TEST_OUT", "/custom/site");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "output = \"$BLOCKS_RENDERER_TEST_OUT/index.html\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.output, Some(PathBuf::from("/custom/site/index.html")));

        unsafe {
            env::remove_var("BLOCKS_RENDERER_TEST_OUT");
        }
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(&PathBuf::from("~/test/path")).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(Config::expand_path(&path).unwrap(), path);
    }
}
