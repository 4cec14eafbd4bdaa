use crate::model::{Position, Size, DEFAULT_PROJECT_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_ENV: &str = "BUILDERAI_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub project_name: String,
    pub canvas: CanvasConfig,
    pub assistant: AssistantConfig,
    pub notifications: NotificationConfig,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            canvas: CanvasConfig::default(),
            assistant: AssistantConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Subtracted from the pointer so the new element lands centred-ish
    /// under the cursor.
    pub drop_offset: [f32; 2],
    pub default_element_size: [f32; 2],
    pub grid_spacing: f32,
    pub seed_elements: bool,
}

impl CanvasConfig {
    pub fn drop_offset(&self) -> Position {
        Position::new(self.drop_offset[0], self.drop_offset[1])
    }

    pub fn default_element_size(&self) -> Size {
        Size::new(self.default_element_size[0], self.default_element_size[1])
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            drop_offset: [60.0, 20.0],
            default_element_size: [120.0, 40.0],
            grid_spacing: 20.0,
            seed_elements: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub reply_delay_ms: u64,
    pub quick_action_delay_ms: u64,
}

impl AssistantConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn quick_action_delay(&self) -> Duration {
        Duration::from_millis(self.quick_action_delay_ms)
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            quick_action_delay_ms: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub ttl_ms: u64,
}

impl NotificationConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { ttl_ms: 4000 }
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("USERPROFILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().join(".builderai").join("config.toml"))
}

impl BuilderConfig {
    /// Reads the configuration file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "builderai_config_{prefix}_{}_{}.toml",
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = BuilderConfig::parse("").expect("empty config should parse");
        assert_eq!(config, BuilderConfig::default());
        assert_eq!(config.canvas.drop_offset(), Position::new(60.0, 20.0));
        assert_eq!(config.assistant.reply_delay(), Duration::from_millis(1000));
        assert_eq!(
            config.assistant.quick_action_delay(),
            Duration::from_millis(800)
        );
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = BuilderConfig::parse(
            r#"
project_name = "Storefront"

[assistant]
reply_delay_ms = 250

[canvas]
seed_elements = false
"#,
        )
        .expect("partial config should parse");

        assert_eq!(config.project_name, "Storefront");
        assert_eq!(config.assistant.reply_delay_ms, 250);
        assert_eq!(config.assistant.quick_action_delay_ms, 800);
        assert!(!config.canvas.seed_elements);
        assert_eq!(config.canvas.default_element_size(), Size::new(120.0, 40.0));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = temp_file("missing");
        let config = BuilderConfig::load(&path).expect("missing file should default");
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn malformed_file_reports_path() {
        let path = temp_file("malformed");
        fs::write(&path, "[canvas\ngrid_spacing = ").expect("fixture should write");

        let error = BuilderConfig::load(&path).expect_err("malformed config should fail");
        assert!(matches!(error, ConfigError::Parse { .. }));
        assert!(error.to_string().contains("failed to parse"));

        let _ = fs::remove_file(path);
    }
}
