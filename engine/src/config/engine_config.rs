use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::games::tictactoe::{Difficulty, DEFAULT_DEPTH_CUTOFF};

pub const CONFIG_FILE_NAME: &str = "tictactoe_engine_config.yaml";

/// Who the engine is and how it plays by default. The search never reads
/// this; callers pass the values in.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct EngineConfig {
    pub username: String,
    pub difficulty: Difficulty,
    #[serde(default = "default_depth_cutoff")]
    pub depth_cutoff: usize,
}

fn default_depth_cutoff() -> usize {
    DEFAULT_DEPTH_CUTOFF
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("username must not be empty".to_string());
        }
        if self.depth_cutoff == 0 {
            return Err("depth_cutoff must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            username: "AI_Player".to_string(),
            difficulty: Difficulty::Random,
            depth_cutoff: DEFAULT_DEPTH_CUTOFF,
        }
    }
}

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Manager for `path`, or for the config file next to the executable.
pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, EngineConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_default_config_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigContentProvider, ConfigSerializer, MemoryContentConfigProvider};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_engine_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = EngineConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: EngineConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_manager() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));

        let config = EngineConfig {
            username: "Bot".to_string(),
            difficulty: Difficulty::Optimal,
            depth_cutoff: 3,
        };
        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(Some(file_path.clone()));
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_yields_default() {
        let manager = get_config_manager(Some(get_temp_file_path()));
        assert_eq!(manager.get_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_collaborator_difficulty_names_are_read() {
        let provider = MemoryContentConfigProvider::new(Some(
            "username: Tester\ndifficulty: hard\n".to_string(),
        ));
        let manager = ConfigManager::new(provider, YamlConfigSerializer::new());
        let config: EngineConfig = manager.get_config().unwrap();
        assert_eq!(config.difficulty, Difficulty::Optimal);
        assert_eq!(config.depth_cutoff, DEFAULT_DEPTH_CUTOFF);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let provider = MemoryContentConfigProvider::new(Some(
            "username: Tester\ndifficulty: easy\ndepth_cutoff: 0\n".to_string(),
        ));
        let manager: ConfigManager<_, EngineConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        let error = manager.get_config().unwrap_err();
        assert!(error.contains("depth_cutoff"));
    }

    #[test]
    fn test_set_config_validates_before_writing() {
        let provider = MemoryContentConfigProvider::default();
        let manager = ConfigManager::new(provider, YamlConfigSerializer::new());
        let config = EngineConfig {
            username: "  ".to_string(),
            ..EngineConfig::default()
        };
        assert!(manager.set_config(&config).is_err());
        assert_eq!(manager.get_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_memory_provider_round_trip() {
        let provider = MemoryContentConfigProvider::default();
        assert_eq!(provider.get_config_content().unwrap(), None);
        provider.set_config_content("username: A").unwrap();
        assert_eq!(provider.get_config_content().unwrap().as_deref(), Some("username: A"));
    }
}
