use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config. A missing source yields `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.as_ref()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().map_err(|_| ConfigError::Poisoned)?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if let Some(config_data) = self.config_content_provider.get_config_content()? {
            let config = self.config_serializer.deserialize(&config_data)?;
            config.validate().map_err(ConfigError::Validation)?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().map_err(|_| ConfigError::Poisoned)?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
    struct SampleConfig {
        games: u32,
        label: Option<String>,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                games: 3,
                label: None,
            }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.games == 0 {
                return Err("games must be positive".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_source_yields_default() {
        let manager: ConfigManager<_, SampleConfig> =
            ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let manager: ConfigManager<_, SampleConfig> =
            ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer::new());
        let config = SampleConfig {
            games: 7,
            label: Some("nightly".to_string()),
        };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_invalid_content_rejected_on_load() {
        let provider = MemoryProvider::default();
        provider.set_config_content("games: 0\nlabel: null\n").unwrap();
        let manager: ConfigManager<_, SampleConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let provider = MemoryProvider::default();
        provider.set_config_content("games: [not a number").unwrap();
        let manager: ConfigManager<_, SampleConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_invalid_config_not_saved() {
        let manager: ConfigManager<_, SampleConfig> =
            ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer::new());
        let result = manager.set_config(&SampleConfig {
            games: 0,
            label: None,
        });
        assert!(matches!(result, Err(ConfigError::Validation(_))));
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let file_path = get_temp_file_path();
        let config = SampleConfig {
            games: 11,
            label: Some("file".to_string()),
        };

        let writer: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&file_path);
        writer.set_config(&config).unwrap();

        let reader: ConfigManager<_, SampleConfig> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reader.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_missing_file_is_none() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        assert!(provider.get_config_content().unwrap().is_none());
    }
}
