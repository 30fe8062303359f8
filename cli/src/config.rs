use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_engine::config::{
    ConfigError, ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::games::tictactoe::Difficulty;

const CONFIG_FILE_NAME: &str = "tictactoe_cli_config.yaml";
const MAX_GAMES: u32 = 100_000;

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub x_difficulty: Difficulty,
    pub o_difficulty: Difficulty,
    pub games: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    /// Command-line values win over the file; the merged result is validated.
    pub fn with_overrides(
        &self,
        x_difficulty: Option<Difficulty>,
        o_difficulty: Option<Difficulty>,
        games: Option<u32>,
        seed: Option<u64>,
    ) -> Result<Config, ConfigError> {
        let merged = Config {
            x_difficulty: x_difficulty.unwrap_or(self.x_difficulty),
            o_difficulty: o_difficulty.unwrap_or(self.o_difficulty),
            games: games.unwrap_or(self.games),
            seed: seed.or(self.seed),
        };
        merged.validate().map_err(ConfigError::Validation)?;
        Ok(merged)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 || self.games > MAX_GAMES {
            return Err(format!("games must be between 1 and {}", MAX_GAMES));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            x_difficulty: Difficulty::Hard,
            o_difficulty: Difficulty::Medium,
            games: 10,
            seed: None,
        }
    }
}
