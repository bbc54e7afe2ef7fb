use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use std::{fs, path::Path, sync::LazyLock};

pub static CONFIG: LazyLock<BridgeConfiguration> = LazyLock::new(BridgeConfiguration::load);

/// Feature toggles for the bridge. The defaults match what a stock setup
/// should look like; disable individual features when a platform needs it.
#[derive(Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct BridgeConfiguration {
    /// Whether to register items that have no Bedrock counterpart (currently
    /// only the furnace minecart) as server-defined component items.
    pub add_non_bedrock_items: bool,
    /// Whether translated command suggestions are sent to the Bedrock client.
    pub command_suggestions: bool,
}

impl Default for BridgeConfiguration {
    fn default() -> Self {
        Self {
            add_non_bedrock_items: true,
            command_suggestions: true,
        }
    }
}

trait LoadTomlConfiguration {
    fn load() -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = Self::get_path();

        let config = if path.exists() {
            let file_content = fs::read_to_string(path)
                .unwrap_or_else(|_| panic!("Couldn't read configuration file at {:?}", path));

            toml::from_str(&file_content).unwrap_or_else(|err| {
                panic!(
                    "Couldn't parse config at {:?}. Reason: {}. Delete the old config and restart to regenerate it",
                    path,
                    err.message()
                )
            })
        } else {
            let content = Self::default();

            if let Err(err) = fs::write(path, toml::to_string(&content).unwrap()) {
                warn!(
                    "Couldn't write default config to {:?}. Reason: {}",
                    path, err
                );
            }

            content
        };

        config.validate();
        config
    }

    fn get_path() -> &'static Path;

    fn validate(&self);
}

impl LoadTomlConfiguration for BridgeConfiguration {
    fn get_path() -> &'static Path {
        Path::new("geode.toml")
    }

    fn validate(&self) {}
}

impl BridgeConfiguration {
    fn load() -> Self {
        <Self as LoadTomlConfiguration>::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let config = BridgeConfiguration::default();
        assert!(config.add_non_bedrock_items);
        assert!(config.command_suggestions);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: BridgeConfiguration = toml::from_str("command_suggestions = false").unwrap();
        assert!(!config.command_suggestions);
        assert!(config.add_non_bedrock_items);
    }
}
