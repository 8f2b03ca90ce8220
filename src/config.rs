// Configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub theme: String,
    pub icons: bool,
    pub vim_mode: bool,
    /// Symbol prefixed to formatted amounts
    pub currency_symbol: String,
    /// Tab shown on startup (overview, documents, transactions, expenses,
    /// messages, reports, matching, payroll)
    pub default_tab: String,
    /// Number of recent transactions shown on the overview tab
    pub overview_recent_limit: usize,
    /// Include rejected expenses in the default expense listing
    pub show_rejected: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            icons: true,
            vim_mode: true,
            currency_symbol: "$".to_string(),
            default_tab: "overview".to_string(),
            overview_recent_limit: 5,
            show_rejected: true,
        }
    }
}

impl Config {
    /// Get default config path: ~/.config/fincrew/config.yaml
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("fincrew").join("config.yaml"))
    }

    /// Load config from path, falling back to defaults if not found
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = path.unwrap_or_else(|| Self::default_path().unwrap_or_default());

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_yaml::from_str(&contents)?;
            Ok(config)
        } else {
            // Return defaults if no config file exists
            Ok(Self::default())
        }
    }

    /// Save config to path
    pub fn save(&self, path: PathBuf) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }
}
