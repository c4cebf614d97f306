//! Dashboard configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DashboardError, DashboardResult};
use crate::types::tx::TxHash;

/// Network endpoints and explorer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Horizon base URL.
    pub horizon_url: String,
    /// Network passphrase the wallet signs against.
    pub network_passphrase: String,
    /// Deployed rent-a-car contract id (`C...` strkey).
    pub contract_id: String,
    /// Block-explorer base URL for transaction links.
    pub explorer_base_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            horizon_url: "https://horizon-testnet.stellar.org".to_string(),
            network_passphrase: "Test SDF Network ; September 2015".to_string(),
            contract_id: String::new(),
            explorer_base_url: "https://stellar.expert/explorer/testnet".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> DashboardResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| DashboardError::Config(e.to_string()))
    }

    /// Block-explorer link for a submitted transaction.
    pub fn explorer_tx_url(&self, hash: &TxHash) -> String {
        format!("{}/tx/{hash}", self.explorer_base_url.trim_end_matches('/'))
    }
}
