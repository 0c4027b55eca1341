use std::path::Path;

use serde::Deserialize;

use crate::error::{InteractError, Result};

/// Kind of network behind the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Real,
    Simulator,
}

/// Interactor configuration, read from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Gateway the transactions are sent to
    pub gateway_uri: String,

    /// Real network or local chain simulator (default: simulator)
    #[serde(default = "default_chain_type")]
    pub chain_type: ChainType,
}

fn default_chain_type() -> ChainType {
    ChainType::Simulator
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| InteractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn gateway_uri(&self) -> &str {
        &self.gateway_uri
    }

    pub fn use_chain_simulator(&self) -> bool {
        self.chain_type == ChainType::Simulator
    }
}
