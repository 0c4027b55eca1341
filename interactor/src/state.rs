use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{InteractError, Result};

pub const STATE_FILE: &str = "state.toml";

/// Address of the last deployed registry, kept between interactor runs.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct State {
    contract_address: Option<String>,
}

impl State {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| InteractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string(self)?;
        std::fs::write(path, content).map_err(|source| InteractError::Write {
            path: PathBuf::from(path),
            source,
        })
    }

    pub fn set_address(&mut self, address: String) {
        self.contract_address = Some(address);
    }

    pub fn current_address(&self) -> Result<&str> {
        self.contract_address
            .as_deref()
            .ok_or(InteractError::NotDeployed)
    }
}
