// Hotel configuration: the room inventory a session starts with

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{seed_rooms, CatalogError, RoomCatalog},
    room::Room,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),

    #[error("Configuration lists no rooms")]
    EmptyCatalog,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HotelConfig {
    pub rooms: Vec<Room>,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self { rooms: seed_rooms() }
    }
}

impl HotelConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: HotelConfig = serde_json::from_str(json)?;
        if config.rooms.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn build_catalog(self) -> Result<RoomCatalog, ConfigError> {
        Ok(RoomCatalog::from_rooms(self.rooms)?)
    }
}
