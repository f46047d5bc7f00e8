// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::color_mode::ColorMode;
use crate::color_utils::{format_color, parse_color};
use crate::config_updaters::{update_config_to_the_latest_version, LATEST_CONFIG_VERSION};
use crate::indicator::IndicatorMode;
use crate::json_config_updater::UpdateResult;
use crate::picker::{DEFAULT_COLOR, DEFAULT_INDICATOR, DEFAULT_MODE, DEFAULT_TEXT_INDICATOR_STATE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_NAME: &str = "coloromatic_config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to serialize the config.\nError: {0}")]
    Serialize(serde_json::Error),
    #[error("Failed to write config to '{path}'.\nMake sure you have write rights to that folder.\nError: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("Config file '{path}' can't be read.\nMake sure you have read rights to that file.\nError: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Config file '{path}' has incorrect json format:\n{source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Config file '{path}' should contain a json object")]
    NotAnObject { path: String },
    #[error("Failed to update config file '{path}'.\nError: {message}")]
    Update { path: String, message: String },
}

/// Packed color stored as a `#AARRGGBB` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(pub u32);

impl Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_color(self.0, true))
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let color = parse_color(&s).map_err(serde::de::Error::custom)?;
        Ok(HexColor(color))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub version: String,
    pub initial_color: HexColor,
    pub color_mode: ColorMode,
    pub indicator_mode: IndicatorMode,
    pub show_text_indicator: bool,
    #[serde(skip)]
    pub config_path: PathBuf,
    #[serde(skip)]
    pub config_read_error: Option<String>,
}

pub fn get_default_config(config_path: PathBuf) -> AppConfig {
    AppConfig {
        version: LATEST_CONFIG_VERSION.to_string(),
        initial_color: HexColor(DEFAULT_COLOR),
        color_mode: DEFAULT_MODE,
        indicator_mode: DEFAULT_INDICATOR,
        show_text_indicator: DEFAULT_TEXT_INDICATOR_STATE,
        config_path,
        config_read_error: None,
    }
}

pub fn get_config_path(custom_config_path: Option<&str>) -> PathBuf {
    if let Some(config_path) = custom_config_path {
        PathBuf::from(config_path)
    } else {
        get_exe_folder_path().join(DEFAULT_CONFIG_NAME)
    }
}

fn get_exe_folder_path() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_default()
        .parent()
        .unwrap_or(Path::new(""))
        .to_path_buf()
}

fn default_config_with_error(config: &AppConfig, error: String) -> AppConfig {
    AppConfig {
        config_read_error: Some(error),
        ..config.clone()
    }
}

fn write_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let data = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_string_lossy().to_string(),
        source,
    })
}

pub fn save_config_to_file(config: &AppConfig) -> Result<(), ConfigError> {
    write_config(config, &config.config_path)
}

/// Reads the config, creating it with default values if it doesn't exist.
/// Never fails, on error the default config is returned with `config_read_error` set.
pub fn read_config(config_path: PathBuf) -> AppConfig {
    let default_config = get_default_config(config_path);

    match read_config_file(&default_config) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Using default config: {}", err);
            default_config_with_error(&default_config, err.to_string())
        }
    }
}

fn read_config_file(default_config: &AppConfig) -> Result<AppConfig, ConfigError> {
    let config_path = &default_config.config_path;
    let path_string = config_path.to_string_lossy().to_string();

    if !config_path.exists() {
        tracing::info!("Creating default config at '{}'", path_string);
        write_config(default_config, config_path)?;
    }

    let data = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: path_string.clone(),
        source,
    })?;
    let mut config_json: serde_json::Value =
        serde_json::from_str(&data).map_err(|source| ConfigError::Json {
            path: path_string.clone(),
            source,
        })?;
    if !config_json.is_object() {
        return Err(ConfigError::NotAnObject { path: path_string });
    }

    let update_result = update_config_to_the_latest_version(&mut config_json);
    if let UpdateResult::Error(message) = &update_result {
        return Err(ConfigError::Update {
            path: path_string,
            message: message.clone(),
        });
    }

    let mut config: AppConfig =
        serde_json::from_value(config_json).map_err(|source| ConfigError::Json {
            path: path_string.clone(),
            source,
        })?;
    config.config_path = config_path.clone();

    if update_result == UpdateResult::Updated {
        tracing::info!("Config '{}' was updated to version {}", path_string, config.version);
        write_config(&config, config_path)?;
    }

    return Ok(config);
}
