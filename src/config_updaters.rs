// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::json_config_updater::{JsonConfigUpdater, UpdateResult};
use serde_json::Value as JsonValue;

pub static VERSION_FIELD_NAME: &str = "version";
pub static LATEST_CONFIG_VERSION: &str = "0.3.0";

pub fn update_config_to_the_latest_version(config_json: &mut JsonValue) -> UpdateResult {
    if config_json[VERSION_FIELD_NAME].as_str() == Some(LATEST_CONFIG_VERSION) {
        return UpdateResult::NoUpdateNeeded;
    }

    let json_config_updater = register_config_updaters();
    return json_config_updater.update_json(config_json);
}

fn register_config_updaters() -> JsonConfigUpdater {
    let mut json_config_updater = JsonConfigUpdater::new(VERSION_FIELD_NAME);

    json_config_updater.add_update_function("0.3.0", |_config_json| {
        // empty updater to have a name for the first version
    });
    // add update functions here
    // don't forget to update LATEST_CONFIG_VERSION at the beginning of the file

    json_config_updater
}
