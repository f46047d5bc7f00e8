// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use serde_json::Value as JsonValue;

// Rules for registering patchers:
// - versions are registered from the oldest to the newest
// - a json without the version field is older than the first registered version
// - a version that needs no patching still gets an empty patcher if it's ever written to a file
// - released patchers are never changed, fixes go into a new version

pub struct JsonConfigUpdater {
    version_field_name: &'static str,
    patchers: Vec<Patcher>,
}

#[derive(Debug, PartialEq)]
pub enum UpdateResult {
    Updated,
    NoUpdateNeeded,
    Error(String),
}

struct Patcher {
    version_to: &'static str,
    function: fn(&mut JsonValue),
}

impl JsonConfigUpdater {
    pub fn new(version_field_name: &'static str) -> Self {
        Self {
            version_field_name,
            patchers: Vec::new(),
        }
    }

    pub fn add_update_function(&mut self, version_to: &'static str, function: fn(&mut JsonValue)) {
        self.patchers.push(Patcher {
            version_to,
            function,
        });
    }

    pub fn latest_version(&self) -> Option<&'static str> {
        self.patchers.last().map(|patcher| patcher.version_to)
    }

    pub fn update_json(&self, json: &mut JsonValue) -> UpdateResult {
        let Some(latest_version) = self.latest_version() else {
            return UpdateResult::NoUpdateNeeded;
        };

        // patchers index into the json, which panics for anything but an object
        if !json.is_object() {
            return UpdateResult::Error("Config root is not a json object".to_string());
        }

        let first_patcher_idx = match json[self.version_field_name].as_str() {
            Some(version) => {
                match self
                    .patchers
                    .iter()
                    .rposition(|patcher| patcher.version_to == version)
                {
                    Some(found_idx) => found_idx + 1,
                    None => {
                        return UpdateResult::Error(format!(
                            "Unknown config version '{}', it was probably edited manually",
                            version
                        ))
                    }
                }
            }
            None => 0,
        };

        if first_patcher_idx == self.patchers.len() {
            return UpdateResult::NoUpdateNeeded;
        }

        for patcher in &self.patchers[first_patcher_idx..] {
            tracing::debug!("Updating config to version {}", patcher.version_to);
            (patcher.function)(json);
        }

        json[self.version_field_name] = JsonValue::String(latest_version.to_string());

        return UpdateResult::Updated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn add_indicator(json: &mut JsonValue) {
        json["indicator_mode"] = json!("Decimal");
    }

    fn rename_mode(json: &mut JsonValue) {
        json["color_mode"] = json["mode"].take();
        if let Some(object) = json.as_object_mut() {
            object.remove("mode");
        }
    }

    fn hide_indicator(json: &mut JsonValue) {
        json["show_text_indicator"] = json!(false);
    }

    fn make_updater() -> JsonConfigUpdater {
        let mut updater = JsonConfigUpdater::new("version");
        updater.add_update_function("1", add_indicator);
        updater.add_update_function("2", rename_mode);
        updater.add_update_function("3", hide_indicator);
        updater
    }

    #[test]
    fn test_updater_without_versions_does_nothing() {
        let mut json_value = json!({"mode": "RGB"});

        let result = JsonConfigUpdater::new("version").update_json(&mut json_value);

        assert_eq!(json_value, json!({"mode": "RGB"}));
        assert_eq!(result, UpdateResult::NoUpdateNeeded);
    }

    #[test]
    fn test_updater_without_previous_version_applies_all_patches() {
        let mut json_value = json!({"mode": "HSV"});

        let result = make_updater().update_json(&mut json_value);

        assert_eq!(
            json_value,
            json!({
                "color_mode": "HSV",
                "indicator_mode": "Decimal",
                "show_text_indicator": false,
                "version": "3"
            })
        );
        assert_eq!(result, UpdateResult::Updated);
    }

    #[test]
    fn test_updater_with_an_old_version_applies_patches_from_the_next_version() {
        let mut json_value = json!({"mode": "HSV", "indicator_mode": "Hex", "version": "1"});

        let result = make_updater().update_json(&mut json_value);

        assert_eq!(
            json_value,
            json!({
                "color_mode": "HSV",
                "indicator_mode": "Hex",
                "show_text_indicator": false,
                "version": "3"
            })
        );
        assert_eq!(result, UpdateResult::Updated);
    }

    #[test]
    fn test_updater_with_the_latest_version_does_nothing() {
        let mut json_value = json!({"color_mode": "RGB", "version": "3"});

        let result = make_updater().update_json(&mut json_value);

        assert_eq!(json_value, json!({"color_mode": "RGB", "version": "3"}));
        assert_eq!(result, UpdateResult::NoUpdateNeeded);
    }

    #[test]
    fn test_updater_with_non_object_json_reports_error() {
        for mut json_value in [json!([]), json!(5), json!("x"), json!(true), json!(null)] {
            let original = json_value.clone();

            let result = make_updater().update_json(&mut json_value);

            assert_eq!(json_value, original);
            assert_eq!(
                result,
                UpdateResult::Error("Config root is not a json object".to_string())
            );
        }
    }

    #[test]
    fn test_updater_with_unknown_version_reports_error() {
        let mut json_value = json!({"color_mode": "RGB", "version": "4"});

        let result = make_updater().update_json(&mut json_value);

        assert_eq!(json_value, json!({"color_mode": "RGB", "version": "4"}));
        assert_eq!(
            result,
            UpdateResult::Error(
                "Unknown config version '4', it was probably edited manually".to_string()
            )
        );
    }
}
