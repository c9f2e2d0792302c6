use std::{collections::HashSet, path::PathBuf};

use serde_json::Value;

use super::Armadevrc;

/// Loads and merges config files in priority order, later files overriding
/// earlier ones. Unreadable or unparsable files are skipped with a log entry
/// rather than failing the load.
pub fn load_configs(config_files: Vec<PathBuf>) -> Armadevrc {
    let mut config_jsons = Vec::new();

    for config_file in config_files {
        log::info!("Loading config file: {:?}", config_file);
        let config_content = match std::fs::read_to_string(&config_file) {
            Ok(content) => content,
            Err(e) => {
                log::error!("Failed to read config file: {:?}, error: {:?}", config_file, e);
                continue;
            }
        };

        match serde_json::from_str(&config_content) {
            Ok(json) => config_jsons.push(json),
            Err(e) => {
                log::error!("Failed to parse config file: {:?}, error: {:?}", config_file, e);
            }
        }
    }

    if config_jsons.is_empty() {
        log::info!("No valid config file found, using defaults.");
        return Armadevrc::default();
    }

    let merged = config_jsons
        .into_iter()
        .fold(Value::Object(Default::default()), |mut acc, item| {
            merge_values(&mut acc, item);
            acc
        });

    serde_json::from_value(merged).unwrap_or_else(|err| {
        log::error!("Failed to parse config: error: {:?}", err);
        Armadevrc::default()
    })
}

fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => {
                        merge_values(base_value, overlay_value);
                    }
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (Value::Array(base_array), Value::Array(overlay_array)) => {
            let mut seen = HashSet::new();
            base_array.retain(|item| seen.insert(item.clone()));
            base_array.extend(
                overlay_array
                    .into_iter()
                    .filter(|item| seen.insert(item.clone())),
            );
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let config = load_configs(vec![]);
        assert_eq!(config.script_extension, "sqf");
        assert_eq!(config.prep_file_name, "XEH_PREP.hpp");
        assert_eq!(config.stringtable_file_name, "stringtable.xml");
        assert_eq!(config.prefix_file_name, "$PBOPREFIX$");
        assert_eq!(config.stringtable_macro_suffixes, vec!["STRING"]);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".armadevrc.json");
        std::fs::write(&path, r#"{ "scriptExtension": "fsm" }"#).unwrap();

        let config = load_configs(vec![path]);
        assert_eq!(config.script_extension, "fsm");
        assert_eq!(config.prep_file_name, "XEH_PREP.hpp");
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.json");
        let local = dir.path().join("local.json");
        std::fs::write(&global, r#"{ "prepFileName": "PREP.hpp", "scriptExtension": "fsm" }"#)
            .unwrap();
        std::fs::write(&local, r#"{ "prepFileName": "XEH_PREP.hpp" }"#).unwrap();

        let config = load_configs(vec![global, local]);
        assert_eq!(config.prep_file_name, "XEH_PREP.hpp");
        assert_eq!(config.script_extension, "fsm");
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".armadevrc.json");
        std::fs::write(&path, "not json").unwrap();

        let config = load_configs(vec![path]);
        assert_eq!(config.script_extension, "sqf");
    }
}
