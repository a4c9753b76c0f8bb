use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, RecipeDefaults};
use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};

pub fn build_config(config_path: Option<&Path>, set_values: &[String]) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let mut file_config = apply_set_values(file_config, set_values)?;

    let defaults_file = file_config.defaults.take().unwrap_or_default();
    let recipe_defaults = RecipeDefaults {
        final_volume_liters: defaults_file
            .final_volume_liters
            .unwrap_or(defaults.final_volume_liters),
        preboil_volume_liters: defaults_file
            .preboil_volume_liters
            .unwrap_or(defaults.preboil_volume_liters),
        efficiency_percent: defaults_file
            .efficiency_percent
            .unwrap_or(defaults.efficiency_percent),
        attenuation_percent: defaults_file
            .attenuation_percent
            .unwrap_or(defaults.attenuation_percent),
    };

    let store_file = file_config.store.take().unwrap_or_default();
    let store_path = store_file.path;
    let store_key = store_file.default_key.unwrap_or(defaults.store_key);

    Ok(AppConfig {
        recipe_defaults,
        store_path,
        store_key,
    })
}

fn parse_float(key: &str, value_str: &str) -> Result<f64> {
    value_str
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid float value for {}: {}", key, value_str)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        let defaults = config.defaults.get_or_insert_with(Default::default);
        match key {
            "defaults.final-volume-liters" => {
                defaults.final_volume_liters = Some(parse_float(key, value_str)?);
            }
            "defaults.preboil-volume-liters" => {
                defaults.preboil_volume_liters = Some(parse_float(key, value_str)?);
            }
            "defaults.efficiency-percent" => {
                defaults.efficiency_percent = Some(parse_float(key, value_str)?);
            }
            "defaults.attenuation-percent" => {
                defaults.attenuation_percent = Some(parse_float(key, value_str)?);
            }
            "store.path" => {
                config.store.get_or_insert_with(Default::default).path =
                    Some(PathBuf::from(value_str));
            }
            "store.default-key" => {
                config.store.get_or_insert_with(Default::default).default_key =
                    Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("brew.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn with_store_path(dir: &Path) -> Vec<String> {
        vec![format!("store.path={}", dir.join("store").display())]
    }

    #[test]
    fn build_config_uses_built_in_defaults() {
        let dir = tempdir().unwrap();
        let app = build_config(None, &with_store_path(dir.path())).expect("build ok");
        let defaults = DefaultsConfig::default();

        assert_eq!(
            app.recipe_defaults.final_volume_liters,
            defaults.final_volume_liters
        );
        assert_eq!(
            app.recipe_defaults.preboil_volume_liters,
            defaults.preboil_volume_liters
        );
        assert_eq!(
            app.recipe_defaults.efficiency_percent,
            defaults.efficiency_percent
        );
        assert_eq!(
            app.recipe_defaults.attenuation_percent,
            defaults.attenuation_percent
        );
        assert_eq!(app.store_key, "last-recipe");
        assert_eq!(app.store_path, Some(dir.path().join("store")));
    }

    #[test]
    fn build_config_reads_file_values() {
        let dir = tempdir().unwrap();
        let store_dir = dir.path().join("recipes");
        let toml = format!(
            r#"
            [defaults]
            final-volume-liters = 23.0
            efficiency-percent = 68.0

            [store]
            path = "{}"
            default-key = "house-ipa"
            "#,
            store_dir.display()
        );
        let cfg_path = write_config(dir.path(), &toml);

        let app = build_config(Some(&cfg_path), &[]).expect("build ok");
        assert_eq!(app.recipe_defaults.final_volume_liters, 23.0);
        assert_eq!(app.recipe_defaults.efficiency_percent, 68.0);
        assert_eq!(app.recipe_defaults.attenuation_percent, 75.0);
        assert_eq!(app.store_path, Some(store_dir));
        assert_eq!(app.store_key, "house-ipa");
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = write_config(
            dir.path(),
            r#"
            [defaults]
            efficiency-percent = 68.0
            attenuation-percent = 70.0
            "#,
        );
        let mut set_values = with_store_path(dir.path());
        set_values.push("defaults.efficiency-percent=80".to_string());
        set_values.push("defaults.preboil-volume-liters=0".to_string());

        let app = build_config(Some(&cfg_path), &set_values).expect("build ok");
        assert_eq!(app.recipe_defaults.efficiency_percent, 80.0);
        assert_eq!(app.recipe_defaults.attenuation_percent, 70.0);
        assert_eq!(app.recipe_defaults.preboil_volume_liters, 0.0);
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let cfg_path = write_config(dir.path(), "[defaults]\nmash-ph = 5.2\n");
        let result = build_config(Some(&cfg_path), &[]);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = build_config(Some(&dir.path().join("absent.toml")), &[]);
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["defaults.efficiency-percent", "defaults.efficiency-percent=high"] {
            let result = apply_set_values(FileConfig::default(), &[bad.to_string()]);
            assert!(matches!(result, Err(CliError::Config(_))));
        }
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let result = apply_set_values(FileConfig::default(), &["mash.ph=5.2".to_string()]);
        match result {
            Err(CliError::Config(msg)) => assert!(msg.contains("mash.ph")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }
}
