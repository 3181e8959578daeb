use crate::error::{AppError, Result};
use crate::types::config::AppConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "phonescore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".phonescore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/phonescore/config.toml";

/// Loads the layered config for `root`, or only `explicit` when given.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<AppConfig>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }
        let cfg = parse_merged(read_toml_value(path)?)?;
        return Ok(Some(cfg));
    }

    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<AppConfig>> {
    let mut merged = Value::Table(Map::new());
    let mut found = false;
    if let Some(path) = global_path {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    if !found {
        return Ok(None);
    }
    parse_merged(merged).map(Some)
}

fn parse_merged(merged: Value) -> Result<AppConfig> {
    let cfg: AppConfig = merged.try_into()?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AppError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::FormatSetting;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_uses_global_layer_alone() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(&global_path, "[output]\nformat = \"text\"\n").expect("global config should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("global config should be picked up");
        assert_eq!(cfg.output().format, Some(FormatSetting::Text));
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[predictor]
age = 12
sleep_hours = 6.0

[output]
format = "json"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[predictor]
age = 14
anxiety_level = 7

[output]
format = "md"
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".phonescore")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[output]
strict = true
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        let predictor = cfg.predictor_defaults();
        assert_eq!(predictor.age, Some(14));
        assert_eq!(predictor.sleep_hours, Some(6.0));
        assert_eq!(predictor.anxiety_level, Some(7));
        let output = cfg.output();
        assert_eq!(output.format, Some(FormatSetting::Md));
        assert!(output.strict);
    }

    #[test]
    fn explicit_config_must_exist() {
        let root = TempDir::new().expect("root temp dir should be created");
        let missing = root.path().join("nope.toml");
        let err = load_config(root.path(), Some(&missing)).expect_err("missing file should fail");
        assert!(matches!(err, AppError::ConfigNotFound(_)));
    }

    #[test]
    fn explicit_config_skips_discovered_layers() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[output]\nformat = \"json\"\n",
        )
        .expect("project config should write");
        let explicit = root.path().join("other.toml");
        fs::write(&explicit, "[predictor]\nage = 11\n").expect("explicit config should write");

        let cfg = load_config(root.path(), Some(&explicit))
            .expect("load should succeed")
            .expect("explicit config should load");
        assert_eq!(cfg.predictor_defaults().age, Some(11));
        assert!(cfg.output().format.is_none());
    }

    #[test]
    fn load_config_surfaces_type_mismatches_as_toml_errors() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[predictor]\nage = \"fifteen\"\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("type mismatch should fail");
        assert!(matches!(err, AppError::Toml(_)));
        assert!(err.to_string().starts_with("toml parse error:"));
    }

    #[test]
    fn load_config_reports_invalid_values() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[predictor]\nage = 42\n")
            .expect("project config should write");

        let err = load_config_with_global(root.path(), None).expect_err("validation should fail");
        assert!(err.to_string().contains("predictor.age = 42"));
    }
}
