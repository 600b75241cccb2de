use crate::error::{CareerscopeError, Result};
use crate::types::config::CareerscopeConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "careerscope.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/careerscope/config.toml";

/// Load the optional config for a run: a global file under $HOME overlaid
/// by a `careerscope.toml` in the given directory. Returns None when
/// neither file exists.
pub fn load_config(dir: &Path) -> Result<Option<CareerscopeConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(dir, global.as_deref())
}

pub(crate) fn load_config_with_global(
    dir: &Path,
    global_path: Option<&Path>,
) -> Result<Option<CareerscopeConfig>> {
    let local_path = dir.join(DEFAULT_CONFIG_FILE);

    let mut merged = Value::Table(Map::new());
    let mut found = false;
    for path in [global_path, Some(local_path.as_path())].into_iter().flatten() {
        if !path.exists() {
            continue;
        }
        found = true;
        let content = std::fs::read_to_string(path)?;
        let value: Value = toml::from_str(&content)
            .map_err(|e| CareerscopeError::ConfigParse(format!("{}: {}", path.display(), e)))?;
        merge_toml(&mut merged, value);
    }

    if !found {
        return Ok(None);
    }

    let config: CareerscopeConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CareerscopeError::ConfigParse(e.to_string()))?;
    config.validate()?;
    tracing::debug!("loaded config for {}", dir.display());
    Ok(Some(config))
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
