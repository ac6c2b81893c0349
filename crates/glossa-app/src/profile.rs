use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use glossa_config::Config;

/// Config file picked up from the working directory
const DEFAULT_CONFIG_FILE: &str = "config.json";

fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

/// An explicit path must load. Otherwise `config.json` is used when
/// present, falling back to defaults with `GLOSSA_*` overrides.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return load_config_file(path);
    }

    let default_file = Path::new(DEFAULT_CONFIG_FILE);
    if default_file.exists() {
        match load_config_file(default_file) {
            Ok(config) => return Ok(config),
            Err(e) => tracing::warn!("Ignoring unreadable {}: {}", DEFAULT_CONFIG_FILE, e),
        }
    }

    tracing::info!("Using default config");
    Ok(Config::new())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn explicit_file_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"use_fallback_table": false, "tooltip": {"margin": 4.0}}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(!config.use_fallback_table);
        assert_eq!(config.tooltip.margin, 4.0);
        assert_eq!(config.tooltip.gap, 8.0);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/glossa.json"))).is_err());
    }
}
