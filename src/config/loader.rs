use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::{TocConfig, TocConfigLayer};
use crate::config::validation;
use crate::utils::error::{BoxResult, TocError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["_toc.yml", "_toc.yaml", "_toc.toml", "_toc.json"];

/// Load configuration from config files.
///
/// Explicit `config_files` are merged in order, later files winning. Without
/// them the first default file found in `source_dir` is used, if any.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<TocConfig> {
    let mut config = TocConfig::default();

    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_file(&source_dir).into_iter().collect(),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file
fn find_default_config_file<P: AsRef<Path>>(source_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| path.is_file())
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut TocConfig, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| TocError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    config.apply(parse_config(&content, config_path)?);
    Ok(())
}

/// Parse configuration text, choosing the format from the file extension
pub fn parse_config(content: &str, path: &Path) -> BoxResult<TocConfigLayer> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    match ext.as_str() {
        "yml" | "yaml" => parse_yaml_config(content, path),
        "toml" => parse_toml_config(content, path),
        "json" => parse_json_config(content, path),
        other => Err(TocError::Config(format!(
            "Unsupported configuration file format: {}", other
        )).into()),
    }
}

fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<TocConfigLayer> {
    // An empty YAML document sets nothing
    if content.trim().is_empty() {
        return Ok(TocConfigLayer::default());
    }
    serde_yaml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

fn parse_toml_config(content: &str, path: &Path) -> BoxResult<TocConfigLayer> {
    toml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

fn parse_json_config(content: &str, path: &Path) -> BoxResult<TocConfigLayer> {
    serde_json::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::LevelMapping;
    use crate::utils::fs::write_file;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempdir().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config, TocConfig::default());
    }

    #[test]
    fn test_yaml_default_file_is_found() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path().join("_toc.yml"),
            "container_id: nav\nsub_level:\n  heading: h4\n  wrapper: li\n",
        ).unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.container_id, "nav");
        assert_eq!(config.top_level, LevelMapping::top_default());
        assert_eq!(config.sub_level, LevelMapping::new("h4", "li"));
    }

    #[test]
    fn test_toml_and_json_are_merged_in_order() {
        let dir = tempdir().unwrap();
        let toml_path = dir.path().join("a.toml");
        let json_path = dir.path().join("b.json");
        write_file(&toml_path, "container_id = \"first\"\nextensions = [\"xhtml\"]\n").unwrap();
        write_file(&json_path, r#"{"container_id": "second"}"#).unwrap();

        let config = load_config(dir.path(), Some(vec![toml_path, json_path])).unwrap();
        assert_eq!(config.container_id, "second");
        assert_eq!(config.extensions, vec!["xhtml".to_string()]);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = load_config(dir.path(), Some(vec![dir.path().join("nope.yml")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let dir = tempdir().unwrap();
        write_file(dir.path().join("_toc.yml"), "top_level:\n  heading: p\n  wrapper: dt\n").unwrap();
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(parse_config("x", Path::new("toc.ini")).is_err());
    }

    #[test]
    fn test_empty_yaml_sets_nothing() {
        let layer = parse_config("\n", Path::new("_toc.yml")).unwrap();
        assert_eq!(layer, TocConfigLayer::default());
    }

    #[test]
    fn test_later_file_can_restore_default_value() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.yml");
        let second = dir.path().join("b.yml");
        write_file(&first, "container_id: nav\nextensions: [xhtml]\n").unwrap();
        write_file(&second, "container_id: toc\n").unwrap();

        let config = load_config(dir.path(), Some(vec![first, second])).unwrap();
        assert_eq!(config.container_id, "toc");
        assert_eq!(config.extensions, vec!["xhtml".to_string()]);
    }
}
