use log::debug;

use crate::config::TocConfig;
use crate::toc::LevelMapping;
use crate::utils::error::{BoxResult, TocError};

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Validate the configuration
pub fn validate_config(config: &TocConfig) -> BoxResult<()> {
    validate_container_id(&config.container_id)?;
    validate_level("top_level", &config.top_level)?;
    validate_level("sub_level", &config.sub_level)?;

    if config.top_level.heading.eq_ignore_ascii_case(&config.sub_level.heading) {
        return Err(TocError::Config(format!(
            "top_level and sub_level both use <{}>", config.top_level.heading
        )).into());
    }

    if config.extensions.iter().any(|ext| ext.trim().is_empty()) {
        return Err(TocError::Config("extensions must not contain empty entries".to_string()).into());
    }

    debug!("Configuration is valid");
    Ok(())
}

fn validate_container_id(id: &str) -> BoxResult<()> {
    if id.is_empty() {
        return Err(TocError::Config("container_id must not be empty".to_string()).into());
    }
    if id.chars().any(char::is_whitespace) {
        return Err(TocError::Config(format!(
            "container_id must not contain whitespace: {:?}", id
        )).into());
    }
    Ok(())
}

fn validate_level(name: &str, mapping: &LevelMapping) -> BoxResult<()> {
    if !HEADING_TAGS.iter().any(|h| h.eq_ignore_ascii_case(&mapping.heading)) {
        return Err(TocError::Config(format!(
            "{}.heading must be one of h1-h6, got {:?}", name, mapping.heading
        )).into());
    }

    let wrapper_ok = !mapping.wrapper.is_empty()
        && mapping.wrapper.chars().all(|c| c.is_ascii_alphanumeric());
    if !wrapper_ok {
        return Err(TocError::Config(format!(
            "{}.wrapper is not a valid tag name: {:?}", name, mapping.wrapper
        )).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TocConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_container_id() {
        let mut config = TocConfig::default();
        config.container_id = String::new();
        assert!(validate_config(&config).is_err());
        config.container_id = "my toc".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_non_heading_levels() {
        let mut config = TocConfig::default();
        config.top_level = LevelMapping::new("div", "dt");
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("top_level.heading"));
    }

    #[test]
    fn test_rejects_same_heading_for_both_levels() {
        let mut config = TocConfig::default();
        config.sub_level = LevelMapping::new("H2", "dd");
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_wrapper() {
        let mut config = TocConfig::default();
        config.sub_level = LevelMapping::new("h3", "<dd>");
        assert!(validate_config(&config).is_err());
    }
}
