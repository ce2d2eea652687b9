use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::toc::{LevelMapping, TocOptions};

/// tocgen configuration, as read from `_toc.yml` and friends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocConfig {
    /// Id of the element that receives the entries
    #[serde(default = "defaults::default_container_id")]
    pub container_id: String,

    /// Heading and wrapper for top-level entries
    #[serde(default = "defaults::default_top_level")]
    pub top_level: LevelMapping,

    /// Heading and wrapper for sub-level entries
    #[serde(default = "defaults::default_sub_level")]
    pub sub_level: LevelMapping,

    /// Extensions picked up when walking directories
    #[serde(default = "defaults::default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            container_id: defaults::default_container_id(),
            top_level: defaults::default_top_level(),
            sub_level: defaults::default_sub_level(),
            extensions: defaults::default_extensions(),
        }
    }
}

impl TocConfig {
    /// Override every setting the layer carries, leaving the rest untouched
    pub fn apply(&mut self, layer: TocConfigLayer) {
        if let Some(container_id) = layer.container_id {
            self.container_id = container_id;
        }
        if let Some(top_level) = layer.top_level {
            self.top_level = top_level;
        }
        if let Some(sub_level) = layer.sub_level {
            self.sub_level = sub_level;
        }
        if let Some(extensions) = layer.extensions {
            self.extensions = extensions;
        }
    }

    pub fn toc_options(&self) -> TocOptions {
        TocOptions {
            container_id: self.container_id.clone(),
            top_level: LevelMapping::new(&self.top_level.heading, &self.top_level.wrapper),
            sub_level: LevelMapping::new(&self.sub_level.heading, &self.sub_level.wrapper),
        }
    }
}

/// Settings read from a single configuration file; `None` means the key was absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TocConfigLayer {
    pub container_id: Option<String>,
    pub top_level: Option<LevelMapping>,
    pub sub_level: Option<LevelMapping>,
    pub extensions: Option<Vec<String>>,
}
