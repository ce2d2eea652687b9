use serde::{Deserialize, Serialize};

/// Id of the element that receives generated entries unless configured otherwise
pub const DEFAULT_CONTAINER_ID: &str = "toc";

/// Which of the two indexed heading levels a heading belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TocLevel {
    Top,
    Sub,
}

/// Maps a heading tag to the element that wraps its entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelMapping {
    /// Heading tag, e.g. `h2`
    pub heading: String,
    /// Grouping element, e.g. `dt`
    pub wrapper: String,
}

impl LevelMapping {
    pub fn new(heading: &str, wrapper: &str) -> Self {
        Self {
            heading: heading.to_ascii_lowercase(),
            wrapper: wrapper.to_ascii_lowercase(),
        }
    }

    pub fn top_default() -> Self {
        Self::new("h2", "dt")
    }

    pub fn sub_default() -> Self {
        Self::new("h3", "dd")
    }
}

/// Options for table of contents generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
    pub container_id: String,
    pub top_level: LevelMapping,
    pub sub_level: LevelMapping,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            top_level: LevelMapping::top_default(),
            sub_level: LevelMapping::sub_default(),
        }
    }
}

impl TocOptions {
    pub fn with_container(mut self, id: &str) -> Self {
        self.container_id = id.to_string();
        self
    }

    /// Level of a heading tag, or `None` if the tag is not indexed
    pub fn level_of(&self, tag: &str) -> Option<TocLevel> {
        if tag.eq_ignore_ascii_case(&self.top_level.heading) {
            Some(TocLevel::Top)
        } else if tag.eq_ignore_ascii_case(&self.sub_level.heading) {
            Some(TocLevel::Sub)
        } else {
            None
        }
    }

    pub fn wrapper_for(&self, level: TocLevel) -> &str {
        match level {
            TocLevel::Top => &self.top_level.wrapper,
            TocLevel::Sub => &self.sub_level.wrapper,
        }
    }
}
