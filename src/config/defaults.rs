use crate::toc::{LevelMapping, DEFAULT_CONTAINER_ID};

pub fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

pub fn default_top_level() -> LevelMapping {
    LevelMapping::top_default()
}

pub fn default_sub_level() -> LevelMapping {
    LevelMapping::sub_default()
}

pub fn default_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}
