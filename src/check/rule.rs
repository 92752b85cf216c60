//! Suffix pair describing which files need a story file and what it is called.
use std::ffi::{OsStr, OsString};

use crate::lib::paths::strip_suffix;

pub const DEFAULT_COMPONENT_SUFFIX: &str = ".tsx";
pub const DEFAULT_STORY_SUFFIX: &str = ".stories.tsx";

/// Literal, case-sensitive suffixes for component and story files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryFileRule {
    pub component_suffix: String,
    pub story_suffix: String,
}

impl Default for StoryFileRule {
    fn default() -> Self {
        Self {
            component_suffix: DEFAULT_COMPONENT_SUFFIX.to_string(),
            story_suffix: DEFAULT_STORY_SUFFIX.to_string(),
        }
    }
}

impl StoryFileRule {
    pub fn is_story(&self, path: impl AsRef<OsStr>) -> bool {
        strip_suffix(path.as_ref(), &self.story_suffix).is_some()
    }

    /// Story path for a component path, by replacing the component suffix.
    ///
    /// Returns `None` for story files and for paths that are not components.
    pub fn story_path_for(&self, path: impl AsRef<OsStr>) -> Option<OsString> {
        let path = path.as_ref();
        if self.is_story(path) {
            return None;
        }
        let mut story = strip_suffix(path, &self.component_suffix)?.to_os_string();
        story.push(&self.story_suffix);
        Some(story)
    }
}
