//! Story-file existence check: decides whether a component file has its story.
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use crate::lib::paths::base_name;

pub mod probe;
pub mod rule;

pub use probe::{FileProbe, FsProbe};
pub use rule::{StoryFileRule, DEFAULT_COMPONENT_SUFFIX, DEFAULT_STORY_SUFFIX};

/// Outcome of checking one file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The path is itself a story file.
    IsStory,
    /// The path is not a component file; the check does not apply.
    NotApplicable,
    /// The companion story file exists.
    Found { story_path: PathBuf },
    /// The companion story file is missing.
    Missing { story_path: PathBuf },
}

impl Verdict {
    pub fn passed(&self) -> bool {
        !matches!(self, Verdict::Missing { .. })
    }

    pub fn story_path(&self) -> Option<&Path> {
        match self {
            Verdict::Found { story_path } | Verdict::Missing { story_path } => {
                Some(story_path.as_path())
            }
            Verdict::IsStory | Verdict::NotApplicable => None,
        }
    }

    /// Line printed for a failed check: `not found: <basename>`.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Verdict::Missing { story_path } => {
                Some(format!("not found: {}", base_name(story_path)))
            }
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Verdict::IsStory => "is_story",
            Verdict::NotApplicable => "not_applicable",
            Verdict::Found { .. } => "found",
            Verdict::Missing { .. } => "missing",
        }
    }
}

/// Check `file_path` against `rule`, asking `probe` about the derived story path.
///
/// Checks run in a fixed order: story files pass, component files need their
/// story, anything else passes untouched.
pub fn check_file(
    rule: &StoryFileRule,
    file_path: impl AsRef<OsStr>,
    probe: &impl FileProbe,
) -> Verdict {
    let file_path = file_path.as_ref();
    if rule.is_story(file_path) {
        return Verdict::IsStory;
    }

    let Some(story_path) = rule.story_path_for(file_path).map(PathBuf::from) else {
        return Verdict::NotApplicable;
    };

    if probe.exists(&story_path) {
        Verdict::Found { story_path }
    } else {
        Verdict::Missing { story_path }
    }
}
