use tracing::{debug, info};

use super::CheckConfig;

pub fn log_builtin() {
    debug!(
        target: "story_check::config",
        "No --config given; using built-in .tsx/.stories.tsx rule"
    );
}

pub fn log_loaded(config: &CheckConfig) {
    info!(
        target: "story_check::config",
        path = %config
            .source_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        component_suffix = %config.rule.component_suffix,
        story_suffix = %config.rule.story_suffix,
        "Configuration file loaded successfully"
    );
}
