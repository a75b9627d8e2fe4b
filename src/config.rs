//! Rename session configuration.

/// Configuration for a [`Renamer`](crate::session::Renamer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameConfig {
    /// Trim surrounding whitespace from a current name before treating it as a template
    pub trim_template: bool,
    /// Look for a `[template]` in the entity description when the name itself produced no change
    pub description_fallback: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            trim_template: true,
            description_fallback: true,
        }
    }
}

impl RenameConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trim_template(mut self, trim: bool) -> Self {
        self.trim_template = trim;
        self
    }

    pub fn with_description_fallback(mut self, enabled: bool) -> Self {
        self.description_fallback = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenameConfig::default();
        assert!(config.trim_template);
        assert!(config.description_fallback);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(RenameConfig::new(), RenameConfig::default());
    }

    #[test]
    fn test_builder_methods() {
        let config = RenameConfig::new()
            .with_trim_template(false)
            .with_description_fallback(false);
        assert!(!config.trim_template);
        assert!(!config.description_fallback);
    }

    #[test]
    fn test_builder_override() {
        let config = RenameConfig::new().with_trim_template(false).with_trim_template(true);
        assert!(config.trim_template); // Last value wins
    }
}
