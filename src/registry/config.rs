//! Registry configuration

use crate::media::Format;

/// Format registry configuration options
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Name of the initial default format (None = first registered wins)
    pub default_format: Option<String>,

    /// Also unset the default name when the registry is cleared
    pub reset_default_on_clear: bool,

    /// Formats registered at construction, in order
    pub formats: Vec<Format>,
}

impl RegistryConfig {
    /// Set the initial default format name
    pub fn default_format(mut self, name: impl Into<String>) -> Self {
        self.default_format = Some(name.into());
        self
    }

    /// Set whether `clear()` also unsets the default name
    pub fn reset_default_on_clear(mut self, reset: bool) -> Self {
        self.reset_default_on_clear = reset;
        self
    }

    /// Add a format to register at construction
    pub fn format(mut self, format: Format) -> Self {
        self.formats.push(format);
        self
    }
}
