//! Converter configuration

/// Constructor-time options, fixed for the lifetime of a converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Reserved for unknown-word handling; does not change conversion yet
    pub use_fingerspelling: bool,
    /// Emit the subject as a `-t` topic instead of plain glosses
    pub detailed_markers: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            use_fingerspelling: true,
            detailed_markers: true,
        }
    }
}

impl ConverterConfig {
    /// Create a configuration builder
    pub fn builder() -> ConverterConfigBuilder {
        ConverterConfigBuilder::default()
    }
}

/// Fluent builder for [`ConverterConfig`]
#[derive(Debug, Default)]
pub struct ConverterConfigBuilder {
    use_fingerspelling: Option<bool>,
    detailed_markers: Option<bool>,
}

impl ConverterConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_fingerspelling(mut self, enabled: bool) -> Self {
        self.use_fingerspelling = Some(enabled);
        self
    }

    pub fn detailed_markers(mut self, enabled: bool) -> Self {
        self.detailed_markers = Some(enabled);
        self
    }

    /// Build the configuration, keeping defaults for unset options
    pub fn build(self) -> ConverterConfig {
        let defaults = ConverterConfig::default();
        ConverterConfig {
            use_fingerspelling: self
                .use_fingerspelling
                .unwrap_or(defaults.use_fingerspelling),
            detailed_markers: self.detailed_markers.unwrap_or(defaults.detailed_markers),
        }
    }
}
