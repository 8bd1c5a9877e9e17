//! Configuration types for Flow emission.

use flowgen_core::Colors;

/// Banner written under the `@flow` pragma.
pub const DO_NOT_EDIT: &str = "DO NOT EDIT -- automatically generated by flowgen";

/// Configuration for Flow emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to export types
    pub(crate) export: bool,
    /// Whether to start with the `@flow` pragma and do-not-edit banner
    pub(crate) header: bool,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: true,
            header: true,
            colors: Colors::PLAIN,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to export types.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    /// Set whether to write the file header.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
