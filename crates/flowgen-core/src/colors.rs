//! Terminal highlighting for generated Flow text.
//!
//! Each field holds the escape sequence for one role in a declaration;
//! an uncolored palette holds empty strings, so renderers interpolate the
//! fields unconditionally.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    /// Declared type names (blue).
    pub name: &'static str,
    /// `//` comment lines and the file header (green).
    pub comment: &'static str,
    /// Keywords, braces and separators (dim).
    pub syntax: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ANSI: Self = Self {
        name: "\x1b[34m",
        comment: "\x1b[32m",
        syntax: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const PLAIN: Self = Self {
        name: "",
        comment: "",
        syntax: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ANSI } else { Self::PLAIN }
    }
}
