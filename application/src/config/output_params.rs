//! Output parameters: what the render and export use cases produce.
//!
//! [`RenderParams`] and [`ExportParams`] are the application-side mirror of
//! the domain's [`InputOptions`] and [`MappingOptions`], with the knobs that
//! only matter around a file write (strictness, pretty printing).

use funwave_domain::registry::native::{DEFAULT_BANNER_CHAR, DEFAULT_WIDTH};
use funwave_domain::{Category, InputOptions, MappingOptions};
use serde::{Deserialize, Serialize};

/// Driver-file rendering parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderParams {
    /// Only the parameters that must be set.
    pub is_minimal: bool,
    /// Non-essential categories to include even when nothing in them is set.
    pub modules: Vec<Category>,
    /// Trailing `# description` column.
    pub with_desc: bool,
    pub width: usize,
    pub banner_char: char,
    /// Refuse to render a configuration whose overall state is ERROR.
    pub strict: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            is_minimal: true,
            modules: Vec::new(),
            with_desc: false,
            width: DEFAULT_WIDTH,
            banner_char: DEFAULT_BANNER_CHAR,
            strict: false,
        }
    }
}

impl RenderParams {
    // ==================== Builder Methods ====================

    pub fn with_minimal(mut self, is_minimal: bool) -> Self {
        self.is_minimal = is_minimal;
        self
    }

    pub fn with_modules(mut self, modules: impl IntoIterator<Item = Category>) -> Self {
        self.modules = modules.into_iter().collect();
        self
    }

    pub fn with_desc(mut self, with_desc: bool) -> Self {
        self.with_desc = with_desc;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_banner_char(mut self, banner_char: char) -> Self {
        self.banner_char = banner_char;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn input_options(&self) -> InputOptions {
        InputOptions {
            is_minimal: self.is_minimal,
            modules: self.modules.clone(),
            with_desc: self.with_desc,
            width: self.width,
            banner_char: self.banner_char,
        }
    }
}

/// Mapping/JSON export parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportParams {
    pub is_minimal: bool,
    pub is_grouped: bool,
    pub is_detailed: bool,
    pub modules: Vec<Category>,
    pub pretty: bool,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            is_minimal: false,
            is_grouped: false,
            is_detailed: false,
            modules: Vec::new(),
            pretty: true,
        }
    }
}

impl ExportParams {
    // ==================== Builder Methods ====================

    pub fn with_minimal(mut self, is_minimal: bool) -> Self {
        self.is_minimal = is_minimal;
        self
    }

    pub fn with_grouped(mut self, is_grouped: bool) -> Self {
        self.is_grouped = is_grouped;
        self
    }

    pub fn with_detailed(mut self, is_detailed: bool) -> Self {
        self.is_detailed = is_detailed;
        self
    }

    pub fn with_modules(mut self, modules: impl IntoIterator<Item = Category>) -> Self {
        self.modules = modules.into_iter().collect();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn mapping_options(&self) -> MappingOptions {
        MappingOptions {
            is_minimal: self.is_minimal,
            is_grouped: self.is_grouped,
            is_detailed: self.is_detailed,
            modules: self.modules.clone(),
        }
    }
}
