//! FUNWAVE-TVD driver-file rendering.
//!
//! Each category becomes a section framed by a banner:
//!
//! ```text
//! # ----------------------------------------
//! # ----------------- GRID -----------------
//! # ----------------------------------------
//! DX    = 1.000000
//! Mglob = 250
//!
//! ```
//!
//! Names and values are aligned per section. Compile-time flags are left
//! out. Unassigned parameters of non-essential categories are written
//! commented out.

use super::Registry;
use crate::parameter::entity::Parameter;
use crate::schema::Category;
use crate::text::{Justify, JustifyLines};

pub const DEFAULT_WIDTH: usize = 40;
pub const DEFAULT_BANNER_CHAR: char = '-';

/// Options for [`Registry::to_input_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOptions {
    pub is_minimal: bool,
    pub modules: Vec<Category>,
    /// Append each description as a trailing comment
    pub with_desc: bool,
    /// Banner width, not counting the leading `# `
    pub width: usize,
    pub banner_char: char,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            is_minimal: true,
            modules: Vec::new(),
            with_desc: false,
            width: DEFAULT_WIDTH,
            banner_char: DEFAULT_BANNER_CHAR,
        }
    }
}

impl InputOptions {
    pub fn full() -> Self {
        Self {
            is_minimal: false,
            ..Self::default()
        }
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
}

/// Three banner lines framing `title`.
///
/// The title line is `# ` followed by fill, ` TITLE `, fill; the extra fill
/// character of an odd split goes to the left.
pub fn banner(title: &str, width: usize, fill: char) -> [String; 3] {
    let rule = format!("# {}", fill.to_string().repeat(width));
    let n = width.saturating_sub(title.chars().count() + 2);
    let right = n / 2;
    let left = n - right;
    let titled = format!(
        "# {} {} {}",
        fill.to_string().repeat(left),
        title,
        fill.to_string().repeat(right)
    );
    [rule.clone(), titled, rule]
}

impl Registry {
    /// Render the filtered parameters as driver-file text.
    ///
    /// Returns an empty string when the filter selects nothing.
    pub fn to_input_string(&self, options: &InputOptions) -> String {
        self.input_sections(options)
            .into_iter()
            .flat_map(|(_, lines)| lines)
            .map(|line| line + "\n")
            .collect()
    }

    /// Rendered lines of each non-empty section, in output order.
    pub fn input_sections(&self, options: &InputOptions) -> Vec<(Category, Vec<String>)> {
        let selected = self.filter_grouped(options.is_minimal, &options.modules);

        let mut sections: Vec<(Category, Vec<&Parameter>)> = Vec::new();
        for (category, param) in selected {
            if param.is_flag() {
                continue;
            }
            match sections.last_mut() {
                Some((current, params)) if *current == category => params.push(param),
                _ => sections.push((category, vec![param])),
            }
        }

        sections
            .into_iter()
            .map(|(category, params)| (category, render_section(category, &params, options)))
            .collect()
    }
}

fn render_section(category: Category, params: &[&Parameter], options: &InputOptions) -> Vec<String> {
    let mut justify = if options.with_desc {
        JustifyLines::new(vec![Justify::Left; 3])
            .with_separators([" = ", "  "])
            .unwrap_or_else(|_| JustifyLines::new(vec![Justify::Left; 3]))
    } else {
        JustifyLines::new(vec![Justify::Left; 2]).with_separator(" = ")
    };

    for param in params {
        let mut row = vec![param.name().to_string(), param.native_value()];
        if options.with_desc {
            row.push(match param.description() {
                "" => String::new(),
                desc => format!("# {desc}"),
            });
        }
        // row length always matches the column count built above
        let _ = justify.push(row);
    }

    let mut lines: Vec<String> = banner(category.as_str(), options.width, options.banner_char).into();
    for (param, line) in params.iter().zip(justify.lines()) {
        let line = line.trim_end();
        if !category.is_essential() && !param.is_set() {
            lines.push(format!("# {line}"));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.push(String::new());
    lines
}
