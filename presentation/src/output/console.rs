//! Console output formatter for parameters and state reports

use colored::Colorize;
use funwave_application::{CheckConfigOutput, ExportOutput, RenderInputOutput};
use funwave_domain::{Category, Justify, JustifyLines, Parameter, State, StateReport};

/// Formats parameter listings and check results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Aligned table of parameters, one block per category.
    ///
    /// Consecutive entries of the same category share a block, so pass them
    /// in filter order.
    pub fn parameter_table(params: &[(Category, &Parameter)]) -> String {
        let mut output = String::new();
        let mut start = 0;
        while start < params.len() {
            let category = params[start].0;
            let end = params[start..]
                .iter()
                .position(|(c, _)| *c != category)
                .map_or(params.len(), |offset| start + offset);

            output.push_str(&Self::section_header(category.as_str()));
            for line in Self::table_lines(&params[start..end]) {
                output.push_str(&format!("  {line}\n"));
            }
            start = end;
        }
        output
    }

    /// Full check result: summary line followed by the reports.
    pub fn check_report(result: &CheckConfigOutput) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {} ({} checked, {} assigned, {} error(s), {} warning(s))\n",
            "Configuration:".cyan().bold(),
            Self::state_label(result.overall),
            result.checked,
            result.assigned,
            result.count(State::Error),
            result.count(State::Warning),
        ));
        output.push_str(&Self::reports(&result.issues));
        output
    }

    /// One line per report, errors first as given.
    pub fn reports(reports: &[StateReport]) -> String {
        reports
            .iter()
            .map(|report| {
                format!(
                    "  {} [{}] {}\n",
                    Self::state_label(report.state),
                    report.category.as_str().dimmed(),
                    report.message
                )
            })
            .collect()
    }

    /// Format reports as JSON
    pub fn reports_json(reports: &[StateReport]) -> String {
        serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn render_summary(result: &RenderInputOutput) -> String {
        let mut output = match &result.written_to {
            Some(path) => format!(
                "{} {} section(s) to {}\n",
                "Rendered".green().bold(),
                result.sections,
                path.display()
            ),
            None => String::new(),
        };
        if result.overall != State::Valid {
            output.push_str(&format!(
                "{} configuration is {}\n",
                "Note:".yellow().bold(),
                Self::state_label(result.overall)
            ));
            output.push_str(&Self::reports(&result.issues));
        }
        output
    }

    pub fn export_summary(result: &ExportOutput) -> String {
        match &result.written_to {
            Some(path) => format!(
                "{} {} entries to {}\n",
                "Exported".green().bold(),
                result.entries,
                path.display()
            ),
            None => String::new(),
        }
    }

    pub fn state_label(state: State) -> String {
        match state {
            State::Valid => state.as_str().green().bold().to_string(),
            State::Warning => state.as_str().yellow().bold().to_string(),
            State::Error => state.as_str().red().bold().to_string(),
        }
    }

    fn table_lines(params: &[(Category, &Parameter)]) -> Vec<String> {
        let mut table = JustifyLines::new(vec![Justify::Left; 5]).with_separator("  ");
        for (_, param) in params {
            let default = param
                .default_value()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string());
            let required = if param.is_required() { "required" } else { "" };
            // five cells for five columns
            let _ = table.push(vec![
                param.name().to_string(),
                param.datatype().to_string(),
                default,
                required.to_string(),
                param.description().to_string(),
            ]);
        }
        table
            .lines()
            .into_iter()
            .map(|line| line.trim_end().to_string())
            .collect()
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
