//! Console output formatter for answers and configuration

use colored::Colorize;

/// Formats chain results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The answer block, labelled the same way the web page labels it.
    /// The answer itself is printed as generated.
    pub fn format_answer(answer: &str) -> String {
        format!("{} {}\n", "Final Answer:".green().bold(), answer)
    }

    /// Error line for a failed run.
    pub fn format_error(message: &str) -> String {
        format!("{} {}\n", "Error:".red().bold(), message)
    }

    /// Configuration dump: where it came from, then the redacted TOML.
    pub fn format_config(sources: &str, toml: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Configuration sources"));
        output.push_str(sources);
        output.push('\n');
        output.push_str(&Self::section_header("Effective configuration"));
        output.push_str(toml);
        output
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
