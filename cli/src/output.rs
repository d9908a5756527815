//! Output formatting for classification reports.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::report::TokenReport;

/// Formats reports in the requested output format.
///
/// The result always ends with a newline.
pub fn format_reports(reports: &[TokenReport], format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(reports)?,
        OutputFormat::Yaml => serde_yaml::to_string(reports)?,
        OutputFormat::Markdown => reports_to_markdown(reports),
        OutputFormat::Table => reports_to_table(reports),
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Attached value, or the cluster members joined with commas.
fn detail(report: &TokenReport) -> String {
    if let Some(value) = &report.inline_value {
        return format!("value={value}");
    }
    match &report.cluster_flags {
        Some(flags) => format!("flags={}", flags.join(",")),
        None => String::new(),
    }
}

fn reports_to_markdown(reports: &[TokenReport]) -> String {
    let mut out = String::new();

    out.push_str("| Input | Kind | Flag | Name | Requires Value | Detail |\n");
    out.push_str("|-------|------|------|------|----------------|--------|\n");
    for report in reports {
        let name = report.flag_name.as_deref().unwrap_or("");
        out.push_str(&format!(
            "| `{}` | {} | {} | {name} | {} | {} |\n",
            report.input,
            report.token.kind(),
            yes_no(report.is_flag),
            yes_no(report.requires_value),
            detail(report),
        ));
    }

    out
}

fn reports_to_table(reports: &[TokenReport]) -> String {
    let mut out = String::new();

    let input_width = reports
        .iter()
        .map(|r| r.input.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);
    let kind_width = reports
        .iter()
        .map(|r| r.token.kind().as_str().len())
        .max()
        .unwrap_or(4)
        .max(4);

    out.push_str(&format!(
        "{:<input_width$}  {:<kind_width$}  {:<4}  {:<6}  DETAIL\n",
        "INPUT", "KIND", "FLAG", "VALUE?"
    ));
    for report in reports {
        let line = format!(
            "{:<input_width$}  {:<kind_width$}  {:<4}  {:<6}  {}",
            report.input,
            report.token.kind().as_str(),
            yes_no(report.is_flag),
            yes_no(report.requires_value),
            detail(report),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_reports;

    fn sample() -> Vec<TokenReport> {
        build_reports(&["-xvf", "archive.tar", "--level=9", "---"])
    }

    #[test]
    fn test_format_json() {
        let json = format_reports(&sample(), OutputFormat::Json).unwrap();
        assert!(json.contains("\"kind\": \"short_multi_flag\""));
        assert!(json.contains("\"input\": \"archive.tar\""));
        assert!(json.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_format_yaml() {
        let yaml = format_reports(&sample(), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("kind: long_flag_with_equal"));
        assert!(yaml.contains("flag_name: level"));
    }

    #[test]
    fn test_format_markdown() {
        let md = format_reports(&sample(), OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("| Input | Kind |"));
        assert!(md.contains("| `-xvf` | short_multi_flag | yes | xvf | yes | flags=x,v,f |"));
        assert!(md.contains("| `---` | invalid_flag | no |  | no |  |"));
    }

    #[test]
    fn test_format_table() {
        let table = format_reports(&sample(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("INPUT"));
        assert!(lines[3].contains("long_flag_with_equal"));
        assert!(lines[3].ends_with("value=9"));
        assert!(lines[2].contains("positional_argument"));
    }

    #[test]
    fn test_format_table_empty() {
        let table = format_reports(&[], OutputFormat::Table).unwrap();
        assert_eq!(table.lines().count(), 1);
    }
}
