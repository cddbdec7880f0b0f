//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one value per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use panelkit_core::{DetailRow, NetworkDetailPage, SettingsPage};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Confirmation line on stderr after a successful action.
pub fn print_done(global: &GlobalOpts, message: &str) {
    if global.quiet {
        return;
    }
    if should_color(&global.color_mode()) {
        eprintln!("{} {message}", "✓".green().bold());
    } else {
        eprintln!("{message}");
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses `detail_fn`, which returns a pre-formatted block.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => id_fn(data),
    }
}

/// Render a settings page: one table per non-empty section.
pub fn render_page(format: &OutputFormat, page: &SettingsPage) -> String {
    render_single(
        format,
        page,
        |p| sections_table(&p.title, &p.sections),
        |p| plain_rows(&p.sections),
    )
}

/// Render a network detail page in the same shape as a settings page.
pub fn render_network_detail(format: &OutputFormat, page: &NetworkDetailPage) -> String {
    render_single(
        format,
        page,
        |p| sections_table(&p.title, &p.network_detail),
        |p| plain_rows(&p.network_detail),
    )
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Page tables ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct PageRow {
    #[tabled(rename = "Setting")]
    title: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn sections_table(title: &str, sections: &[Vec<DetailRow>]) -> String {
    let tables = sections
        .iter()
        .filter(|s| !s.is_empty())
        .map(|section| {
            let rows: Vec<PageRow> = section
                .iter()
                .map(|r| PageRow {
                    title: r.title.clone(),
                    value: r.display_value(),
                })
                .collect();
            render_table(&rows)
        });
    std::iter::once(title.to_owned())
        .chain(tables)
        .collect::<Vec<_>>()
        .join("\n")
}

fn plain_rows(sections: &[Vec<DetailRow>]) -> String {
    sections
        .iter()
        .flatten()
        .map(|r| format!("{}\t{}", r.title, r.display_value()))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Format-specific renderers ────────────────────────────────────────

pub fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

// Serializing plain derive types only fails on non-string map keys, which
// none of the rendered types have.
fn render_json<T: Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.unwrap_or_else(|e| format!("{{\"error\":\"serialization failed: {e}\"}}"))
}

fn render_yaml<T: Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).unwrap_or_else(|e| format!("error: serialization failed: {e}"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn page() -> SettingsPage {
        SettingsPage {
            title: "Display".into(),
            sections: vec![
                vec![DetailRow::new("Brightness", "64%")],
                vec![],
                vec![DetailRow::new("Night Light", serde_json::Value::Null)],
            ],
        }
    }

    #[test]
    fn plain_page_is_tab_separated() {
        let out = render_page(&OutputFormat::Plain, &page());
        assert_eq!(out, "Brightness\t64%\nNight Light\t-");
    }

    #[test]
    fn table_page_skips_empty_sections() {
        let out = render_page(&OutputFormat::Table, &page());
        assert!(out.starts_with("Display\n"));
        assert_eq!(out.matches("Setting").count(), 2);
        assert!(out.contains("64%"));
    }

    #[test]
    fn compact_json_keeps_page_shape() {
        let out = render_page(&OutputFormat::JsonCompact, &page());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap_or_default();
        assert_eq!(value["sections"][0][0], json!({ "title": "Brightness", "value": "64%" }));
    }

    #[test]
    fn plain_list_uses_id_fn() {
        #[derive(Serialize)]
        struct Item(&'static str);
        #[derive(Tabled)]
        struct Row {
            name: String,
        }
        let out = render_list(
            &OutputFormat::Plain,
            &[Item("a"), Item("b")],
            |i| Row { name: i.0.into() },
            |i| i.0.to_owned(),
        );
        assert_eq!(out, "a\nb");
    }
}
