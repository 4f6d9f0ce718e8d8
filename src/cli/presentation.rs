//! CLI presentation: listings and locations as text (comfy-table + styled headings).

use crate::entity::NamedEntity;
use crate::namespace::{Location, Namespace};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Where the cursor is: `Root/Education/CPSC 210`, or `label:School` in a label view.
pub fn format_location(ns: &Namespace) -> String {
    match ns.cursor() {
        Location::LabelView(view) => format!("label:{}", view.folder().name()),
        Location::Folder(_) => {
            let root = ns.folder(ns.root()).map(|f| f.name()).unwrap_or_default();
            std::iter::once(root.to_string())
                .chain(ns.current_path())
                .collect::<Vec<_>>()
                .join("/")
        }
    }
}

/// Table of the current folder's subfolders and files.
pub fn format_listing(ns: &Namespace) -> String {
    let mut out = format!("{}\n", format_section_heading(&format_location(ns)));
    let folders = ns.subfolder_names();
    let files = ns.subfile_names();
    if folders.is_empty() && files.is_empty() {
        out.push_str("  (empty)");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Kind", "Name", "Path", "Labels"]);
    for name in folders {
        table.add_row(vec!["folder".to_string(), name, String::new(), String::new()]);
    }
    if let Ok(current) = ns.current_folder() {
        for id in current.subfiles().ids() {
            let Some(file) = ns.file(id) else {
                continue;
            };
            let labels = ns.labels_of_file(file.name()).unwrap_or_default();
            table.add_row(vec![
                "file".to_string(),
                file.name().to_string(),
                file.path().to_string(),
                labels.join(", "),
            ]);
        }
    }
    out.push_str(&table.to_string());
    out
}

/// Numbered list under a heading, or a placeholder when empty.
pub fn format_names(title: &str, names: &[String]) -> String {
    let mut lines = vec![format_section_heading(title)];
    if names.is_empty() {
        lines.push("  (none)".to_string());
    } else {
        lines.extend(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| format!("  {}. {}", i + 1, name)),
        );
    }
    lines.join("\n")
}
