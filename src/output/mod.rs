//! Terminal rendering
//!
//! Turns navigator views, catalog trees and search hits into colored lines.
//! Nothing here decides what is visible; callers pass already-filtered data
//! or an access level to filter with.

pub mod writer;

pub use writer::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};

use crate::access::{badges, is_visible, level_name};
use crate::catalog::CatalogNode;
use crate::navigator::{
    ACCESS_DENIED, FileContent, FileView, MenuKind, MenuView, Screen, View, result_count_text,
};
use crate::search::SearchIndexEntry;
use crate::tags::{Level, Theme};
use colored::{Color, Colorize};

/// Terminal color for a theme
#[must_use]
pub const fn theme_color(theme: Theme) -> Color {
    match theme {
        Theme::Red => Color::Red,
        Theme::Red2 => Color::BrightRed,
        Theme::Red3 => Color::TrueColor { r: 139, g: 0, b: 0 },
        Theme::Orange => Color::TrueColor { r: 255, g: 165, b: 0 },
        Theme::Yellow => Color::Yellow,
        Theme::Green => Color::Green,
        Theme::Cyan => Color::Cyan,
        Theme::Blue => Color::Blue,
        Theme::Purple => Color::Magenta,
        Theme::Pink => Color::BrightMagenta,
        Theme::White => Color::White,
    }
}

/// Full screen text for a view
#[must_use]
pub fn format_view(view: &View) -> String {
    let mut lines = Vec::new();
    if view.access.is_set() {
        lines.push(level_name(view.access).yellow().bold().to_string());
    }

    match &view.screen {
        Screen::Menu(menu) => {
            lines.push(menu_title(menu).color(theme_color(view.theme)).bold().to_string());
            lines.extend(format_menu(menu, view.theme));
        }
        Screen::File(file) => lines.extend(format_file_view(file, view.theme)),
    }

    lines.join("\n")
}

fn menu_title(menu: &MenuView) -> String {
    match menu.kind {
        MenuKind::SearchResults => "SEARCH".to_string(),
        _ => std::iter::once("db")
            .chain(menu.path.iter().map(String::as_str))
            .map(|segment| format!("{segment}/"))
            .collect(),
    }
}

/// The scroll window of a menu, one line per slot
#[must_use]
pub fn format_menu(menu: &MenuView, theme: Theme) -> Vec<String> {
    let color = theme_color(theme);
    let mut lines = Vec::new();

    if let Some(count) = menu.result_count {
        lines.push(result_count_text(count).dimmed().to_string());
    }
    if menu.kind == MenuKind::Empty {
        lines.push("No data".dimmed().to_string());
        return lines;
    }

    for slot in menu.window() {
        let Some(item) = slot.index.and_then(|index| menu.items.get(index)) else {
            lines.push(String::new());
            continue;
        };

        let text = match item.badges() {
            Some(marks) => format!("{} {}", item.label(), marks),
            None => item.label(),
        };
        let line = match slot.distance {
            0 => format!("▶ {text}").color(color).bold(),
            1 => format!("  {text}").color(color),
            _ => format!("  {text}").color(color).dimmed(),
        };
        lines.push(line.to_string());
    }

    lines
}

/// Header, content and any access denial for an open file
#[must_use]
pub fn format_file_view(file: &FileView, theme: Theme) -> Vec<String> {
    let color = theme_color(theme);
    let mut lines = vec![
        format!("{}{}", file.header, file.entry.name)
            .color(color)
            .bold()
            .to_string(),
    ];
    let location = file
        .location
        .as_ref()
        .map_or_else(|| "?".to_string(), |path| path.display().to_string());

    match &file.content {
        FileContent::Text(text) => lines.extend(text.lines().map(str::to_string)),
        FileContent::Markdown(text) => lines.extend(text.lines().map(markdown_line)),
        FileContent::Image { blurred } => {
            let note = if *blurred { " (blurred)" } else { "" };
            lines.push(format!("[image] {location}{note}").color(color).to_string());
        }
        FileContent::Audio => lines.push(format!("[audio] {location}").color(color).to_string()),
        FileContent::Denied => {}
        FileContent::LoadFailed(message) => {
            lines.push(format!("Failed to load file: {message}").red().to_string());
        }
    }

    if let Some(required) = file.required_text() {
        lines.push(ACCESS_DENIED.red().bold().to_string());
        lines.push(required.red().to_string());
    }

    lines
}

fn markdown_line(line: &str) -> String {
    let heading = line.trim_start_matches('#');
    if heading.len() < line.len() {
        heading.trim().bold().to_string()
    } else {
        line.to_string()
    }
}

/// Indented tree of everything visible at `access`
#[must_use]
pub fn format_tree(root: &CatalogNode, access: Level) -> String {
    let mut lines = vec![format!("{}/", root.name).bold().to_string()];
    tree_lines(root, access, 1, &mut lines);
    lines.join("\n")
}

fn tree_lines(node: &CatalogNode, access: Level, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);

    for folder in node.folders.iter().filter(|f| is_visible(f.hidden_level, access)) {
        let name = format!("{}/", folder.name);
        let colored = folder
            .theme
            .map_or_else(|| name.normal(), |theme| name.color(theme_color(theme)));
        match badges(folder.hidden_level, Level::NONE) {
            Some(marks) => lines.push(format!("{indent}{colored} {}", marks.dimmed())),
            None => lines.push(format!("{indent}{colored}")),
        }
        tree_lines(folder, access, depth + 1, lines);
    }

    for file in node.files.iter().filter(|f| is_visible(f.hidden_level, access)) {
        match badges(file.hidden_level, file.locked_level) {
            Some(marks) => lines.push(format!("{indent}{} {}", file.name, marks.dimmed())),
            None => lines.push(format!("{indent}{}", file.name)),
        }
    }
}

/// Search hits with their paths, followed by the result count
#[must_use]
pub fn format_search_results(results: &[&SearchIndexEntry]) -> Vec<String> {
    let mut lines: Vec<String> = results
        .iter()
        .map(|entry| match badges(entry.parsed.hidden_level, entry.parsed.locked_level) {
            Some(marks) => format!("  {} {}", entry.path, marks.dimmed()),
            None => format!("  {}", entry.path),
        })
        .collect();
    lines.push(result_count_text(results.len()));
    lines
}
