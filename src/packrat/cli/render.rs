//! # Rendering Module
//!
//! Turns `CmdResult` parts into terminal text. Every function returns a
//! `String`; the session decides where it goes. Layout math (column widths,
//! truncation) is Unicode-aware so accented names keep the table aligned.

use colored::Colorize;
use console::Term;
use packrat::api::{CmdMessage, Found, MessageLevel, Metrics};
use packrat::commands::{CmdResult, Counters};
use packrat::error::PackratError;
use packrat::model::{Record, RecordShape, CATEGORY_MAX_CHARS, NAME_MAX_CHARS};
use packrat::profile::{Profile, ProfileKind};
use packrat::store::Capacity;
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const INDEX_WIDTH: usize = 3;
const NUMBER_WIDTH: usize = 8;

/// Colors are used only when asked for and stdout is a terminal.
pub fn configure_color(enabled: bool) {
    colored::control::set_override(enabled && Term::stdout().is_term());
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

/// Recoverable store errors read as warnings, the rest as errors.
pub fn render_error(err: &PackratError) -> String {
    let message = match err {
        PackratError::Full { .. }
        | PackratError::Unsorted
        | PackratError::InvalidRecord(_)
        | PackratError::Unsupported(_) => CmdMessage::warning(err.to_string()),
        PackratError::NotFound { comparisons, .. } => CmdMessage::warning(format!(
            "{} (comparisons: {})",
            err, comparisons
        )),
        _ => CmdMessage::error(format!("Error: {}", err)),
    };
    render_messages(&[message])
}

pub fn render_metrics(metrics: &Metrics) -> String {
    format!(
        "{} {} | {} {}\n",
        "Comparisons:".dimmed(),
        metrics.comparisons,
        "Time:".dimmed(),
        format_elapsed(metrics.elapsed)
    )
}

pub fn render_found(shape: RecordShape, found: &Found) -> String {
    let record = &found.record;
    let mut output = format!("Name: {}\nType: {}\n", record.name, record.category);
    if shape.has_quantity() {
        output.push_str(&format!("Quantity: {}\n", record.quantity));
    }
    if shape.has_priority() {
        output.push_str(&format!("Priority: {}\n", priority_cell(record)));
    }
    output
}

pub fn render_counters(counters: &Counters) -> String {
    format!(
        "Comparisons (array, linear): {}\nComparisons (array, binary): {}\nComparisons (list, linear): {}\n",
        counters.array_linear, counters.array_binary, counters.list_linear
    )
}

/// Messages, then the located record, cost and counters when present.
pub fn render_result(shape: RecordShape, result: &CmdResult) -> String {
    let mut output = render_messages(&result.messages);
    if let Some(found) = &result.found {
        output.push_str(&render_found(shape, found));
    }
    if let Some(metrics) = &result.metrics {
        output.push_str(&render_metrics(metrics));
    }
    if let Some(counters) = &result.counters {
        output.push_str(&render_counters(counters));
    }
    output
}

/// Numbered table of records under a heading.
pub fn render_table(heading: &str, shape: RecordShape, records: &[Record]) -> String {
    let mut output = format!("\n---- {} ({}) ----\n", heading, count_label(records.len()));
    if records.is_empty() {
        return output;
    }

    let columns = columns(shape);
    let header: Vec<String> = columns
        .iter()
        .map(|(title, width)| pad_to_width(title, *width))
        .collect();
    output.push_str(&format!("{}\n", header.join(" | ").bold()));
    let rule: Vec<String> = columns.iter().map(|(_, width)| "-".repeat(*width)).collect();
    output.push_str(&format!("{}\n", rule.join("-+-")));

    for (i, record) in records.iter().enumerate() {
        let mut cells = vec![
            (format!("{}", i + 1), INDEX_WIDTH),
            (record.name.clone(), NAME_MAX_CHARS),
            (record.category.clone(), CATEGORY_MAX_CHARS),
        ];
        if shape.has_quantity() {
            cells.push((record.quantity.to_string(), NUMBER_WIDTH));
        }
        if shape.has_priority() {
            cells.push((priority_cell(record), NUMBER_WIDTH));
        }
        let line: Vec<String> = cells
            .iter()
            .map(|(text, width)| pad_to_width(&truncate_to_width(text, *width), *width))
            .collect();
        output.push_str(line.join(" | ").trim_end());
        output.push('\n');
    }
    output
}

/// One line per profile for the `profiles` command.
pub fn render_profiles() -> String {
    let mut output = String::new();
    for kind in ProfileKind::ALL {
        let profile = Profile::for_kind(kind);
        output.push_str(&format!(
            "{} {}\n",
            pad_to_width(kind.as_str(), 11).bold(),
            profile.title
        ));
        output.push_str(&format!("    {}\n", describe(&profile).dimmed()));
    }
    output
}

fn describe(profile: &Profile) -> String {
    let records = match profile.shape {
        RecordShape::Item => "items",
        RecordShape::PrioritizedItem => "items with priority",
        RecordShape::Component => "components",
    };
    let storage = match profile.capacity {
        Capacity::Fixed(n) => format!("fixed array of {}", n),
        Capacity::Growable { initial } => format!("growable array from {}", initial),
    };
    let mut parts = vec![records.to_string(), storage];
    if profile.linked_list {
        parts.push("linked list".to_string());
    }
    for option in &profile.sort_options {
        parts.push(format!("{} sort by {}", option.algorithm, option.key));
    }
    if profile.binary_search {
        parts.push("binary search".to_string());
    }
    if profile.key_check {
        parts.push("key check".to_string());
    }
    if profile.counters {
        parts.push("counters".to_string());
    }
    parts.join(", ")
}

fn columns(shape: RecordShape) -> Vec<(&'static str, usize)> {
    let mut columns = vec![
        ("No", INDEX_WIDTH),
        ("Name", NAME_MAX_CHARS),
        ("Type", CATEGORY_MAX_CHARS),
    ];
    if shape.has_quantity() {
        columns.push(("Quantity", NUMBER_WIDTH));
    }
    if shape.has_priority() {
        columns.push(("Priority", NUMBER_WIDTH));
    }
    columns
}

fn priority_cell(record: &Record) -> String {
    record
        .priority
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn count_label(n: usize) -> String {
    if n == 1 {
        "1 record".to_string()
    } else {
        format!("{} records", n)
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3} ms", elapsed.as_secs_f64() * 1000.0)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
