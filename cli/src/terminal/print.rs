use colored::*;
use kubenet_common::field::FieldError;
use tracing::info;

use super::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str, quiet: bool) {
    if quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

/// Prints `key....: value` lines with the colons lined up.
pub fn aligned_lines(lines: &[(&str, String)]) {
    let key_width: usize = lines.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    for (key, value) in lines {
        let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
        print(&format!(
            "{}{}{} {}",
            key.cyan(),
            dots.bright_black(),
            ":".bright_black(),
            value
        ));
    }
}

pub fn field_error(idx: usize, err: &FieldError) {
    let idx_str: String = format!("[{}]", idx.to_string().yellow());
    print(&format!("{} {}", idx_str.bright_black(), err.path.to_string().cyan()));

    let mut details: Vec<(&str, String)> = vec![("kind", err.kind.to_string())];
    if let Some(value) = &err.value {
        details.push(("value", format!("{value:?}")));
    }
    if !err.detail.is_empty() {
        details.push(("detail", err.detail.clone()));
    }

    for (i, (key, value)) in details.iter().enumerate() {
        let branch: ColoredString = if i + 1 != details.len() {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        print(&format!(
            " {} {}{}{} {}",
            branch,
            key,
            ".".repeat(7 - key.len()).bright_black(),
            ":".bright_black(),
            value
        ));
    }
}
