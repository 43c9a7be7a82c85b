//! Table formatting for CLI output. Format-only: no domain transforms here.

use aitools_core::{ModelPage, ModelRecord, PullStatus};

const NAME_WIDTH: usize = 40;

/// Truncates a string to a maximum length, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use aitools_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("llama2", 10), "llama2");
/// assert_eq!(truncate_string("qwen2.5-coder:32b", 10), "qwen2.5...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Short label for a pull status column.
pub const fn status_label(status: Option<PullStatus>) -> &'static str {
    match status {
        None => "",
        Some(PullStatus::Running) => "pulling",
        Some(PullStatus::Succeeded) => "pulled",
        Some(PullStatus::Failed) => "failed",
    }
}

/// One table row for a model.
pub fn format_row(model: &ModelRecord) -> String {
    format!(
        "{:<width$} {:<10} {:<16} {}",
        truncate_string(&model.name, NAME_WIDTH),
        model.size,
        model.modified,
        status_label(model.pull_status),
        width = NAME_WIDTH
    )
    .trim_end()
    .to_string()
}

/// Print a page of models as a table.
pub fn print_model_page(page: &ModelPage) {
    println!(
        "{:<width$} {:<10} {:<16} Pull",
        "Name",
        "Size",
        "Modified",
        width = NAME_WIDTH
    );
    print_separator(80);
    for model in &page.items {
        println!("{}", format_row(model));
    }
}
