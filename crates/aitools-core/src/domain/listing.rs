//! Pure parsing and reconciliation of runtime model listings.
//!
//! Nothing in here touches the filesystem or spawns processes; callers feed
//! raw command output and directory entry names in and get records out.

use std::collections::HashSet;

use super::model::{ModelPage, ModelRecord};

/// Header marker emitted as the first column of the listing table.
const HEADER_NAME: &str = "NAME";

/// Minimum number of whitespace separated fields for a data row.
const MIN_FIELDS: usize = 5;

/// Tag implied by the runtime when a model name carries none.
pub const LATEST_TAG: &str = ":latest";

/// Normalize a model name into the form used for job-log file names.
///
/// Colons are not portable in file names, so `llama2:7b` becomes `llama2-7b`.
/// Registry paths are flattened too (`hf.co/org/model:q4` → `hf.co-org-model-q4`)
/// so every log stays a direct child of the job-log directory.
#[must_use]
pub fn normalize_model_name(name: &str) -> String {
    name.replace([':', '/'], "-")
}

/// Parse the tabular output of the runtime's `list` command.
///
/// Rows look like `NAME ID SIZE MODIFIED`, where size and modified span
/// multiple whitespace separated fields:
///
/// ```text
/// NAME            ID              SIZE      MODIFIED
/// llama2:latest   78e26419b446    3.8 GB    2 days ago
/// ```
///
/// The header row and any row with fewer than five fields are skipped.
#[must_use]
pub fn parse_listing(raw: &str) -> Vec<ModelRecord> {
    raw.lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < MIN_FIELDS || parts[0] == HEADER_NAME {
                return None;
            }
            Some(ModelRecord::new(
                parts[0],
                format!("{} {}", parts[2], parts[3]),
                parts[4..].join(" "),
            ))
        })
        .collect()
}

/// Append placeholders for job-log entries not covered by the live listing.
///
/// An entry is covered when the normalized name of a live record equals the
/// entry itself, or equals the entry with the implicit `:latest` tag added.
/// Placeholders keep the directory order and follow all live records.
#[must_use]
pub fn merge_job_logs<I, S>(live: Vec<ModelRecord>, log_entries: I) -> Vec<ModelRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = live.iter().map(|m| normalize_model_name(&m.name)).collect();
    let mut merged = live;

    for entry in log_entries {
        let entry = entry.as_ref();
        if seen.contains(entry) {
            continue;
        }
        if seen.contains(&normalize_model_name(&format!("{entry}{LATEST_TAG}"))) {
            continue;
        }
        seen.insert(entry.to_string());
        merged.push(ModelRecord::placeholder(entry));
    }

    merged
}

/// Keep only records whose name contains `info` (case-sensitive).
///
/// An empty filter keeps everything.
#[must_use]
pub fn filter_by_name(records: Vec<ModelRecord>, info: &str) -> Vec<ModelRecord> {
    if info.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|m| m.name.contains(info))
        .collect()
}

/// Slice out one 1-based page. `total` is the length of `records`.
///
/// Page numbers below one are treated as the first page.
#[must_use]
pub fn paginate(records: Vec<ModelRecord>, page: usize, page_size: usize) -> ModelPage {
    let total = records.len();
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size);
    if start > total {
        return ModelPage {
            total,
            items: Vec::new(),
        };
    }
    let end = page.saturating_mul(page_size).min(total);

    ModelPage {
        total,
        items: records
            .into_iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "NAME                ID              SIZE      MODIFIED\n\
                           llama2:latest       78e26419b446    3.8 GB    2 days ago\n\
                           qwen2.5:7b          845dbda0ea48    4.7 GB    5 weeks ago\n";

    fn names(records: &[ModelRecord]) -> Vec<&str> {
        records.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn parses_rows_and_skips_header() {
        let models = parse_listing(LISTING);
        assert_eq!(
            models,
            vec![
                ModelRecord::new("llama2:latest", "3.8 GB", "2 days ago"),
                ModelRecord::new("qwen2.5:7b", "4.7 GB", "5 weeks ago"),
            ]
        );
    }

    #[test]
    fn short_and_empty_lines_are_ignored() {
        let raw = "\n   \nllama2 abc 3.8 GB\nNAME a b c d e\nphi3:mini 4f22 2.2 GB now\n";
        let models = parse_listing(raw);
        assert_eq!(names(&models), vec!["phi3:mini"]);
        assert_eq!(models[0].modified, "now");
    }

    #[test]
    fn empty_listing_parses_to_nothing() {
        assert!(parse_listing("").is_empty());
        assert!(parse_listing("NAME ID SIZE MODIFIED\n").is_empty());
    }

    #[test]
    fn normalizes_colons_and_slashes() {
        assert_eq!(normalize_model_name("llama2:7b"), "llama2-7b");
        assert_eq!(normalize_model_name("a:b:c"), "a-b-c");
        assert_eq!(normalize_model_name("plain"), "plain");
        assert_eq!(
            normalize_model_name("hf.co/bartowski/Qwen2.5-7B-GGUF:Q4_K_M"),
            "hf.co-bartowski-Qwen2.5-7B-GGUF-Q4_K_M"
        );
    }

    #[test]
    fn merge_appends_unknown_log_entries_as_placeholders() {
        let live = vec![ModelRecord::new("llama2", "3.8 GB", "2 days ago")];
        let merged = merge_job_logs(live, ["llama2", "mistral"]);
        assert_eq!(
            merged,
            vec![
                ModelRecord::new("llama2", "3.8 GB", "2 days ago"),
                ModelRecord::placeholder("mistral"),
            ]
        );
    }

    #[test]
    fn merge_treats_bare_name_as_latest_tag() {
        let live = parse_listing(LISTING);
        let merged = merge_job_logs(live, ["llama2", "llama2-latest", "qwen2.5-7b"]);
        assert_eq!(names(&merged), vec!["llama2:latest", "qwen2.5:7b"]);
    }

    #[test]
    fn merge_does_not_hide_other_tags() {
        let live = vec![ModelRecord::new("qwen2.5:7b", "4.7 GB", "now")];
        let merged = merge_job_logs(live, ["qwen2.5-14b"]);
        assert_eq!(names(&merged), vec!["qwen2.5:7b", "qwen2.5-14b"]);
        assert!(merged[1].is_placeholder());
    }

    #[test]
    fn merge_with_no_live_models_lists_every_entry_once() {
        let merged = merge_job_logs(Vec::new(), ["a", "b", "a"]);
        assert_eq!(names(&merged), vec!["a", "b"]);
    }

    #[test]
    fn filter_is_case_sensitive_substring() {
        let records = vec![
            ModelRecord::new("Llama3", "1 GB", "now"),
            ModelRecord::new("llama2", "1 GB", "now"),
            ModelRecord::placeholder("codellama"),
        ];
        let filtered = filter_by_name(records.clone(), "llama");
        assert_eq!(names(&filtered), vec!["llama2", "codellama"]);
        assert_eq!(filter_by_name(records, "").len(), 3);
    }

    fn numbered(count: usize) -> Vec<ModelRecord> {
        (0..count)
            .map(|i| ModelRecord::placeholder(format!("m{i}")))
            .collect()
    }

    #[test]
    fn paginate_returns_contiguous_slices() {
        let page = paginate(numbered(7), 2, 3);
        assert_eq!(page.total, 7);
        assert_eq!(names(&page.items), vec!["m3", "m4", "m5"]);

        let last = paginate(numbered(7), 3, 3);
        assert_eq!(names(&last.items), vec!["m6"]);
    }

    #[test]
    fn paginate_past_the_end_is_empty_but_keeps_total() {
        let page = paginate(numbered(4), 3, 3);
        assert_eq!(page.total, 4);
        assert!(page.items.is_empty());

        // start == total is an empty slice, not an error
        let page = paginate(numbered(4), 2, 4);
        assert!(page.items.is_empty());
    }

    #[test]
    fn paginate_treats_page_zero_as_first_page() {
        let page = paginate(numbered(3), 0, 2);
        assert_eq!(names(&page.items), vec!["m0", "m1"]);
    }

    #[test]
    fn paginate_with_zero_page_size_is_empty() {
        let page = paginate(numbered(3), 1, 0);
        assert_eq!(page.total, 3);
        assert!(page.items.is_empty());
    }
}
