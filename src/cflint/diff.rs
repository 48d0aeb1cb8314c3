use std::path::Path;

use similar::{ChangeTag, TextDiff};

/// Unchanged lines shown around each hunk.
const CONTEXT_RADIUS: usize = 3;

/// Unified diff between a file's content and its formatted rendition, with
/// git-style `a/<path>` and `b/<path>` headers.
///
/// Both texts are split into lines before comparison, so a trailing newline
/// or a CRLF/LF difference alone never produces a diff. An empty result
/// means the file is already formatted.
pub fn unified_diff(original: &str, formatted: &str, relative: &Path) -> Vec<String> {
    let old: Vec<&str> = original.lines().collect();
    let new: Vec<&str> = formatted.lines().collect();
    let diff = TextDiff::from_slices(&old, &new);

    let mut rendered = Vec::new();
    for hunk in diff.unified_diff().context_radius(CONTEXT_RADIUS).iter_hunks() {
        if rendered.is_empty() {
            rendered.push(format!("--- a/{}", relative.display()));
            rendered.push(format!("+++ b/{}", relative.display()));
        }
        rendered.push(hunk.header().to_string());
        for change in hunk.iter_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => '-',
                ChangeTag::Insert => '+',
                ChangeTag::Equal => ' ',
            };
            rendered.push(format!("{}{}", sign, change.value()));
        }
    }
    rendered
}
