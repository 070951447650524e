//! Report rendering for digests and retrieval results.
//!
//! Reports are bounded: a digest shows at most 3 decisions, 3 completions,
//! 2 in-progress items, and 2 outcomes; retrieval shows the top 3 matches
//! out of up to 5 fetched.

use recall_types::text::truncate_chars;
use recall_types::{SessionDigest, SessionRecord};

const DISPLAY_DECISIONS: usize = 3;
const DISPLAY_COMPLETIONS: usize = 3;
const DISPLAY_IN_PROGRESS: usize = 2;
const DISPLAY_OUTCOMES: usize = 2;
const DISPLAY_SESSIONS: usize = 3;

/// Characters of the initial request shown in the digest report.
const REQUEST_PREVIEW_CHARS: usize = 150;

/// Characters of session context shown per retrieval result.
const CONTEXT_PREVIEW_CHARS: usize = 80;

/// Render a digest as a compact markdown report.
///
/// Empty sections are omitted; the message-count line always prints.
pub fn render_digest(digest: &SessionDigest) -> String {
    let mut lines = Vec::new();

    lines.push("## Session Key Points".to_string());
    lines.push(String::new());

    lines.push(format!(
        "**Messages:** {} user / {} assistant",
        digest.user_messages, digest.assistant_messages
    ));
    lines.push(String::new());

    if !digest.first_user_message.is_empty() {
        lines.push("**Initial Request:**".to_string());
        lines.push(format!(
            "> {}...",
            truncate_chars(&digest.first_user_message, REQUEST_PREVIEW_CHARS)
        ));
        lines.push(String::new());
    }

    push_section(&mut lines, "**Key Decisions:**", &digest.decisions, DISPLAY_DECISIONS);
    push_section(&mut lines, "**Completed:**", &digest.completions, DISPLAY_COMPLETIONS);
    push_section(
        &mut lines,
        "**In Progress / Next:**",
        &digest.in_progress,
        DISPLAY_IN_PROGRESS,
    );
    push_section(&mut lines, "**Outcomes:**", &digest.outcomes, DISPLAY_OUTCOMES);

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, heading: &str, items: &[String], limit: usize) {
    if items.is_empty() {
        return;
    }
    lines.push(heading.to_string());
    for item in items.iter().take(limit) {
        lines.push(format!("- {item}"));
    }
    lines.push(String::new());
}

/// Render retrieval results as a numbered report, or a retry hint when
/// nothing matched.
///
/// Relevance prints as an absolute value with two decimals: the full-text
/// view's native scores are negative-is-better.
pub fn render_sessions(results: &[SessionRecord], topic: &str, days: Option<i64>) -> String {
    let mut lines = Vec::new();

    let time_range = days.map(|d| format!(" (last {d} days)")).unwrap_or_default();
    lines.push(format!("RELATED SESSIONS: {topic}{time_range}"));
    lines.push(String::new());

    if results.is_empty() {
        lines.push("No matching sessions found.".to_string());
        lines.push(String::new());
        lines.push("Try:".to_string());
        lines.push("  - Different keywords".to_string());
        lines.push("  - A longer time range (--days 30)".to_string());
        return lines.join("\n");
    }

    for (i, record) in results.iter().take(DISPLAY_SESSIONS).enumerate() {
        let date = if record.archived_at.is_empty() {
            "unknown".to_string()
        } else {
            truncate_chars(&record.archived_at, 10)
        };

        lines.push(format!("{}. {}", i + 1, record.archive_name));
        lines.push(format!(
            "   Date: {} | Messages: {} | Relevance: {:.2}",
            date,
            record.user_messages,
            record.relevance.abs()
        ));
        let context = truncate_chars(&record.context, CONTEXT_PREVIEW_CHARS);
        if !context.is_empty() {
            lines.push(format!("   {context}..."));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
