//! Pure string transforms applied to scraped field values.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));
static CONTROL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").expect("control pattern"));

/// Typographic characters folded to ASCII equivalents.
const SPECIAL_CHARACTERS: &[(char, &str)] = &[
    ('\u{2018}', "'"),   // left single quote
    ('\u{2019}', "'"),   // right single quote
    ('\u{201C}', "\""),  // left double quote
    ('\u{201D}', "\""),  // right double quote
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{2026}', "..."), // ellipsis
    ('\u{00A0}', " "),   // non-breaking space
];

#[derive(Clone, Copy)]
enum DateLayout {
    DateOnly,
    DateTime,
}

/// Accepted date layouts, tried in order; the first successful parse wins.
/// Day-first layouts come before month-first ones, so an ambiguous value
/// like `03-04-2024` resolves as the 3rd of April.
const DATE_FORMATS: &[(&str, DateLayout)] = &[
    ("%Y-%m-%d", DateLayout::DateOnly),
    ("%Y/%m/%d", DateLayout::DateOnly),
    ("%d-%m-%Y", DateLayout::DateOnly),
    ("%d/%m/%Y", DateLayout::DateOnly),
    ("%m-%d-%Y", DateLayout::DateOnly),
    ("%m/%d/%Y", DateLayout::DateOnly),
    ("%B %d, %Y", DateLayout::DateOnly),
    ("%b %d, %Y", DateLayout::DateOnly),
    ("%d %B %Y", DateLayout::DateOnly),
    ("%d %b %Y", DateLayout::DateOnly),
    ("%Y-%m-%dT%H:%M:%S", DateLayout::DateTime),
    ("%Y-%m-%d %H:%M:%S", DateLayout::DateTime),
];

/// String transforms for scraped field values. Every operation maps empty
/// input to `""` and never fails; unusable values degrade to best effort.
pub struct TextNormalizer;

impl TextNormalizer {
    /// Decode HTML entities, strip tag-like sequences, and collapse
    /// whitespace runs to single spaces.
    pub fn clean_text(text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let decoded = html_escape::decode_html_entities(text);
        let without_tags = TAG_RE.replace_all(&decoded, "");
        let collapsed = WHITESPACE_RE.replace_all(&without_tags, " ");
        collapsed.trim().to_string()
    }

    /// Strip ASCII control characters. Strings are valid UTF-8 by the time
    /// they reach the pipeline; undecodable input bytes are replaced at load.
    pub fn normalize_encoding(text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        CONTROL_RE.replace_all(text, "").into_owned()
    }

    /// Fold typographic punctuation into its ASCII equivalent.
    pub fn handle_special_characters(text: &str) -> String {
        let mut out = text.to_string();
        for (from, to) in SPECIAL_CHARACTERS {
            if out.contains(*from) {
                out = out.replace(*from, to);
            }
        }
        out
    }

    /// Parse a date in any accepted layout and re-render it as `YYYY-MM-DD`.
    /// Unparseable values degrade to `""`; the gap surfaces later as a
    /// validation warning instead of a cleaning failure.
    pub fn standardize_date(date: &str) -> String {
        let trimmed = date.trim();
        if trimmed.is_empty() {
            return String::new();
        }
        for (format, layout) in DATE_FORMATS {
            let parsed = match layout {
                DateLayout::DateOnly => NaiveDate::parse_from_str(trimmed, format).ok(),
                DateLayout::DateTime => NaiveDateTime::parse_from_str(trimmed, format)
                    .ok()
                    .map(|dt| dt.date()),
            };
            if let Some(date) = parsed {
                return date.format("%Y-%m-%d").to_string();
            }
        }
        String::new()
    }

    /// Trim a URL and delete any interior whitespace. Encoded spaces that
    /// were unencoded by an upstream scraper get mangled here; consumers
    /// rely on this exact normalization.
    pub fn clean_url(url: &str) -> String {
        WHITESPACE_RE.replace_all(url.trim(), "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_tags_and_entities() {
        assert_eq!(
            TextNormalizer::clean_text("<p>Hello &amp; welcome</p>"),
            "Hello & welcome"
        );
        // Entities decode first, so an escaped tag is stripped like a real one
        assert_eq!(
            TextNormalizer::clean_text("<p>This has &lt;HTML&gt; entities &amp; tags</p>"),
            "This has entities & tags"
        );
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(
            TextNormalizer::clean_text("  Test Article   with \t Extra  \n  Spaces  "),
            "Test Article with Extra Spaces"
        );
        assert_eq!(TextNormalizer::clean_text(""), "");
    }

    #[test]
    fn test_clean_text_is_idempotent() {
        for input in [
            "  plain   text  ",
            "<div>nested <b>tags</b></div>",
            "a &lt; b &amp;&amp; c",
            "",
        ] {
            let once = TextNormalizer::clean_text(input);
            assert_eq!(TextNormalizer::clean_text(&once), once);
        }
    }

    #[test]
    fn test_normalize_encoding_strips_control_characters() {
        assert_eq!(
            TextNormalizer::normalize_encoding("ab\u{0000}cd\u{001F}ef\u{007F}"),
            "abcdef"
        );
        // Tab and newline survive; they are whitespace, not junk
        assert_eq!(TextNormalizer::normalize_encoding("a\tb\nc"), "a\tb\nc");
    }

    #[test]
    fn test_handle_special_characters() {
        assert_eq!(
            TextNormalizer::handle_special_characters("John\u{2019}s \u{201C}quote\u{201D}"),
            "John's \"quote\""
        );
        assert_eq!(
            TextNormalizer::handle_special_characters("a\u{2013}b\u{2014}c\u{2026}\u{00A0}d"),
            "a-b-c... d"
        );
    }

    #[test]
    fn test_standardize_date_accepts_every_layout() {
        let cases = [
            ("2024-01-15", "2024-01-15"),
            ("2024/01/15", "2024-01-15"),
            ("15-01-2024", "2024-01-15"),
            ("15/01/2024", "2024-01-15"),
            ("01-15-2024", "2024-01-15"),
            ("01/15/2024", "2024-01-15"),
            ("January 15, 2024", "2024-01-15"),
            ("Jan 15, 2024", "2024-01-15"),
            ("15 January 2024", "2024-01-15"),
            ("15 Jan 2024", "2024-01-15"),
            ("2024-01-15T10:30:00", "2024-01-15"),
            ("2024-01-15 10:30:00", "2024-01-15"),
        ];
        for (input, expected) in cases {
            assert_eq!(TextNormalizer::standardize_date(input), expected, "{input}");
        }
    }

    #[test]
    fn test_standardize_date_day_first_wins_ambiguity() {
        // Both day and month fit in 01..=12, so the day-first layout decides
        assert_eq!(TextNormalizer::standardize_date("03-04-2024"), "2024-04-03");
        assert_eq!(TextNormalizer::standardize_date("03/04/2024"), "2024-04-03");
    }

    #[test]
    fn test_standardize_date_rejects_garbage() {
        assert_eq!(TextNormalizer::standardize_date("not a date"), "");
        assert_eq!(TextNormalizer::standardize_date("2024-13-40"), "");
        assert_eq!(TextNormalizer::standardize_date(""), "");
        assert_eq!(TextNormalizer::standardize_date("   "), "");
    }

    #[test]
    fn test_standardize_date_is_a_fixed_point_on_its_output() {
        assert_eq!(TextNormalizer::standardize_date("2024-01-15"), "2024-01-15");
    }

    #[test]
    fn test_clean_url_removes_all_whitespace() {
        assert_eq!(
            TextNormalizer::clean_url("  https://example.com/article  "),
            "https://example.com/article"
        );
        assert_eq!(
            TextNormalizer::clean_url("https://example.com/a b\tc"),
            "https://example.com/abc"
        );
        assert_eq!(TextNormalizer::clean_url(""), "");
    }
}
