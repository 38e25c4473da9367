use once_cell::sync::Lazy;
use regex::Regex;

/// Work-experience heading synonyms, highest priority first.
const SECTION_HEADINGS: &[&str] = &[
    "kinh nghiệm làm việc",
    "work experience",
    "professional experience",
    "employment history",
    "quá trình làm việc",
    "công việc",
    "employment",
];

static HEADING_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    SECTION_HEADINGS
        .iter()
        .map(|h| Regex::new(&format!("(?i){}", regex::escape(h))).expect("heading regex"))
        .collect()
});

/// A capitalized line ending in a colon, e.g. `Education:` or `Học vấn:`.
static COLON_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Lu}[^:]*:\s*$").expect("colon heading regex"));

/// Returns the likely work-experience section, or the whole text when no heading matches.
///
/// The section starts at the heading and keeps the rest of the heading line plus
/// the first block of lines after it. It stops at a blank line that follows
/// content, or at the next capitalized heading ending in a colon.
pub fn locate_section(text: &str) -> &str {
    let Some(start) = HEADING_RES
        .iter()
        .find_map(|re| re.find(text).map(|m| m.start()))
    else {
        return text;
    };

    let rest = &text[start..];
    let mut end = rest.find('\n').unwrap_or(rest.len());
    let mut seen_content = false;

    while end < rest.len() {
        // `end` points at a newline; inspect the line after it.
        let line_start = end + 1;
        let line_end = rest[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(rest.len());
        let line = rest[line_start..line_end].trim();

        if line.is_empty() {
            if seen_content {
                break;
            }
        } else if COLON_HEADING_RE.is_match(line) {
            break;
        } else {
            seen_content = true;
        }
        end = line_end;
    }

    &rest[..end]
}
