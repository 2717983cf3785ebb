use std::sync::LazyLock;

use regex::Regex;

static DOCTYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[ \t\r\n]*<!DOCTYPE").unwrap());
static HTML_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</html>").unwrap());

/// Whitespace stripped from line ends before classification: space, tab,
/// CR, LF only. Not Unicode whitespace.
const WS: &[char] = &[' ', '\t', '\r', '\n'];

/// Bracket heuristic, not JSON validation: the trimmed line must be
/// non-empty, open with `{` and close with `}`. `{}` qualifies, a lone
/// `{` does not, `{not json}` does. Downstream consumers depend on
/// exactly this rule.
pub fn is_json_line(line: &str) -> bool {
    let trimmed = line.trim_matches(WS);
    trimmed.starts_with('{') && trimmed.ends_with('}')
}

/// True when the trimmed line begins with `<!DOCTYPE`, case-insensitive.
pub fn starts_with_doctype(line: &str) -> bool {
    DOCTYPE_RE.is_match(line)
}

/// True when the raw line contains `</html>` anywhere, case-insensitive.
pub fn contains_html_end(line: &str) -> bool {
    HTML_END_RE.is_match(line)
}
