use crate::classify::{contains_html_end, is_json_line, starts_with_doctype};

/// One completed record recovered from the dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    /// A single-line JSON record, kept untrimmed.
    Json(String),
    /// One assembled HTML document: its DOCTYPE line through the line
    /// carrying `</html>`, or whatever was buffered when a flush was
    /// forced.
    Html(String),
}

/// Single-pass accumulator over dump lines. Lines go in one at a time;
/// completed units come out through the caller's vec.
#[derive(Debug, Default)]
pub struct Splitter {
    current_html: String,
}

impl Splitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line; completed units are appended to `out` in
    /// encounter order. A JSON line can complete two at once: the
    /// partial HTML buffer it cuts off, then the JSON record itself.
    pub fn push_line(&mut self, line: &str, out: &mut Vec<Unit>) {
        if is_json_line(line) {
            self.flush(out);
            out.push(Unit::Json(line.to_string()));
            return;
        }

        // A DOCTYPE line closes the previous document and becomes the
        // first line of the next one.
        if starts_with_doctype(line) {
            self.flush(out);
        }

        if !self.current_html.is_empty() {
            self.current_html.push('\n');
        }
        self.current_html.push_str(line);

        if contains_html_end(line) {
            self.flush(out);
        }
    }

    /// End of input: a non-empty buffer becomes a final, possibly
    /// unterminated unit.
    pub fn finish(mut self, out: &mut Vec<Unit>) {
        self.flush(out);
    }

    fn flush(&mut self, out: &mut Vec<Unit>) {
        if !self.current_html.is_empty() {
            out.push(Unit::Html(std::mem::take(&mut self.current_html)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_all(lines: &[&str]) -> Vec<Unit> {
        let mut splitter = Splitter::new();
        let mut out = Vec::new();
        for line in lines {
            splitter.push_line(line, &mut out);
        }
        splitter.finish(&mut out);
        out
    }

    fn json(s: &str) -> Unit {
        Unit::Json(s.to_string())
    }

    fn html(s: &str) -> Unit {
        Unit::Html(s.to_string())
    }

    #[test]
    fn single_json_line() {
        assert_eq!(split_all(&[r#"{"a":1}"#]), vec![json(r#"{"a":1}"#)]);
    }

    #[test]
    fn json_keeps_original_whitespace() {
        assert_eq!(split_all(&["  {\"a\":1}\t"]), vec![json("  {\"a\":1}\t")]);
    }

    #[test]
    fn complete_document() {
        let units = split_all(&["<!DOCTYPE html>", "<html>", "</html>"]);
        assert_eq!(units, vec![html("<!DOCTYPE html>\n<html>\n</html>")]);
    }

    #[test]
    fn html_end_line_is_inclusive() {
        let units = split_all(&["<html>", "<p>x</p></html> trailing"]);
        assert_eq!(units, vec![html("<html>\n<p>x</p></html> trailing")]);
    }

    #[test]
    fn doctype_starts_new_unit_and_belongs_to_it() {
        let units = split_all(&["<html>", "<body>", "<!DOCTYPE html>", "<html></html>"]);
        assert_eq!(
            units,
            vec![html("<html>\n<body>"), html("<!DOCTYPE html>\n<html></html>")]
        );
    }

    #[test]
    fn json_flushes_partial_html_first() {
        let units = split_all(&["<!DOCTYPE html>", "<html>", r#"{"cut":true}"#, "<body></body>", "</html>"]);
        assert_eq!(
            units,
            vec![
                html("<!DOCTYPE html>\n<html>"),
                json(r#"{"cut":true}"#),
                html("<body></body>\n</html>"),
            ]
        );
    }

    #[test]
    fn trailing_unterminated_unit_is_flushed() {
        let units = split_all(&["<!DOCTYPE html>", "<html>", "<body>"]);
        assert_eq!(units, vec![html("<!DOCTYPE html>\n<html>\n<body>")]);
    }

    #[test]
    fn blank_input_produces_nothing() {
        assert_eq!(split_all(&[]), vec![]);
        // Empty lines append nothing to an empty buffer, so there is
        // never a unit to flush.
        assert_eq!(split_all(&["", "", ""]), vec![]);
    }

    #[test]
    fn blank_line_inside_document_is_kept() {
        let units = split_all(&["<html>", "", "</html>"]);
        assert_eq!(units, vec![html("<html>\n\n</html>")]);
    }

    #[test]
    fn lone_open_brace_is_html_content() {
        assert_eq!(split_all(&["{"]), vec![html("{")]);
    }

    #[test]
    fn back_to_back_json_lines() {
        let units = split_all(&[r#"{"a":1}"#, r#"{"b":2}"#]);
        assert_eq!(units, vec![json(r#"{"a":1}"#), json(r#"{"b":2}"#)]);
    }

    #[test]
    fn encounter_order_is_preserved() {
        let units = split_all(&[
            "<!DOCTYPE html>",
            "one</html>",
            r#"{"mid":true}"#,
            "<!DOCTYPE html>",
            "two</html>",
        ]);
        assert_eq!(
            units,
            vec![
                html("<!DOCTYPE html>\none</html>"),
                json(r#"{"mid":true}"#),
                html("<!DOCTYPE html>\ntwo</html>"),
            ]
        );
    }
}
