// crates/line_transformer/src/scanner.rs

use once_cell::sync::Lazy;
use regex::Regex;
use student_markers::{CommentStyle, DONOT_BEGIN, DONOT_END, DONOT_SEE};

use crate::{Mode, TransformError, Transformed};

static SLASHES_REPLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.*)\s*//!STUDENT_WILL_SEE_AS\s*\((.*)\)").expect("valid will-see-as pattern")
});

static HASH_REPLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(.*)\s*#\s*!STUDENT_WILL_SEE_AS\s*\((.*)\)").expect("valid will-see-as pattern")
});

/// What a single line asks for, before the scan state is taken into account.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    BlockBegin,
    BlockEnd,
    SingleHide,
    Replace { original: &'a str, replacement: &'a str },
    Plain,
}

/// Classifies a line. Block markers win over everything else, then the
/// single-line marker, then the will-see-as pattern.
pub(crate) fn classify(line: &str, style: CommentStyle) -> LineKind<'_> {
    if line.contains(DONOT_BEGIN) {
        return LineKind::BlockBegin;
    }
    if line.contains(DONOT_END) {
        return LineKind::BlockEnd;
    }
    if line.contains(DONOT_SEE) {
        return LineKind::SingleHide;
    }

    let pattern = match style {
        CommentStyle::Slashes => &SLASHES_REPLACE,
        CommentStyle::Hash => &HASH_REPLACE,
    };
    if let Some(caps) = pattern.captures(line) {
        let original = caps.get(1).map_or("", |m| m.as_str()).trim();
        let replacement = caps.get(2).map_or("", |m| m.as_str()).trim();
        return LineKind::Replace { original, replacement };
    }

    LineKind::Plain
}

/// Leading spaces and tabs of a line.
fn indentation(line: &str) -> &str {
    let rest = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - rest.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    Normal,
    InBlock { opened_at: usize },
}

/// Single forward pass over a file's lines.
pub(crate) struct Scanner {
    mode: Mode,
    style: CommentStyle,
    state: ScanState,
    pending_single_hide: bool,
    last_indentation: String,
    output: Vec<String>,
    affected: usize,
}

impl Scanner {
    pub(crate) fn new(mode: Mode, style: CommentStyle) -> Self {
        Self {
            mode,
            style,
            state: ScanState::Normal,
            pending_single_hide: false,
            last_indentation: String::new(),
            output: Vec::new(),
            affected: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> ScanState {
        self.state
    }

    /// Consumes the 1-based line `line_no`.
    pub(crate) fn feed(&mut self, line_no: usize, line: &str) -> Result<(), TransformError> {
        match (self.state, classify(line, self.style)) {
            (ScanState::InBlock { .. }, LineKind::BlockBegin) => {
                return Err(TransformError::NestedBlock { line: line_no });
            }
            (ScanState::Normal, LineKind::BlockBegin) => {
                self.flush_pending();
                self.state = ScanState::InBlock { opened_at: line_no };
                self.hide(line);
            }
            (ScanState::Normal, LineKind::BlockEnd) => {
                return Err(TransformError::UnmatchedEnd { line: line_no });
            }
            (ScanState::InBlock { .. }, LineKind::BlockEnd) => {
                self.state = ScanState::Normal;
                self.hide(line);
                self.emit_placeholder();
            }
            (ScanState::InBlock { .. }, _) => self.hide(line),
            (ScanState::Normal, LineKind::SingleHide) => {
                self.hide(line);
                self.pending_single_hide = true;
            }
            (ScanState::Normal, LineKind::Replace { original, replacement }) => {
                self.flush_pending();
                self.affected += 1;
                self.last_indentation = indentation(line).to_string();
                let replaced = self.replacement_line(original, replacement);
                self.output.push(replaced);
            }
            (ScanState::Normal, LineKind::Plain) => {
                self.flush_pending();
                self.output.push(line.to_string());
            }
        }
        Ok(())
    }

    /// Ends the pass. A block still open at this point is an error.
    pub(crate) fn finish(mut self) -> Result<Transformed, TransformError> {
        if let ScanState::InBlock { opened_at } = self.state {
            return Err(TransformError::UnterminatedBlock { opened_at });
        }
        self.flush_pending();
        Ok(Transformed {
            lines: self.output,
            affected: self.affected,
        })
    }

    fn hide(&mut self, line: &str) {
        self.affected += 1;
        self.last_indentation = indentation(line).to_string();
        if self.mode == Mode::Comment {
            let commented = self.commented(line);
            self.output.push(commented);
        }
    }

    fn flush_pending(&mut self) {
        if self.pending_single_hide {
            self.emit_placeholder();
            self.pending_single_hide = false;
        }
    }

    fn emit_placeholder(&mut self) {
        let placeholder = format!("{}{}\n", self.last_indentation, self.style.placeholder());
        self.output.push(placeholder);
    }

    fn commented(&self, line: &str) -> String {
        let mut out = format!("{} {}", self.style.line_comment(), line);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }

    fn replacement_line(&self, original: &str, replacement: &str) -> String {
        let annotation = self.style.replace_annotation();
        if self.mode == Mode::Comment {
            format!("{} {} {}\n", replacement, annotation, self.style.should_write(original))
        } else {
            format!("{} {}\n", replacement, annotation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_markers_take_precedence() {
        let line = "x //!STUDENT_WILL_SEE_AS (y) !STUDENT_DONOT_SEE !STUDENT_DONOT_BEGIN";
        assert_eq!(classify(line, CommentStyle::Slashes), LineKind::BlockBegin);
        let line = "x //!STUDENT_WILL_SEE_AS (y) !STUDENT_DONOT_END";
        assert_eq!(classify(line, CommentStyle::Slashes), LineKind::BlockEnd);
    }

    #[test]
    fn single_hide_beats_replace() {
        let line = "x //!STUDENT_WILL_SEE_AS (y) // !STUDENT_DONOT_SEE";
        assert_eq!(classify(line, CommentStyle::Slashes), LineKind::SingleHide);
    }

    #[test]
    fn replace_captures_are_trimmed() {
        let line = "\tventry\tel1_irq\t  //!STUDENT_WILL_SEE_AS (ventry\tirq_invalid_el1h)\n";
        assert_eq!(
            classify(line, CommentStyle::Slashes),
            LineKind::Replace {
                original: "ventry\tel1_irq",
                replacement: "ventry\tirq_invalid_el1h",
            }
        );
    }

    #[test]
    fn replace_needs_slashes_glued_to_marker() {
        let line = "x // !STUDENT_WILL_SEE_AS (y)";
        assert_eq!(classify(line, CommentStyle::Slashes), LineKind::Plain);
    }

    #[test]
    fn hash_replace_allows_space_after_hash() {
        let line = "CFLAGS = -O2 # !STUDENT_WILL_SEE_AS (CFLAGS = )\n";
        assert_eq!(
            classify(line, CommentStyle::Hash),
            LineKind::Replace {
                original: "CFLAGS = -O2",
                replacement: "CFLAGS =",
            }
        );
    }

    #[test]
    fn indentation_stops_at_newline() {
        assert_eq!(indentation("  \t code"), "  \t ");
        assert_eq!(indentation("    \n"), "    ");
        assert_eq!(indentation("code"), "");
    }

    #[test]
    fn state_transitions_through_a_block() {
        let mut scanner = Scanner::new(Mode::Remove, CommentStyle::Slashes);
        assert_eq!(scanner.state(), ScanState::Normal);
        scanner.feed(1, "// !STUDENT_DONOT_BEGIN\n").unwrap();
        assert_eq!(scanner.state(), ScanState::InBlock { opened_at: 1 });
        scanner.feed(2, "x //!STUDENT_WILL_SEE_AS (y)\n").unwrap();
        assert_eq!(scanner.state(), ScanState::InBlock { opened_at: 1 });
        scanner.feed(3, "// !STUDENT_DONOT_END\n").unwrap();
        assert_eq!(scanner.state(), ScanState::Normal);
        let out = scanner.finish().unwrap();
        assert_eq!(out.lines, vec!["/* TODO: your code here */\n"]);
        assert_eq!(out.affected, 3);
    }

    #[test]
    fn nested_begin_reports_inner_line() {
        let mut scanner = Scanner::new(Mode::DryRun, CommentStyle::Slashes);
        scanner.feed(1, "// !STUDENT_DONOT_BEGIN\n").unwrap();
        scanner.feed(2, "body\n").unwrap();
        let err = scanner.feed(3, "// !STUDENT_DONOT_BEGIN\n").unwrap_err();
        assert_eq!(err, TransformError::NestedBlock { line: 3 });
    }

    #[test]
    fn unterminated_block_reports_opening_line() {
        let mut scanner = Scanner::new(Mode::Remove, CommentStyle::Slashes);
        scanner.feed(1, "keep\n").unwrap();
        scanner.feed(2, "  // !STUDENT_DONOT_BEGIN\n").unwrap();
        scanner.feed(3, "secret\n").unwrap();
        let err = scanner.finish().unwrap_err();
        assert_eq!(err, TransformError::UnterminatedBlock { opened_at: 2 });
    }

    #[test]
    fn commented_copy_gets_a_terminator() {
        let mut scanner = Scanner::new(Mode::Comment, CommentStyle::Slashes);
        scanner.feed(1, "// !STUDENT_DONOT_BEGIN\n").unwrap();
        scanner.feed(2, "// !STUDENT_DONOT_END").unwrap();
        let out = scanner.finish().unwrap();
        assert_eq!(
            out.lines,
            vec![
                "// // !STUDENT_DONOT_BEGIN\n",
                "// // !STUDENT_DONOT_END\n",
                "/* TODO: your code here */\n",
            ]
        );
    }
}
