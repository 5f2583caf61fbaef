// crates/student_markers/src/lib.rs

//! Marker keywords and stand-in text shared by the redaction tool-chain.

/// Hides the single line it appears on.
pub const DONOT_SEE: &str = "!STUDENT_DONOT_SEE";

/// Opens a hidden block (the marker line itself is part of the block).
pub const DONOT_BEGIN: &str = "!STUDENT_DONOT_BEGIN";

/// Closes a hidden block opened by [`DONOT_BEGIN`].
pub const DONOT_END: &str = "!STUDENT_DONOT_END";

/// Swaps the text before the marker for the text in its parentheses.
pub const WILL_SEE_AS: &str = "!STUDENT_WILL_SEE_AS";

/// Wrapper used in comment mode to keep the original text of a replaced line.
pub const SHOULD_WRITE: &str = "!STUDENT_SHOULD_WRITE";

/// Comment syntax of the file being redacted.
///
/// C sources, headers, assembly and linker scripts use `//` comments and
/// `/* ... */` stand-ins. Makefiles only understand `#`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommentStyle {
    #[default]
    Slashes,
    Hash,
}

impl CommentStyle {
    /// Picks the style from a file name (not a full path).
    pub fn for_file_name(name: &str) -> Self {
        if name.ends_with("Makefile") {
            CommentStyle::Hash
        } else {
            CommentStyle::Slashes
        }
    }

    /// Token prefixed to hidden lines in comment mode.
    pub fn line_comment(self) -> &'static str {
        match self {
            CommentStyle::Slashes => "//",
            CommentStyle::Hash => "#",
        }
    }

    /// Stand-in emitted where hidden code used to be.
    pub fn placeholder(self) -> &'static str {
        match self {
            CommentStyle::Slashes => "/* TODO: your code here */",
            CommentStyle::Hash => "# TODO: your code here",
        }
    }

    /// Annotation that follows the replacement text of a will-see-as line.
    pub fn replace_annotation(self) -> &'static str {
        match self {
            CommentStyle::Slashes => "/* TODO: replace this */",
            CommentStyle::Hash => "# TODO: replace this",
        }
    }

    /// Wraps the original text of a replaced line so it can be found again later.
    pub fn should_write(self, original: &str) -> String {
        match self {
            CommentStyle::Slashes => format!("// {}({})", SHOULD_WRITE, original),
            CommentStyle::Hash => format!("{}({})", SHOULD_WRITE, original),
        }
    }
}
