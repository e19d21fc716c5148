//! Static opener/closer table for template tags.

/// The kind of tagged region a delimiter pair encloses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TagKind {
    /// `{{ ... }}`
    Variable,
    /// `{% ... %}`
    Block,
    /// `{# ... #}`
    Comment,
}

/// An opening marker and the closing marker it requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Delimiter {
    pub kind: TagKind,
    pub open: &'static str,
    pub close: &'static str,
}

const VARIABLE: Delimiter = Delimiter {
    kind: TagKind::Variable,
    open: "{{",
    close: "}}",
};

const BLOCK: Delimiter = Delimiter {
    kind: TagKind::Block,
    open: "{%",
    close: "%}",
};

const COMMENT: Delimiter = Delimiter {
    kind: TagKind::Comment,
    open: "{#",
    close: "#}",
};

/// Every delimiter pair, in classification order.
pub static DELIMITERS: [Delimiter; 3] = [VARIABLE, BLOCK, COMMENT];

/// Opening markers in the same order as [`DELIMITERS`].
pub const OPENERS: [&str; 3] = [VARIABLE.open, BLOCK.open, COMMENT.open];

impl Delimiter {
    /// Look up the delimiter whose opening marker is exactly `open`.
    pub fn for_open(open: &str) -> Option<&'static Delimiter> {
        DELIMITERS.iter().find(|delimiter| delimiter.open == open)
    }

    /// Look up the delimiter a chunk starts with, if any.
    pub fn starting(chunk: &str) -> Option<&'static Delimiter> {
        DELIMITERS
            .iter()
            .find(|delimiter| chunk.starts_with(delimiter.open))
    }
}

impl TagKind {
    /// The delimiter pair for this kind of tag.
    pub fn delimiter(self) -> &'static Delimiter {
        match self {
            TagKind::Variable => &DELIMITERS[0],
            TagKind::Block => &DELIMITERS[1],
            TagKind::Comment => &DELIMITERS[2],
        }
    }
}
