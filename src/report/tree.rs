//! Tree glyph selection
//!
//! Pure lookahead helpers so rendering decisions stay testable away from
//! any network fetching.

const TEE: &str = "├";
const ELBOW: &str = "└";
const BAR: &str = "│";
const BLANK: &str = " ";

/// Connector drawn in front of an entry: a corner for the last sibling
pub fn connector(index: usize, len: usize) -> &'static str {
    if index + 1 == len {
        ELBOW
    } else {
        TEE
    }
}

/// Guide drawn under an entry, in front of its children's lines
pub fn guide(index: usize, len: usize) -> &'static str {
    if index + 1 == len {
        BLANK
    } else {
        BAR
    }
}

/// Connector for the owner/reviewer run of a pull request
///
/// The run is terminal only when no assignee line follows it; with an
/// assignee present, even its last entry keeps the through glyph.
pub fn run_connector(index: usize, len: usize, assignee_follows: bool) -> &'static str {
    if !assignee_follows && index + 1 == len {
        ELBOW
    } else {
        TEE
    }
}

/// Connector for an assignee line, always the last line of its pull request
pub fn assignee_connector() -> &'static str {
    ELBOW
}
