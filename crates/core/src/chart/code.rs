//! Dotted-decimal account code helpers.
//!
//! A code such as `"1.1.150"` is a path in the chart of accounts tree. The
//! empty string is the synthetic root. None of these helpers validate their
//! input: a segment that does not parse as a number reads as `0`, which every
//! ordering algorithm in this crate relies on consistently.

/// Separator between code segments.
pub const SEPARATOR: char = '.';

/// Code of the synthetic root.
pub const ROOT: &str = "";

/// Highest segment value a code may use.
pub const MAX_SEGMENT: u32 = 999;

/// Parses one segment, reading anything unparseable as `0`.
#[must_use]
pub fn parse_segment(segment: &str) -> u32 {
    segment.trim().parse().unwrap_or(0)
}

/// Number of segments in `code`. The root has depth 0.
///
/// - `1.1.1` = 3
/// - `1.2` = 2
/// - `9` = 1
#[must_use]
pub fn depth(code: &str) -> usize {
    if code.is_empty() {
        0
    } else {
        code.split(SEPARATOR).count()
    }
}

/// The trailing segment of `code` as a number; the sibling-ordering key.
#[must_use]
pub fn last_segment(code: &str) -> u32 {
    code.rsplit(SEPARATOR).next().map_or(0, parse_segment)
}

/// The segment at zero-based `index`, if the code is that deep.
#[must_use]
pub fn segment_at(code: &str, index: usize) -> Option<u32> {
    if code.is_empty() {
        return None;
    }
    code.split(SEPARATOR).nth(index).map(parse_segment)
}

/// Code of the parent of `code`; [`ROOT`] for root-level codes.
#[must_use]
pub fn parent_code(code: &str) -> &str {
    code.rsplit_once(SEPARATOR).map_or(ROOT, |(parent, _)| parent)
}

/// Whether `code` sits strictly below `ancestor`.
///
/// Every non-empty code descends from the root.
#[must_use]
pub fn is_descendant_of(code: &str, ancestor: &str) -> bool {
    if ancestor.is_empty() {
        return !code.is_empty();
    }
    code.strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

/// Whether `code` is `ancestor` itself or one of its descendants.
#[must_use]
pub fn is_self_or_descendant_of(code: &str, ancestor: &str) -> bool {
    code == ancestor || is_descendant_of(code, ancestor)
}

/// Builds a child code from a parent code and a segment.
#[must_use]
pub fn join(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{parent}{SEPARATOR}{segment}")
    }
}

/// Moves `code` from below `from` to below `to`.
///
/// Returns `None` when `code` is not a strict descendant of `from`.
#[must_use]
pub fn rebase(code: &str, from: &str, to: &str) -> Option<String> {
    if !is_descendant_of(code, from) {
        return None;
    }
    let rest = if from.is_empty() {
        code
    } else {
        &code[from.len() + 1..]
    };
    Some(join(to, rest))
}

/// The ancestor chain of `code`, nearest first, ending before the root.
///
/// `"1.2.3"` yields `"1.2.3"`, `"1.2"`, `"1"`.
pub fn self_and_ancestors(code: &str) -> impl Iterator<Item = &str> {
    std::iter::successors((!code.is_empty()).then_some(code), |current| {
        let parent = parent_code(current);
        (!parent.is_empty()).then_some(parent)
    })
}
