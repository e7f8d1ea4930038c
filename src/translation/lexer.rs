//! Byte-level helpers for skipping over the parts of a statement that can hold a stray `?` or `$`.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum State {
    Normal,
    SingleQuoted,
    DoubleQuoted,
    LineComment,
    BlockComment(u32),
    /// Inside `$tag$ ... $tag$`; the range locates `tag` in the source.
    DollarQuoted(Range<usize>),
}

pub(super) fn is_line_comment_start(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'-') && bytes.get(idx + 1) == Some(&b'-')
}

pub(super) fn is_block_comment_start(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'/') && bytes.get(idx + 1) == Some(&b'*')
}

pub(super) fn is_block_comment_end(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'*') && bytes.get(idx + 1) == Some(&b'/')
}

/// End (exclusive) of the run of ASCII digits starting at `start`, if there is at least one.
pub(super) fn digits_end(bytes: &[u8], start: usize) -> Option<usize> {
    let len = bytes[start.min(bytes.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    (len > 0).then_some(start + len)
}

/// Recognise an opening dollar quote (`$$` or `$tag$`) at `start`.
///
/// Returns the tag range and the index of the closing `$` of the opener.
pub(super) fn dollar_quote_open(bytes: &[u8], start: usize) -> Option<(Range<usize>, usize)> {
    let tag_start = start + 1;
    let mut idx = tag_start;
    while idx < bytes.len() && bytes[idx] != b'$' {
        let b = bytes[idx];
        if !(b.is_ascii_alphanumeric() || b == b'_') {
            return None;
        }
        idx += 1;
    }
    if idx >= bytes.len() {
        return None;
    }
    // `$1$` is a placeholder followed by a dollar, not a quote tag.
    if bytes.get(tag_start).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    Some((tag_start..idx, idx))
}

/// Whether the closing `$tag$` for the tag at `tag` begins at `idx`.
pub(super) fn dollar_quote_closes(bytes: &[u8], idx: usize, tag: &Range<usize>) -> bool {
    let tag_bytes = &bytes[tag.clone()];
    let end = idx + 1 + tag_bytes.len();
    bytes.get(idx) == Some(&b'$')
        && bytes.get(idx + 1..end) == Some(tag_bytes)
        && bytes.get(end) == Some(&b'$')
}
