use std::borrow::Cow;

mod lexer;

use lexer::{
    State, digits_end, dollar_quote_closes, dollar_quote_open, is_block_comment_end,
    is_block_comment_start, is_line_comment_start,
};

/// Placeholder convention used when rendering or binding a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// Anonymous `?` markers bound in order of appearance.
    #[default]
    Question,
    /// SQLite-style numbered placeholders like `?1`.
    Sqlite,
    /// PostgreSQL-style placeholders like `$1`.
    Postgres,
}

impl PlaceholderStyle {
    /// Render the marker for the parameter at 1-based `ordinal`.
    ///
    /// ```rust
    /// use foo_store::prelude::*;
    ///
    /// assert_eq!(PlaceholderStyle::Question.placeholder(4), "?");
    /// assert_eq!(PlaceholderStyle::Sqlite.placeholder(4), "?4");
    /// assert_eq!(PlaceholderStyle::Postgres.placeholder(4), "$4");
    /// ```
    #[must_use]
    pub fn placeholder(self, ordinal: usize) -> String {
        match self {
            PlaceholderStyle::Question => "?".to_string(),
            PlaceholderStyle::Sqlite => format!("?{ordinal}"),
            PlaceholderStyle::Postgres => format!("${ordinal}"),
        }
    }
}

/// Rewrite the placeholders in `sql` into the `target` convention.
///
/// Anonymous `?` markers are numbered in order of appearance; numbered markers are translated
/// between `?N` and `$N` keeping their number. Markers inside quoted strings, quoted identifiers,
/// comments, and dollar-quoted blocks are left alone. A `Question` target is the canonical
/// builder form and is returned unchanged.
///
/// Postgres operators that are spelled with a bare `?` (the `jsonb` key tests) are rewritten too,
/// so write those statements directly in `$N` form and skip this call.
///
/// Returns a borrowed `Cow` when no changes are needed.
#[must_use]
pub fn rebind(sql: &str, target: PlaceholderStyle) -> Cow<'_, str> {
    if target == PlaceholderStyle::Question {
        return Cow::Borrowed(sql);
    }

    let bytes = sql.as_bytes();
    let mut out = Rewriter::new(sql);
    let mut state = State::Normal;
    let mut anonymous = 0usize;
    let mut idx = 0;

    while idx < bytes.len() {
        let b = bytes[idx];
        match state {
            State::Normal => match b {
                b'\'' => state = State::SingleQuoted,
                b'"' => state = State::DoubleQuoted,
                _ if is_line_comment_start(bytes, idx) => state = State::LineComment,
                _ if is_block_comment_start(bytes, idx) => {
                    state = State::BlockComment(1);
                    idx += 1;
                }
                b'$' => {
                    if let Some(end) = digits_end(bytes, idx + 1) {
                        if target == PlaceholderStyle::Sqlite {
                            out.splice(idx, idx + 1, "?");
                        }
                        idx = end - 1;
                    } else if let Some((tag, opener_end)) = dollar_quote_open(bytes, idx) {
                        state = State::DollarQuoted(tag);
                        idx = opener_end;
                    }
                }
                b'?' => {
                    if let Some(end) = digits_end(bytes, idx + 1) {
                        if target == PlaceholderStyle::Postgres {
                            out.splice(idx, idx + 1, "$");
                        }
                        idx = end - 1;
                    } else {
                        anonymous += 1;
                        out.splice(idx, idx + 1, &target.placeholder(anonymous));
                    }
                }
                _ => {}
            },
            State::SingleQuoted => {
                if b == b'\'' {
                    if bytes.get(idx + 1) == Some(&b'\'') {
                        idx += 1; // escaped quote
                    } else {
                        state = State::Normal;
                    }
                }
            }
            State::DoubleQuoted => {
                if b == b'"' {
                    if bytes.get(idx + 1) == Some(&b'"') {
                        idx += 1; // escaped quote
                    } else {
                        state = State::Normal;
                    }
                }
            }
            State::LineComment => {
                if b == b'\n' {
                    state = State::Normal;
                }
            }
            State::BlockComment(depth) => {
                if is_block_comment_start(bytes, idx) {
                    state = State::BlockComment(depth + 1);
                    idx += 1;
                } else if is_block_comment_end(bytes, idx) {
                    state = if depth == 1 {
                        State::Normal
                    } else {
                        State::BlockComment(depth - 1)
                    };
                    idx += 1;
                }
            }
            State::DollarQuoted(ref tag) => {
                if dollar_quote_closes(bytes, idx, tag) {
                    idx += tag.len() + 1;
                    state = State::Normal;
                }
            }
        }
        idx += 1;
    }

    out.finish()
}

/// Lazily-allocated copy of the source with byte ranges replaced.
struct Rewriter<'a> {
    sql: &'a str,
    buf: Option<String>,
    copied: usize,
}

impl<'a> Rewriter<'a> {
    fn new(sql: &'a str) -> Self {
        Self {
            sql,
            buf: None,
            copied: 0,
        }
    }

    fn splice(&mut self, start: usize, end: usize, replacement: &str) {
        let buf = self
            .buf
            .get_or_insert_with(|| String::with_capacity(self.sql.len() + 16));
        buf.push_str(&self.sql[self.copied..start]);
        buf.push_str(replacement);
        self.copied = end;
    }

    fn finish(self) -> Cow<'a, str> {
        match self.buf {
            Some(mut buf) => {
                buf.push_str(&self.sql[self.copied..]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(self.sql),
        }
    }
}
