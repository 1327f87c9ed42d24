//! Line splitting and hard wrapping for exported file bodies.
//!
//! Wrapping only inserts line breaks. Whitespace is never collapsed, trimmed
//! or expanded, so concatenating the pieces of a wrapped line gives back the
//! original line.

use std::collections::VecDeque;

/// Column width used for exported bodies.
pub const WRAP_WIDTH: usize = 500;

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

fn is_wrap_space(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{0b}' | '\u{0c}' | '\r' | ' ')
}

/// Splits text into lines without their terminators.
///
/// Besides `\n`, `\r\n` and `\r`, the vertical tab, form feed, file/group/record
/// separators, NEL and the Unicode line and paragraph separators end a line.
/// A trailing terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

// Maximal runs of whitespace or of non-whitespace.
fn chunks(line: &str) -> VecDeque<&str> {
    let mut chunks = VecDeque::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (i, c) in line.char_indices() {
        let space = is_wrap_space(c);
        if current.is_some_and(|prev| prev != space) {
            chunks.push_back(&line[start..i]);
            start = i;
        }
        current = Some(space);
    }
    if start < line.len() {
        chunks.push_back(&line[start..]);
    }
    chunks
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

/// Wraps a single line to at most `width` characters per piece.
///
/// Chunks are packed greedily. A chunk wider than `width` is cut to fill the
/// rest of the current piece. Hyphens are not treated as break points. An empty
/// line yields no pieces.
pub fn wrap_line(line: &str, width: usize) -> Vec<&str> {
    let width = width.max(1);
    let mut chunks = chunks(line);
    let mut pieces = Vec::new();
    let mut start = 0;
    while !chunks.is_empty() {
        let mut len = 0;
        let mut end = start;
        while let Some(chunk) = chunks.front() {
            let n = chunk.chars().count();
            if len + n > width {
                break;
            }
            len += n;
            end += chunk.len();
            chunks.pop_front();
        }
        if let Some(chunk) = chunks.front_mut() {
            let text: &str = *chunk;
            if text.chars().count() > width {
                let split = byte_offset(text, width - len);
                end += split;
                *chunk = &text[split..];
            }
        }
        if end > start {
            pieces.push(&line[start..end]);
            start = end;
        }
    }
    pieces
}
