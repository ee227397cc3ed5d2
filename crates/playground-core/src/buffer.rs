//! Editor buffer layer.
//!
//! One [`EditorBuffer`] backs each editing surface. Text lives in a
//! [`ropey::Rope`] for O(log n) line access; the cursor is a logical
//! (line, column) pair measured in characters. Horizontal motion and
//! backspace operate on grapheme clusters so multi-char clusters (emoji,
//! combining marks) behave as single units. Storage is LF-only: CRLF and
//! lone CR in seed text or inserted text become `'\n'` on the way in.

use ropey::Rope;
use std::borrow::Cow;
use std::cmp::Ordering;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Buffer operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Cursor target outside the document
    InvalidPosition {
        /// Logical line index.
        line: usize,
        /// Column in characters.
        column: usize,
    },
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::InvalidPosition { line, column } => {
                write!(f, "Invalid position: line {}, column {}", line, column)
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// A single text-editing surface.
///
/// Content mutations bump [`EditorBuffer::version`]; cursor motion does not.
/// Callers that need change notifications subscribe at the workspace level,
/// which owns the buffers and observes every mutation.
#[derive(Debug, Clone)]
pub struct EditorBuffer {
    rope: Rope,
    cursor: Position,
    version: u64,
}

impl EditorBuffer {
    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Create a buffer seeded with `text`, cursor at the origin. Line
    /// endings are normalized to LF.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(&normalize_newlines(text)),
            cursor: Position::new(0, 0),
            version: 0,
        }
    }

    /// Full text snapshot.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text of line `line` without its trailing newline, or `None` when the
    /// line does not exist.
    pub fn line(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let mut text = self.rope.line(line).to_string();
        // Rope's line() includes the newline
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }
        Some(text)
    }

    /// Number of logical lines (at least 1 for an empty buffer).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Number of characters in the buffer.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Content version, bumped by every content mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Display width (in terminal cells) of the cursor line up to the cursor
    /// column; the front end uses this to place the visible cursor.
    pub fn cursor_visual_x(&self) -> usize {
        let line = self.line(self.cursor.line).unwrap_or_default();
        line.chars()
            .take(self.cursor.column)
            .map(|ch| ch.width().unwrap_or(0))
            .sum()
    }

    /// Move the cursor to an explicit position. The column is clamped to the
    /// line length; a line beyond the document is an error.
    pub fn set_cursor(&mut self, position: Position) -> Result<bool, BufferError> {
        if position.line >= self.line_count() {
            return Err(BufferError::InvalidPosition {
                line: position.line,
                column: position.column,
            });
        }
        let column = position.column.min(self.line_char_len(position.line));
        let target = Position::new(position.line, column);
        if target == self.cursor {
            return Ok(false);
        }
        self.cursor = target;
        Ok(true)
    }

    /// Insert a single character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let mut text = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut text));
    }

    /// Insert text (possibly multi-line) at the cursor and advance past it.
    /// Line endings are normalized to LF.
    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let text = normalize_newlines(text);
        let offset = self.cursor_char_offset();
        self.rope.insert(offset, &text);
        self.set_cursor_from_offset(offset + text.chars().count());
        self.version += 1;
    }

    /// Insert a newline at the cursor, moving to the start of the new line.
    pub fn insert_newline(&mut self) {
        self.insert_str("\n");
    }

    /// Delete the grapheme cluster before the cursor, joining lines when the
    /// cursor sits at a line start. Returns whether anything was removed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor.column > 0 {
            let line = self.line(self.cursor.line).unwrap_or_default();
            let new_column = prev_grapheme_boundary(&line, self.cursor.column);
            let line_start = self.rope.line_to_char(self.cursor.line);
            self.rope
                .remove(line_start + new_column..line_start + self.cursor.column);
            self.cursor.column = new_column;
            self.version += 1;
            true
        } else if self.cursor.line > 0 {
            let line_start = self.rope.line_to_char(self.cursor.line);
            let prev_line = self.cursor.line - 1;
            let prev_len = self.line_char_len(prev_line);
            self.rope.remove(line_start - 1..line_start);
            self.cursor = Position::new(prev_line, prev_len);
            self.version += 1;
            true
        } else {
            false
        }
    }

    /// Delete the grapheme cluster after the cursor, joining lines when the
    /// cursor sits at a line end. Returns whether anything was removed.
    pub fn delete_forward(&mut self) -> bool {
        let line_len = self.line_char_len(self.cursor.line);
        let offset = self.cursor_char_offset();
        if self.cursor.column < line_len {
            let line = self.line(self.cursor.line).unwrap_or_default();
            let end_column = next_grapheme_boundary(&line, self.cursor.column);
            self.rope
                .remove(offset..offset + (end_column - self.cursor.column));
            self.version += 1;
            true
        } else if self.cursor.line + 1 < self.line_count() {
            self.rope.remove(offset..offset + 1);
            self.version += 1;
            true
        } else {
            false
        }
    }

    /// Move one grapheme cluster left, wrapping to the previous line end.
    pub fn move_left(&mut self) -> bool {
        if self.cursor.column > 0 {
            let line = self.line(self.cursor.line).unwrap_or_default();
            self.cursor.column = prev_grapheme_boundary(&line, self.cursor.column);
            true
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.column = self.line_char_len(self.cursor.line);
            true
        } else {
            false
        }
    }

    /// Move one grapheme cluster right, wrapping to the next line start.
    pub fn move_right(&mut self) -> bool {
        let line_len = self.line_char_len(self.cursor.line);
        if self.cursor.column < line_len {
            let line = self.line(self.cursor.line).unwrap_or_default();
            self.cursor.column = next_grapheme_boundary(&line, self.cursor.column);
            true
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor = Position::new(self.cursor.line + 1, 0);
            true
        } else {
            false
        }
    }

    /// Move one line up, clamping the column to the target line length.
    pub fn move_up(&mut self) -> bool {
        if self.cursor.line == 0 {
            return false;
        }
        self.cursor.line -= 1;
        self.cursor.column = self.cursor.column.min(self.line_char_len(self.cursor.line));
        true
    }

    /// Move one line down, clamping the column to the target line length.
    pub fn move_down(&mut self) -> bool {
        if self.cursor.line + 1 >= self.line_count() {
            return false;
        }
        self.cursor.line += 1;
        self.cursor.column = self.cursor.column.min(self.line_char_len(self.cursor.line));
        true
    }

    /// Move to column 0 of the cursor line.
    pub fn move_line_start(&mut self) -> bool {
        if self.cursor.column == 0 {
            return false;
        }
        self.cursor.column = 0;
        true
    }

    /// Move past the last character of the cursor line.
    pub fn move_line_end(&mut self) -> bool {
        let line_len = self.line_char_len(self.cursor.line);
        if self.cursor.column == line_len {
            return false;
        }
        self.cursor.column = line_len;
        true
    }

    fn line_char_len(&self, line: usize) -> usize {
        self.line(line).map_or(0, |text| text.chars().count())
    }

    fn cursor_char_offset(&self) -> usize {
        let line_start = self.rope.line_to_char(self.cursor.line);
        line_start + self.cursor.column
    }

    fn set_cursor_from_offset(&mut self, offset: usize) {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        let line_start = self.rope.line_to_char(line);
        self.cursor = Position::new(line, offset - line_start);
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

/// Rewrite CRLF and lone CR as LF; borrows when the input is already clean.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Largest grapheme boundary strictly before `column` (in characters).
fn prev_grapheme_boundary(line: &str, column: usize) -> usize {
    let mut boundary = 0;
    let mut count = 0;
    for grapheme in line.graphemes(true) {
        let next = count + grapheme.chars().count();
        if next >= column {
            return boundary;
        }
        boundary = next;
        count = next;
    }
    boundary
}

/// Smallest grapheme boundary strictly after `column` (in characters).
fn next_grapheme_boundary(line: &str, column: usize) -> usize {
    let mut count = 0;
    for grapheme in line.graphemes(true) {
        let next = count + grapheme.chars().count();
        if next > column {
            return next;
        }
        count = next;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grapheme_boundaries_ascii() {
        assert_eq!(prev_grapheme_boundary("abc", 2), 1);
        assert_eq!(prev_grapheme_boundary("abc", 1), 0);
        assert_eq!(next_grapheme_boundary("abc", 0), 1);
        assert_eq!(next_grapheme_boundary("abc", 2), 3);
    }

    #[test]
    fn grapheme_boundaries_clusters() {
        // "e" + combining acute is one cluster of two chars
        let text = "ae\u{0301}b";
        assert_eq!(next_grapheme_boundary(text, 1), 3);
        assert_eq!(prev_grapheme_boundary(text, 3), 1);
        // snapping out of a mid-cluster column
        assert_eq!(prev_grapheme_boundary(text, 2), 1);
    }

    #[test]
    fn backspace_removes_whole_cluster() {
        let mut buffer = EditorBuffer::new("ae\u{0301}");
        buffer.set_cursor(Position::new(0, 3)).unwrap();
        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "a");
        assert_eq!(buffer.cursor(), Position::new(0, 1));
    }

    #[test]
    fn wide_chars_report_display_width() {
        let mut buffer = EditorBuffer::new("中文ab");
        buffer.set_cursor(Position::new(0, 3)).unwrap();
        assert_eq!(buffer.cursor_visual_x(), 5);
    }

    #[test]
    fn crlf_seed_is_normalized_on_load() {
        let buffer = EditorBuffer::new("a\r\nb\r\n");
        assert_eq!(buffer.text(), "a\nb\n");
        assert_eq!(buffer.line_count(), 3);

        // Lone CR counts as a line break too.
        let buffer = EditorBuffer::new("a\rb");
        assert_eq!(buffer.text(), "a\nb");
    }

    #[test]
    fn inserted_text_is_normalized_to_lf() {
        let mut buffer = EditorBuffer::empty();
        buffer.insert_str("a\r\nb\rc");
        assert_eq!(buffer.text(), "a\nb\nc");
        assert_eq!(buffer.cursor(), Position::new(2, 1));
    }

    #[test]
    fn line_join_after_crlf_seed_leaves_no_stray_cr() {
        let mut buffer = EditorBuffer::new("alpha\r\nbeta");
        buffer.set_cursor(Position::new(1, 0)).unwrap();
        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "alphabeta");
        assert_eq!(buffer.cursor(), Position::new(0, 5));
        assert!(!buffer.text().contains('\r'));
    }
}
