//! # Building lines
//!
//! The state needed to lay out the lines of an MPS file: the text written so far, where the
//! current line starts and how many (name, value) pairs are on it.
use std::iter::repeat_n;
use std::ops::Range;

use crate::io::mps::token::{COLUMN_SECTION_MARKER, COMMENT_INDICATOR, MARKER_NAME, NAME};
use crate::io::number;

/// Column layout of an MPS file.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Layout {
    /// Fields are at fixed character positions, names are at most eight characters long and
    /// values at most twelve.
    Fixed,
    /// Fields are separated by whitespace and have no length limit.
    Free,
}

impl Layout {
    /// Human readable name, used in the comment header.
    pub fn description(self) -> &'static str {
        match self {
            Layout::Fixed => "MPS (fixed)",
            Layout::Free => "MPS (free)",
        }
    }
}

/// Character ranges for the different fields of the column.
const FIELDS: [Range<usize>; 7] = [
    0..1,
    1..3,
    4..12,
    14..22,
    24..36,
    39..47,
    49..61,
];

/// Number of (name, value) pairs that fit on a line.
const PAIRS_PER_LINE: usize = 2;

#[derive(Copy, Clone)]
enum Alignment {
    Left,
    Right,
}

/// Text of an MPS file under construction.
#[derive(Debug)]
pub struct Lines {
    layout: Layout,
    text: String,
    /// Index in `text` where the current line starts.
    line_start: usize,
    /// Number of (name, value) pairs on the current line.
    column: usize,
}

impl Lines {
    #[allow(missing_docs)]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            text: String::new(),
            line_start: 0,
            column: 0,
        }
    }

    /// Write a comment line, ending the current line first.
    pub fn comment(&mut self, content: &str) {
        self.finish_line();
        self.text.push_str(COMMENT_INDICATOR);
        self.text.push(' ');
        self.text.push_str(content);
        self.end_line();
    }

    /// Write a section header line, ending the current line first.
    pub fn section(&mut self, header: &str) {
        self.finish_line();
        self.text.push_str(header);
        self.end_line();
    }

    /// Write the `NAME` line, which has the problem name in the position of the third field.
    pub fn name(&mut self, problem_name: &str) {
        self.finish_line();
        self.text.push_str(NAME);
        self.put(3, problem_name, Alignment::Left);
        self.end_line();
    }

    /// Write a line with only a type code and a name, as in the `ROWS` section.
    pub fn row(&mut self, code: &str, name: &str) {
        self.finish_line();
        self.put(1, code, Alignment::Left);
        self.put(2, name, Alignment::Left);
        self.end_line();
    }

    /// Add a (name, value) pair to a line starting with `head`.
    ///
    /// A new line is started when there is no current line, and the line is ended when it holds
    /// the maximum number of pairs. The caller has to end the line with `finish_line` before
    /// writing pairs with a different head.
    pub fn term(&mut self, head: &str, name: &str, value: f64) {
        if self.column == 0 {
            self.put(1, "", Alignment::Left);
            self.put(2, head, Alignment::Left);
        }

        let field = 3 + 2 * self.column;
        self.put(field, name, Alignment::Left);
        let value = self.format_value(value);
        self.put(field + 1, &value, Alignment::Right);

        self.column += 1;
        if self.column == PAIRS_PER_LINE {
            self.end_line();
        }
    }

    /// Write a line marking the start or end of the integer columns.
    pub fn marker(&mut self, token: &str) {
        self.finish_line();
        self.put(2, MARKER_NAME, Alignment::Left);
        self.put(3, COLUMN_SECTION_MARKER, Alignment::Left);
        self.put(5, token, Alignment::Left);
        self.end_line();
    }

    /// Write a line of the `BOUNDS` section, with a value only for those bound types that have
    /// one.
    pub fn bound(&mut self, code: &str, bound_name: &str, column_name: &str, value: Option<f64>) {
        self.finish_line();
        self.put(1, code, Alignment::Left);
        self.put(2, bound_name, Alignment::Left);
        self.put(3, column_name, Alignment::Left);
        if let Some(value) = value {
            let value = self.format_value(value);
            self.put(4, &value, Alignment::Right);
        }
        self.end_line();
    }

    /// End the current line if it holds any pairs.
    pub fn finish_line(&mut self) {
        if self.column > 0 {
            self.end_line();
        }
    }

    /// Number of (name, value) pairs on the current line.
    #[cfg(test)]
    pub fn column(&self) -> usize {
        self.column
    }

    /// The complete text, ending the current line if necessary.
    pub fn into_text(mut self) -> String {
        self.finish_line();
        self.text
    }

    fn format_value(&self, value: f64) -> String {
        match self.layout {
            Layout::Fixed => number::format_fixed(value),
            Layout::Free => number::format(value),
        }
    }

    /// Append a field to the current line.
    ///
    /// In the fixed layout, the field is padded to its character range. When the line is
    /// already past the start of the range, a single space separates the field from the previous
    /// one. In the free layout, nonempty fields are separated by a single space.
    fn put(&mut self, field: usize, content: &str, alignment: Alignment) {
        match self.layout {
            Layout::Fixed => {
                let range = &FIELDS[field];
                let position = self.text.len() - self.line_start;
                let padding = range.start.saturating_sub(position).max(usize::from(position > 0));
                let alignment_padding = match alignment {
                    Alignment::Left => 0,
                    Alignment::Right => range.len().saturating_sub(content.len()),
                };
                self.pad(padding + alignment_padding);
                self.text.push_str(content);
            },
            Layout::Free => if !content.is_empty() {
                self.text.push(' ');
                self.text.push_str(content);
            },
        }
    }

    fn pad(&mut self, count: usize) {
        self.text.extend(repeat_n(' ', count));
    }

    fn end_line(&mut self) {
        let trimmed_length = self.text.trim_end_matches(' ').len().max(self.line_start);
        self.text.truncate(trimmed_length);
        self.text.push('\n');
        self.line_start = self.text.len();
        self.column = 0;
    }
}
