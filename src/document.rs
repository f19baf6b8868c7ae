//! Line classification for the stats column.
//!
//! A composed text block is split into lines and each line gets one of three
//! color treatments. Checks run in this order:
//!   • a line starting with [`INDENT`] is a list item (value color)
//!   • a line with exactly one `:` is a label/value pair (two-tone)
//!   • anything else is plain text

/// Leading whitespace marking a list sub-line.
pub const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Field { label: &'a str, value: &'a str },
    Item(&'a str),
    Plain(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with(INDENT) {
            return Line::Item(line);
        }

        let mut parts = line.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(label), Some(value), None) => Line::Field { label, value },
            _ => Line::Plain(line),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayDocument<'a> {
    pub lines: Vec<Line<'a>>,
}

impl<'a> DisplayDocument<'a> {
    pub fn parse(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').map(Line::classify).collect(),
        }
    }
}
