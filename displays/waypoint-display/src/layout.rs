//! Text layout engine
//!
//! Lays out untrusted strings on a fixed character grid. Everything works
//! on `char` boundaries, so arbitrary UTF-8 input never panics; lines beyond
//! the block's limit are dropped.

/// Average character cell width of the small font in pixels
pub const CHAR_CELL_WIDTH: u16 = 6;

/// Vertical distance between consecutive small-font lines
pub const LINE_HEIGHT: i16 = 10;

/// Rectangular text region measured in pixels and lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextBlock {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub max_lines: usize,
}

/// One laid-out line and its top-left position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLine<'a> {
    pub x: i16,
    pub y: i16,
    pub text: &'a str,
}

impl TextBlock {
    pub const fn new(x: i16, y: i16, width: u16, max_lines: usize) -> Self {
        Self {
            x,
            y,
            width,
            max_lines,
        }
    }

    /// Characters that fit on one line, never less than one
    pub fn chars_per_line(&self) -> usize {
        usize::from(self.width / CHAR_CELL_WIDTH).max(1)
    }

    /// Word-wrap `text` into this block
    pub fn lines<'a>(&self, text: &'a str) -> Lines<'a> {
        Lines {
            rest: text.trim(),
            limit: self.chars_per_line(),
            remaining: self.max_lines,
            x: self.x,
            y: self.y,
        }
    }
}

/// Iterator over the wrapped lines of a [`TextBlock`]
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
    limit: usize,
    remaining: usize,
    x: i16,
    y: i16,
}

impl<'a> Iterator for Lines<'a> {
    type Item = PlacedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.rest.is_empty() {
            return None;
        }

        let (line, rest) = split_line(self.rest, self.limit);
        self.rest = rest.trim_start();
        self.remaining -= 1;

        let placed = PlacedLine {
            x: self.x,
            y: self.y,
            text: line,
        };
        self.y = self.y.saturating_add(LINE_HEIGHT);
        Some(placed)
    }
}

/// Split off one line of at most `limit` characters
///
/// `text` starts with a non-whitespace character. Prefers a newline, then
/// the last whitespace at or just past the limit, then a hard cut.
fn split_line(text: &str, limit: usize) -> (&str, &str) {
    // Byte offset of the char at index `limit`, if the text is that long
    let cut = text.char_indices().nth(limit).map(|(i, _)| i);

    // Window includes the char at the limit so "word " breaks cleanly
    let window_end = match cut {
        Some(at) => at + text[at..].chars().next().map_or(0, char::len_utf8),
        None => text.len(),
    };
    let window = &text[..window_end];

    if let Some(nl) = window.find('\n') {
        return (text[..nl].trim_end(), &text[nl + 1..]);
    }

    let Some(cut) = cut else {
        return (text, "");
    };

    match window.rfind(char::is_whitespace) {
        Some(ws) if ws > 0 => (text[..ws].trim_end(), &text[ws..]),
        _ => (&text[..cut], &text[cut..]),
    }
}

/// Trim, keep at most `max_chars` characters, and trim the cut again
pub fn truncate(text: &str, max_chars: usize) -> &str {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((at, _)) => text[..at].trim_end(),
        None => text,
    }
}
