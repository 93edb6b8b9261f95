//! Draw command lists
//!
//! Renderers do not touch the framebuffer directly. They produce a bounded
//! [`DrawList`] that is replayed onto any [`FrameBuffer`], which keeps them
//! pure and easy to inspect in tests.

use core::fmt::{self, Write};

use heapless::{String, Vec};

use crate::backend::{Bitmap, DisplayError, FrameBuffer, TextSize};

/// Maximum commands in one list
pub const MAX_COMMANDS: usize = 32;

/// Capacity of text composed by a renderer
pub const LABEL_LEN: usize = 48;

/// Text composed at render time
pub type LabelText = String<LABEL_LEN>;

/// Text for a print command, either borrowed from the screen data or
/// composed by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label<'a> {
    Borrowed(&'a str),
    Owned(LabelText),
}

impl Label<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Label::Borrowed(text) => text,
            Label::Owned(text) => text.as_str(),
        }
    }

    /// Compose a label from format arguments, dropping what does not fit
    pub fn format(args: fmt::Arguments<'_>) -> Self {
        let mut out = Truncating(LabelText::new());
        let _ = out.write_fmt(args);
        Label::Owned(out.0)
    }
}

impl<'a> From<&'a str> for Label<'a> {
    fn from(text: &'a str) -> Self {
        Label::Borrowed(text)
    }
}

/// Writer that keeps as many whole characters as fit
struct Truncating(LabelText);

impl Write for Truncating {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.0.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// A single framebuffer operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand<'a> {
    Clear,
    TextSize(TextSize),
    Cursor { x: i16, y: i16 },
    Text(Label<'a>),
    Bitmap { x: i16, y: i16, bitmap: Bitmap<'a> },
    Flush,
}

/// Bounded list of draw commands ending in a flush
#[derive(Debug, Clone, Default)]
pub struct DrawList<'a> {
    commands: Vec<DrawCommand<'a>, MAX_COMMANDS>,
    overflowed: bool,
}

impl<'a> DrawList<'a> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            overflowed: false,
        }
    }

    /// Append a command
    ///
    /// The last slot is reserved for [`DrawCommand::Flush`] so a full list
    /// still reaches the panel.
    pub fn push(&mut self, command: DrawCommand<'a>) {
        let reserve = usize::from(!matches!(command, DrawCommand::Flush));
        if self.commands.len() + reserve >= MAX_COMMANDS {
            self.overflowed = true;
            return;
        }
        let _ = self.commands.push(command);
    }

    /// Move the cursor, then print
    pub fn text(&mut self, x: i16, y: i16, label: impl Into<Label<'a>>) {
        self.push(DrawCommand::Cursor { x, y });
        self.push(DrawCommand::Text(label.into()));
    }

    pub fn text_size(&mut self, size: TextSize) {
        self.push(DrawCommand::TextSize(size));
    }

    pub fn commands(&self) -> &[DrawCommand<'a>] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Some commands were dropped for lack of space
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Printed text in order, for inspection
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(label) => Some(label.as_str()),
            _ => None,
        })
    }

    /// Replay the list onto a framebuffer
    ///
    /// Stops at the first backend error. A list that overflowed is still
    /// drawn and flushed, then reported as [`DisplayError::BufferOverflow`].
    pub fn apply<F: FrameBuffer + ?Sized>(&self, fb: &mut F) -> Result<(), DisplayError> {
        for command in &self.commands {
            match command {
                DrawCommand::Clear => fb.clear()?,
                DrawCommand::TextSize(size) => fb.set_text_size(*size)?,
                DrawCommand::Cursor { x, y } => fb.set_cursor(*x, *y)?,
                DrawCommand::Text(label) => fb.print_text(label.as_str())?,
                DrawCommand::Bitmap { x, y, bitmap } => fb.draw_bitmap(*x, *y, bitmap)?,
                DrawCommand::Flush => fb.flush()?,
            }
        }

        if self.overflowed {
            return Err(DisplayError::BufferOverflow);
        }
        Ok(())
    }
}
