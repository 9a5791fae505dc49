//! Text input port - the control the draft content is typed into.

/// Caret or selection inside a text input, in character offsets.
///
/// The anchor is where the selection started, the head is where the caret is
/// now. They may be in any order; use `start()` and `end()` for ordered bounds.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// A caret with nothing selected.
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Clamp both ends to a text of `len` characters.
    pub fn clamp(self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            head: self.head.min(len),
        }
    }
}

/// A text-input control bound to the draft content.
///
/// The browser equivalent is a textarea; the CLI uses an in-memory buffer.
pub trait TextInput {
    /// Current selection, or `None` when the control cannot report one.
    fn selection(&self) -> Option<Selection>;

    /// Replace the displayed text. Implementations may reset the selection.
    fn set_value(&mut self, value: &str);

    fn set_selection(&mut self, selection: Selection);

    fn focus(&mut self);
}
