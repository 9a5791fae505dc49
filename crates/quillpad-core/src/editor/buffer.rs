//! In-memory text input, used by the CLI and in tests.

use crate::ports::{Selection, TextInput};

/// A textarea without a screen.
///
/// Setting the value moves the caret to the end, the way browsers do for
/// programmatic updates.
#[derive(Debug, Clone)]
pub struct BufferInput {
    value: String,
    selection: Selection,
    reports_selection: bool,
    focused: bool,
}

impl BufferInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            selection: Selection::collapsed(0),
            reports_selection: true,
            focused: false,
        }
    }

    /// An input that never reports its selection.
    pub fn detached() -> Self {
        Self {
            reports_selection: false,
            ..Self::new()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn caret(&self) -> usize {
        self.selection.head
    }
}

impl Default for BufferInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput for BufferInput {
    fn selection(&self) -> Option<Selection> {
        self.reports_selection.then_some(self.selection)
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.selection = Selection::collapsed(self.value.chars().count());
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamp(self.value.chars().count());
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
