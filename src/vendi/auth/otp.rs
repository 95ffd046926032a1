//! Six-cell one-time-code input manager. The shell renders one text box per
//! cell; this type owns the digits and the focus index so every platform gets
//! identical behavior for typing, pasting rejection, and backspace.

/// Number of code cells.
pub const OTP_LEN: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtpInput {
    cells: [Option<char>; OTP_LEN],
    focus: usize,
}

impl OtpInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a raw value change to cell `index`.
    ///
    /// Anything that is non-empty and not a single ASCII digit is rejected and
    /// the cell is left unchanged. Storing a digit into a cell before the last
    /// one forwards focus to the next cell.
    pub fn on_digit_changed(&mut self, index: usize, raw: &str) {
        if index >= OTP_LEN {
            return;
        }

        if raw.is_empty() {
            self.cells[index] = None;
            return;
        }

        let mut chars = raw.chars();
        let first = chars.next();
        if chars.next().is_some() {
            return;
        }

        let Some(digit) = first.filter(char::is_ascii_digit) else {
            return;
        };

        self.cells[index] = Some(digit);
        if index < OTP_LEN - 1 {
            self.focus = index + 1;
        }
    }

    /// Apply a backspace key press on cell `index`.
    ///
    /// An empty cell moves focus back one cell so the user can delete across
    /// cell boundaries; a non-empty cell is only cleared.
    pub fn on_backspace(&mut self, index: usize) {
        if index >= OTP_LEN {
            return;
        }

        if self.cells[index].is_some() {
            self.cells[index] = None;
        } else if index > 0 {
            self.focus = index - 1;
        }
    }

    /// Concatenation of the non-empty cells.
    #[must_use]
    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// True once every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Index of the cell that currently has input focus.
    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Empty every cell and return focus to cell 0.
    pub fn clear(&mut self) {
        self.cells = [None; OTP_LEN];
        self.focus = 0;
    }
}
