//! Search form state: the input buffer and whether it has focus.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchModel {
    /// Text typed so far
    pub input: String,

    /// Whether the input is receiving keystrokes
    pub editing: bool,
}

impl Default for SearchModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchModel {
    /// The form starts focused so typing works right away
    pub fn new() -> Self {
        Self {
            input: String::new(),
            editing: true,
        }
    }

    pub fn focus(&mut self) {
        self.editing = true;
    }

    /// Leave the input without submitting
    pub fn cancel(&mut self) {
        self.editing = false;
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Emit the entered text as-is and leave the input
    pub fn submit(&mut self) -> String {
        self.editing = false;
        self.input.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_submit() {
        let mut search = SearchModel::new();
        assert!(search.editing);

        for c in "cats!".chars() {
            search.insert_char(c);
        }
        search.backspace();

        assert_eq!(search.submit(), "cats");
        assert!(!search.editing);
        // Text stays in the box after submission
        assert_eq!(search.input, "cats");
    }

    #[test]
    fn test_submit_is_unvalidated() {
        let mut search = SearchModel::new();
        search.insert_char(' ');
        assert_eq!(search.submit(), " ");
    }

    #[test]
    fn test_cancel_keeps_text() {
        let mut search = SearchModel::new();
        search.insert_char('x');
        search.cancel();
        assert!(!search.editing);
        assert_eq!(search.input, "x");

        search.focus();
        search.clear();
        assert!(search.editing);
        assert!(search.input.is_empty());
    }
}
