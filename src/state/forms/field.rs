//! Form field value objects

/// Represents a single text field on an onboarding page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    value: String,
}

impl FormField {
    /// Create a new, empty text field
    pub fn text(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
        }
    }

    /// Get the current text
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the text
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Append a pasted string, keeping it on one line
    pub fn push_str(&mut self, s: &str) {
        self.value.extend(s.chars().filter(|c| !c.is_control()));
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
