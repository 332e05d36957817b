use crate::domain::model::{ConversionRequest, ConversionResult, Field};

/// Text of the two inputs plus which one the user touched last. Shared by
/// both converter components; enabled/disabled is decided by the owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    roman: String,
    integer: String,
    last_edited: Option<Field>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::RomanNumeral => &self.roman,
            Field::Integer => &self.integer,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::RomanNumeral => &mut self.roman,
            Field::Integer => &mut self.integer,
        }
    }

    /// Appends keystrokes, like typing into the end of the input.
    pub fn type_text(&mut self, field: Field, text: &str) {
        self.value_mut(field).push_str(text);
        self.last_edited = Some(field);
    }

    pub fn set_value(&mut self, field: Field, text: &str) {
        let value = self.value_mut(field);
        value.clear();
        value.push_str(text);
        self.last_edited = Some(field);
    }

    pub fn last_edited(&self) -> Option<Field> {
        self.last_edited
    }

    /// The field whose text is converted. Falls back to the Roman input
    /// when nothing has been edited yet.
    pub fn source(&self) -> Field {
        self.last_edited.unwrap_or(Field::RomanNumeral)
    }

    pub fn request(&self) -> ConversionRequest {
        let source = self.source();
        ConversionRequest::from_source(source, self.value(source))
    }

    /// Overwrites both inputs. Does not count as a user edit.
    pub fn apply(&mut self, result: &ConversionResult) {
        self.roman.clone_from(&result.roman);
        self.integer.clone_from(&result.integer);
    }

    /// Overwrites a single input. Does not count as a user edit.
    pub fn write(&mut self, field: Field, text: &str) {
        let value = self.value_mut(field);
        value.clear();
        value.push_str(text);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
