use crate::core::fields::FormFields;
use crate::core::roman;
use crate::domain::model::{Field, FieldState};
use crate::utils::error::Result;

/// Client-side form: converts in place, never disables its inputs.
#[derive(Debug, Clone, Default)]
pub struct LocalTranslator {
    fields: FormFields,
    last_error: Option<String>,
}

impl LocalTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.value(field)
    }

    pub fn field_state(&self, field: Field) -> FieldState {
        FieldState {
            value: self.fields.value(field).to_string(),
            disabled: false,
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn type_text(&mut self, field: Field, text: &str) {
        self.fields.type_text(field, text);
    }

    pub fn set_value(&mut self, field: Field, text: &str) {
        self.fields.set_value(field, text);
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.last_error = None;
    }

    /// Converts the source input and writes the answer into the other one.
    /// Invalid input leaves both inputs untouched.
    pub fn submit(&mut self) -> Result<()> {
        let request = self.fields.request();
        let target = request.source_field().other();

        match roman::convert(&request) {
            Ok(result) => {
                self.fields.write(target, result.value_of(target));
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::debug!("Local conversion rejected: {}", e);
                self.last_error = Some(e.user_friendly_message());
                Err(e)
            }
        }
    }
}
