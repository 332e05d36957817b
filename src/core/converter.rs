use crate::core::fields::FormFields;
use crate::domain::model::{ConversionRequest, ConversionResult, Field, FieldState};
use crate::domain::ports::ConversionService;
use crate::utils::error::Result;

/// Lifecycle of the networked form. Inputs are disabled exactly while a
/// request is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConverterStatus {
    #[default]
    Idle,
    Submitting,
    /// Last request failed; behaves like `Idle` for input.
    Failed(String),
}

/// Form that asks a [`ConversionService`] for both representations and
/// shows whatever the service answers.
pub struct NetworkedConverter<S: ConversionService> {
    service: S,
    fields: FormFields,
    status: ConverterStatus,
}

impl<S: ConversionService> NetworkedConverter<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            fields: FormFields::new(),
            status: ConverterStatus::Idle,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn status(&self) -> &ConverterStatus {
        &self.status
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.status, ConverterStatus::Submitting)
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.status {
            ConverterStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.value(field)
    }

    pub fn field_state(&self, field: Field) -> FieldState {
        FieldState {
            value: self.fields.value(field).to_string(),
            disabled: self.is_disabled(),
        }
    }

    /// Returns `false` if the input is disabled and the keystrokes were dropped.
    pub fn type_text(&mut self, field: Field, text: &str) -> bool {
        if self.is_disabled() {
            tracing::debug!("Ignoring input into disabled field '{}'", field);
            return false;
        }
        self.fields.type_text(field, text);
        true
    }

    pub fn set_value(&mut self, field: Field, text: &str) -> bool {
        if self.is_disabled() {
            tracing::debug!("Ignoring input into disabled field '{}'", field);
            return false;
        }
        self.fields.set_value(field, text);
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.is_disabled() {
            return false;
        }
        self.fields.clear();
        self.status = ConverterStatus::Idle;
        true
    }

    /// First half of a submit: disables both inputs and hands back the request
    /// to send. `None` while another request is still in flight.
    pub fn begin_submit(&mut self) -> Option<ConversionRequest> {
        if self.is_disabled() {
            tracing::debug!("Submit ignored, a conversion is already in flight");
            return None;
        }

        let request = self.fields.request();
        tracing::debug!(
            "Submitting {} -> {}",
            request.source_field(),
            request.endpoint_path()
        );
        self.status = ConverterStatus::Submitting;
        Some(request)
    }

    /// Second half of a submit. On success both inputs take the result's
    /// values; on failure they keep their text. Either way they are enabled
    /// again afterwards.
    pub fn complete(&mut self, outcome: Result<ConversionResult>) -> Result<()> {
        if !self.is_disabled() {
            tracing::warn!("Dropping conversion outcome with no submit in flight");
            return Ok(());
        }

        match outcome {
            Ok(result) => {
                tracing::debug!(
                    "Conversion result: roman='{}' integer='{}'",
                    result.roman,
                    result.integer
                );
                self.fields.apply(&result);
                self.status = ConverterStatus::Idle;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("❌ Conversion request failed: {}", e);
                self.status = ConverterStatus::Failed(e.user_friendly_message());
                Err(e)
            }
        }
    }

    pub async fn submit(&mut self) -> Result<()> {
        let Some(request) = self.begin_submit() else {
            return Ok(());
        };
        let outcome = self.service.convert(&request).await;
        self.complete(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::local::LocalConversionService;
    use crate::utils::error::ConverterError;

    fn converter() -> NetworkedConverter<LocalConversionService> {
        NetworkedConverter::new(LocalConversionService::new())
    }

    #[test]
    fn test_begin_submit_disables_both_fields() {
        let mut converter = converter();
        converter.type_text(Field::RomanNumeral, "I");

        let request = converter.begin_submit().unwrap();
        assert_eq!(
            request,
            ConversionRequest::RomanToInteger {
                roman: "I".to_string()
            }
        );
        assert!(converter.field_state(Field::RomanNumeral).disabled);
        assert!(converter.field_state(Field::Integer).disabled);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_noop() {
        let mut converter = converter();
        assert!(converter.begin_submit().is_some());
        assert!(converter.begin_submit().is_none());
        assert_eq!(converter.status(), &ConverterStatus::Submitting);
    }

    #[test]
    fn test_typing_ignored_while_disabled() {
        let mut converter = converter();
        converter.type_text(Field::Integer, "5");
        converter.begin_submit();

        assert!(!converter.type_text(Field::Integer, "0"));
        assert!(!converter.set_value(Field::RomanNumeral, "X"));
        assert!(!converter.clear());
        assert_eq!(converter.value(Field::Integer), "5");
    }

    #[test]
    fn test_complete_overwrites_both_fields() {
        let mut converter = converter();
        converter.type_text(Field::Integer, "02");
        converter.begin_submit();

        converter
            .complete(Ok(ConversionResult::new("II", "2")))
            .unwrap();

        assert_eq!(
            converter.field_state(Field::RomanNumeral),
            FieldState {
                value: "II".to_string(),
                disabled: false
            }
        );
        assert_eq!(converter.value(Field::Integer), "2");
        assert_eq!(converter.status(), &ConverterStatus::Idle);
    }

    #[test]
    fn test_failed_request_keeps_values_and_reenables() {
        let mut converter = converter();
        converter.type_text(Field::RomanNumeral, "XX");
        converter.begin_submit();

        let outcome = Err(ConverterError::MalformedResponse {
            message: "missing field `integer`".to_string(),
        });
        assert!(converter.complete(outcome).is_err());

        assert!(!converter.is_disabled());
        assert_eq!(converter.value(Field::RomanNumeral), "XX");
        assert_eq!(converter.value(Field::Integer), "");
        assert!(converter.last_error().unwrap().contains("missing field"));
    }

    #[test]
    fn test_complete_without_submit_is_ignored() {
        let mut converter = converter();
        converter
            .complete(Ok(ConversionResult::new("V", "5")))
            .unwrap();
        assert_eq!(converter.value(Field::RomanNumeral), "");
    }

    #[tokio::test]
    async fn test_submit_through_local_service() {
        let mut converter = converter();
        converter.type_text(Field::RomanNumeral, "XLII");
        converter.submit().await.unwrap();

        assert_eq!(converter.value(Field::Integer), "42");
        assert!(!converter.is_disabled());
    }

    #[tokio::test]
    async fn test_error_cleared_by_next_success() {
        let mut converter = converter();
        converter.type_text(Field::Integer, "9000");
        assert!(converter.submit().await.is_err());
        assert!(converter.last_error().is_some());

        converter.set_value(Field::Integer, "9");
        converter.submit().await.unwrap();
        assert!(converter.last_error().is_none());
        assert_eq!(converter.value(Field::RomanNumeral), "IX");
    }
}
