// src/client/form.rs
use std::collections::HashMap;

use crate::api::types::GenerateRequest;
use crate::client::SubmitError;

pub const FORM_ID: &str = "genForm";
pub const LENGTH_ID: &str = "length";
pub const UPPERCASE_ID: &str = "upper";
pub const LOWERCASE_ID: &str = "lower";
pub const NUMBERS_ID: &str = "nums";
pub const SYMBOLS_ID: &str = "syms";
pub const RESULT_ID: &str = "result";

/// Read access to the form's input elements, looked up by element id.
pub trait FormSource {
    /// Current `value` of a text-like input.
    fn value(&self, id: &str) -> Option<String>;

    /// Current `checked` state of a checkbox.
    fn checked(&self, id: &str) -> Option<bool>;
}

/// Gather the five generator fields exactly as the form holds them.
pub fn collect_request<F: FormSource + ?Sized>(form: &F) -> Result<GenerateRequest, SubmitError> {
    let checked = |id: &'static str| form.checked(id).ok_or(SubmitError::MissingElement(id));

    Ok(GenerateRequest {
        length: form.value(LENGTH_ID).ok_or(SubmitError::MissingElement(LENGTH_ID))?,
        uppercase: checked(UPPERCASE_ID)?,
        lowercase: checked(LOWERCASE_ID)?,
        numbers: checked(NUMBERS_ID)?,
        symbols: checked(SYMBOLS_ID)?,
    })
}

/// In-memory form, for callers that have no page to read from.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<String, String>,
    checks: HashMap<String, bool>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The generator form with every field filled in.
    pub fn generator(length: &str, uppercase: bool, lowercase: bool, numbers: bool, symbols: bool) -> Self {
        Self::new()
            .with_value(LENGTH_ID, length)
            .with_checked(UPPERCASE_ID, uppercase)
            .with_checked(LOWERCASE_ID, lowercase)
            .with_checked(NUMBERS_ID, numbers)
            .with_checked(SYMBOLS_ID, symbols)
    }

    pub fn with_value(mut self, id: &str, value: &str) -> Self {
        self.values.insert(id.to_string(), value.to_string());
        self
    }

    pub fn with_checked(mut self, id: &str, checked: bool) -> Self {
        self.checks.insert(id.to_string(), checked);
        self
    }
}

impl FormSource for FormState {
    fn value(&self, id: &str) -> Option<String> {
        self.values.get(id).cloned()
    }

    fn checked(&self, id: &str) -> Option<bool> {
        self.checks.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn request_carries_exactly_the_five_fields() {
        let form = FormState::generator("12", true, false, true, false);
        let request = collect_request(&form).unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "length": "12",
                "uppercase": true,
                "lowercase": false,
                "numbers": true,
                "symbols": false,
            })
        );
        let fields = body.as_object().unwrap();
        assert_eq!(fields.len(), 5);
        assert!(fields["length"].is_string());
        assert!(["uppercase", "lowercase", "numbers", "symbols"]
            .iter()
            .all(|key| matches!(fields[*key], Value::Bool(_))));
    }

    #[test]
    fn length_is_sent_unvalidated() {
        let form = FormState::generator("", false, false, false, false);
        let request = collect_request(&form).unwrap();
        assert_eq!(request.length, "");
    }

    #[test]
    fn missing_element_is_reported_by_id() {
        let form = FormState::new()
            .with_value(LENGTH_ID, "16")
            .with_checked(UPPERCASE_ID, true)
            .with_checked(LOWERCASE_ID, true)
            .with_checked(NUMBERS_ID, true);
        let err = collect_request(&form).unwrap_err();
        assert!(matches!(err, SubmitError::MissingElement("syms")));
    }
}
