//! Helpers around the `validator` derive used by every create/update DTO.
//!
//! Required text fields are declared with
//! `#[validate(length(min = 1, message = "must not be empty"))]`; this module
//! turns the resulting [`validator::ValidationErrors`] into the single
//! human-readable message carried by [`CoreError::Validation`].

use validator::Validate;

use crate::error::CoreError;

/// Message attached to every required-field rule.
pub const REQUIRED_MESSAGE: &str = "must not be empty";

/// Run the derived validation rules on `input`, mapping failures to
/// [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(CoreError::from)
}

/// Render validation errors as `field: message` pairs, sorted by field name
/// so the output is stable.
pub fn describe(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {message}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Drop blank entries from a free-text list and trim the rest.
pub fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        title: String,
        #[validate(length(min = 1, message = "must not be empty"))]
        alt_text: String,
    }

    #[test]
    fn valid_input_passes() {
        let s = Sample {
            title: "Aarti".into(),
            alt_text: "Lamp".into(),
        };
        assert!(validate_input(&s).is_ok());
    }

    #[test]
    fn empty_fields_are_listed_in_sorted_order() {
        let s = Sample {
            title: String::new(),
            alt_text: String::new(),
        };
        let err = validate_input(&s).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("alt_text: must not be empty"));
        assert!(msg.contains("title: must not be empty"));
        assert!(msg.find("alt_text").unwrap() < msg.find("title").unwrap());
    }

    #[test]
    fn clean_list_drops_blank_entries() {
        let cleaned = clean_list(vec![
            " Morning Aarti ".into(),
            "".into(),
            "   ".into(),
            "Evening Aarti".into(),
        ]);
        assert_eq!(cleaned, vec!["Morning Aarti", "Evening Aarti"]);
    }
}
