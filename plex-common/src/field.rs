//! Derived state for form fields (floating label input, field errors)

/// Animation the stylesheet runs on `:-webkit-autofill`, used to detect autofill.
pub const AUTOFILL_ANIMATION: &str = "native-autofill-in";

/// Prefix for generated input ids
pub const INPUT_ID_PREFIX: &str = "floating-label-input";

/// Snapshot of the inputs that drive a floating label field's derived state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInputs {
    pub invalid: Option<bool>,
    pub has_error_message: bool,
    pub has_clear_handler: bool,
    pub has_value: bool,
    pub disabled: bool,
    pub read_only: bool,
}

impl FieldInputs {
    /// Explicit `invalid` wins, otherwise an error message marks the field invalid.
    pub fn invalid(&self) -> bool {
        self.invalid.unwrap_or(self.has_error_message)
    }

    pub fn shows_clear_button(&self) -> bool {
        self.has_clear_handler && self.has_value && !self.disabled && !self.read_only
    }
}

/// Input id: the caller's id, or a generated one.
pub fn input_id(id: Option<&str>, instance: usize) -> String {
    match id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("{INPUT_ID_PREFIX}-{instance}"),
    }
}

pub fn error_id(input_id: &str) -> String {
    format!("{input_id}-error")
}

/// Merge the caller's `aria-describedby` with the error message id.
pub fn aria_describedby(existing: Option<&str>, error_id: Option<&str>) -> Option<String> {
    let ids: Vec<&str> = [existing, error_id]
        .into_iter()
        .flatten()
        .filter(|id| !id.is_empty())
        .collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids.join(" "))
    }
}

/// Whether an `animationstart` event signals a browser autofill.
pub fn is_autofill_animation(animation_name: &str) -> bool {
    animation_name == AUTOFILL_ANIMATION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_from_error_message() {
        let inputs = FieldInputs {
            has_error_message: true,
            ..Default::default()
        };
        assert!(inputs.invalid());

        let overridden = FieldInputs {
            invalid: Some(false),
            has_error_message: true,
            ..Default::default()
        };
        assert!(!overridden.invalid());
    }

    #[test]
    fn test_clear_button_visibility() {
        let base = FieldInputs {
            has_clear_handler: true,
            has_value: true,
            ..Default::default()
        };
        assert!(base.shows_clear_button());
        assert!(!FieldInputs {
            has_value: false,
            ..base.clone()
        }
        .shows_clear_button());
        assert!(!FieldInputs {
            disabled: true,
            ..base.clone()
        }
        .shows_clear_button());
        assert!(!FieldInputs {
            read_only: true,
            ..base.clone()
        }
        .shows_clear_button());
        assert!(!FieldInputs {
            has_clear_handler: false,
            ..base
        }
        .shows_clear_button());
    }

    #[test]
    fn test_input_ids() {
        assert_eq!(input_id(Some("email"), 3), "email");
        assert_eq!(input_id(None, 3), "floating-label-input-3");
        assert_eq!(input_id(Some(""), 4), "floating-label-input-4");
        assert_eq!(error_id("email"), "email-error");
    }

    #[test]
    fn test_aria_describedby_merge() {
        assert_eq!(aria_describedby(None, None), None);
        assert_eq!(
            aria_describedby(Some("hint"), None),
            Some("hint".to_string())
        );
        assert_eq!(
            aria_describedby(Some("hint"), Some("email-error")),
            Some("hint email-error".to_string())
        );
        assert_eq!(
            aria_describedby(Some(""), Some("email-error")),
            Some("email-error".to_string())
        );
    }

    #[test]
    fn test_autofill_animation() {
        assert!(is_autofill_animation("native-autofill-in"));
        assert!(!is_autofill_animation("native-autofill-out"));
    }
}
