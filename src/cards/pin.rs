//! PIN change form rules

use thiserror::Error;

pub const PIN_LENGTH: usize = 6;

/// Inline validation failures, in the order they are checked
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    #[error("Current PIN must be 6 digits")]
    CurrentLength,
    #[error("New PIN must be 6 digits")]
    NewLength,
    #[error("New PIN and Confirm PIN do not match")]
    Mismatch,
    #[error("New PIN must be different from current PIN")]
    Unchanged,
}

/// Keep digits only, capped at the PIN length
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PIN_LENGTH)
        .collect()
}

/// First failing rule wins
pub fn validate(current: &str, new: &str, confirm: &str) -> Result<(), PinError> {
    if current.chars().count() != PIN_LENGTH {
        return Err(PinError::CurrentLength);
    }
    if new.chars().count() != PIN_LENGTH {
        return Err(PinError::NewLength);
    }
    if new != confirm {
        return Err(PinError::Mismatch);
    }
    if current == new {
        return Err(PinError::Unchanged);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinField {
    Current,
    New,
    Confirm,
}

impl PinField {
    pub const ALL: [PinField; 3] = [PinField::Current, PinField::New, PinField::Confirm];

    pub fn label(&self) -> &str {
        match self {
            PinField::Current => "Current PIN",
            PinField::New => "New PIN",
            PinField::Confirm => "Confirm New PIN",
        }
    }

    pub fn placeholder(&self) -> &str {
        match self {
            PinField::Current => "Enter current PIN",
            PinField::New => "Enter new PIN",
            PinField::Confirm => "Confirm new PIN",
        }
    }
}

/// Form state for the change-PIN screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
    pub error: Option<PinError>,
}

impl PinForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: PinField) -> &str {
        match field {
            PinField::Current => &self.current,
            PinField::New => &self.new,
            PinField::Confirm => &self.confirm,
        }
    }

    fn value_mut(&mut self, field: PinField) -> &mut String {
        match field {
            PinField::Current => &mut self.current,
            PinField::New => &mut self.new,
            PinField::Confirm => &mut self.confirm,
        }
    }

    /// Append a character; non-digits and overflow are dropped
    pub fn push(&mut self, field: PinField, c: char) {
        let value = self.value_mut(field);
        let mut candidate = value.clone();
        candidate.push(c);
        *value = sanitize(&candidate);
    }

    pub fn pop(&mut self, field: PinField) {
        self.value_mut(field).pop();
    }

    /// Clears the previous error, then validates
    pub fn submit(&mut self) -> Result<(), PinError> {
        self.error = None;
        let result = validate(&self.current, &self.new, &self.confirm);
        if let Err(err) = result {
            self.error = Some(err);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_current_pin_wins_over_other_failures() {
        assert_eq!(validate("123", "", "9"), Err(PinError::CurrentLength));
        assert_eq!(
            PinError::CurrentLength.to_string(),
            "Current PIN must be 6 digits"
        );
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(validate("123456", "12", "12"), Err(PinError::NewLength));
        assert_eq!(validate("123456", "654321", "654320"), Err(PinError::Mismatch));
        assert_eq!(validate("123456", "123456", "123456"), Err(PinError::Unchanged));
    }

    #[test]
    fn test_valid_change() {
        assert_eq!(validate("111111", "222222", "222222"), Ok(()));
    }

    #[test]
    fn test_sanitize_strips_and_caps() {
        assert_eq!(sanitize("12a3-456789"), "123456");
        assert_eq!(sanitize("abc"), "");
    }

    #[test]
    fn test_form_push_ignores_non_digits_and_overflow() {
        let mut form = PinForm::new();
        for c in "1x2345678".chars() {
            form.push(PinField::Current, c);
        }
        assert_eq!(form.current, "123456");
        form.pop(PinField::Current);
        assert_eq!(form.current, "12345");
    }

    #[test]
    fn test_submit_clears_error_on_retry() {
        let mut form = PinForm::new();
        assert!(form.submit().is_err());
        assert_eq!(form.error, Some(PinError::CurrentLength));

        form.current = "111111".to_string();
        form.new = "222222".to_string();
        form.confirm = "222222".to_string();
        assert!(form.submit().is_ok());
        assert_eq!(form.error, None);
    }
}
