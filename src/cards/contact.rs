//! Contact details and statement delivery preference

use serde::{Deserialize, Serialize};

use crate::mock_data;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryPreference {
    Email,
    Paper,
}

impl DeliveryPreference {
    pub fn title(&self) -> &str {
        match self {
            DeliveryPreference::Email => "Email Statement",
            DeliveryPreference::Paper => "Paper Statement",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            DeliveryPreference::Email => "Receive statements via email",
            DeliveryPreference::Paper => "Receive physical statements by mail",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            DeliveryPreference::Email => DeliveryPreference::Paper,
            DeliveryPreference::Paper => DeliveryPreference::Email,
        }
    }
}

/// Editable contact details; values are free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub delivery: DeliveryPreference,
}

impl Default for ContactDetails {
    fn default() -> Self {
        mock_data::contact_details()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_prefer_email() {
        let details = ContactDetails::default();
        assert_eq!(details.delivery, DeliveryPreference::Email);
        assert_eq!(details.email, "phamquoctuan@email.com");
    }

    #[test]
    fn test_delivery_toggle_is_exclusive() {
        let pref = DeliveryPreference::Email;
        assert_eq!(pref.toggled(), DeliveryPreference::Paper);
        assert_eq!(pref.toggled().toggled(), DeliveryPreference::Email);
    }
}
