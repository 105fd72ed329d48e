//! Client contact details captured for the export

use serde::{Deserialize, Serialize};

/// Free-form client contact fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Addressable client field, used by the session to edit one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    Name,
    AddressLine1,
    AddressLine2,
    City,
    State,
    Zip,
}

impl ClientField {
    pub fn all() -> &'static [ClientField] {
        &[
            ClientField::Name,
            ClientField::AddressLine1,
            ClientField::AddressLine2,
            ClientField::City,
            ClientField::State,
            ClientField::Zip,
        ]
    }

    /// Prompt text shown in the form
    pub fn prompt(&self) -> &'static str {
        match self {
            ClientField::Name => "Client or Company Name",
            ClientField::AddressLine1 => "Address",
            ClientField::AddressLine2 => "Address 2 (Apt, Suite, etc.)",
            ClientField::City => "City",
            ClientField::State => "State",
            ClientField::Zip => "ZIP Code",
        }
    }
}

impl ClientInfo {
    pub fn get(&self, field: ClientField) -> &str {
        match field {
            ClientField::Name => &self.name,
            ClientField::AddressLine1 => &self.address_line1,
            ClientField::AddressLine2 => &self.address_line2,
            ClientField::City => &self.city,
            ClientField::State => &self.state,
            ClientField::Zip => &self.zip,
        }
    }

    pub fn set(&mut self, field: ClientField, value: impl Into<String>) {
        let slot = match field {
            ClientField::Name => &mut self.name,
            ClientField::AddressLine1 => &mut self.address_line1,
            ClientField::AddressLine2 => &mut self.address_line2,
            ClientField::City => &mut self.city,
            ClientField::State => &mut self.state,
            ClientField::Zip => &mut self.zip,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_every_field() {
        let mut client = ClientInfo::default();
        for (i, field) in ClientField::all().iter().enumerate() {
            client.set(*field, format!("value {}", i));
        }

        assert_eq!(client.name, "value 0");
        assert_eq!(client.zip, "value 5");
        assert_eq!(client.get(ClientField::City), "value 3");
    }
}
