use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// The in-flight registration record. Every field is kept exactly as typed;
/// nothing is trimmed or normalized before validation.
///
/// Serialization uses the camelCase keys of the route payload, so the record
/// round-trips as `{"firstName": ..., "lastName": ..., ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_no: String,
    pub country: String,
    pub city: String,
    pub pan_no: String,
    pub aadhar_no: String,
}

impl Registration {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Username => &self.username,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::PhoneNo => &self.phone_no,
            FieldId::Country => &self.country,
            FieldId::City => &self.city,
            FieldId::PanNo => &self.pan_no,
            FieldId::AadharNo => &self.aadhar_no,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldId::FirstName => self.first_name = value,
            FieldId::LastName => self.last_name = value,
            FieldId::Username => self.username = value,
            FieldId::Email => self.email = value,
            FieldId::Password => self.password = value,
            FieldId::PhoneNo => self.phone_no = value,
            FieldId::Country => self.country = value,
            FieldId::City => self.city = value,
            FieldId::PanNo => self.pan_no = value,
            FieldId::AadharNo => self.aadhar_no = value,
        }
    }
}
