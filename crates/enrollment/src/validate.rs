use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use strum::IntoEnumIterator;

use crate::{field::FieldId, record::Registration};

/// Validation messages keyed by field, ordered like the form itself. Absence
/// of a key means the field is valid; an empty map is the precondition for
/// submission.
pub type ErrorMap = BTreeMap<FieldId, String>;

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid pattern");
    static ref PHONE: Regex = Regex::new(r"^\d{1,4}-\d{6,10}$").expect("valid pattern");
    static ref PAN: Regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid pattern");
    static ref AADHAR: Regex = Regex::new(r"^\d{16}$").expect("valid pattern");
}

/// Validate a record, producing one message per failing field.
///
/// Presence is checked first; a field's format rule only runs on a non-empty
/// value. Values are not trimmed, so whitespace-only input counts as present
/// (kept faithful to the original form, debatable as that is). Pure and
/// deterministic: the same record always yields the same map.
pub fn validate(record: &Registration) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for field in FieldId::iter() {
        let value = record.get(field);
        if value.is_empty() {
            errors.insert(field, format!("{} is required", field.label()));
        } else if let Some(message) = format_error(field, value) {
            errors.insert(field, message.to_string());
        }
    }
    errors
}

/// Format rule for a non-empty value. Country and city have none: the select
/// widget already constrains them to the closed option lists.
fn format_error(field: FieldId, value: &str) -> Option<&'static str> {
    match field {
        FieldId::Email if !EMAIL.is_match(value) => Some("Email must be a valid email address"),
        FieldId::PhoneNo if !PHONE.is_match(value) => {
            Some("Phone No. must be in the format country code - number")
        }
        FieldId::PanNo if !PAN.is_match(value) => Some("Pan No. must be in the format AAAAA9999A"),
        FieldId::AadharNo if !AADHAR.is_match(value) => Some("Aadhar No. must be 16 digits"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    fn valid_record() -> Registration {
        let mut record = Registration::default();
        record.set(FieldId::FirstName, "Asha");
        record.set(FieldId::LastName, "Verma");
        record.set(FieldId::Username, "asha.v");
        record.set(FieldId::Email, "asha@example.com");
        record.set(FieldId::Password, "hunter2!");
        record.set(FieldId::PhoneNo, "91-9876543210");
        record.set(FieldId::Country, "India");
        record.set(FieldId::City, "Delhi");
        record.set(FieldId::PanNo, "ABCDE1234F");
        record.set(FieldId::AadharNo, "1234567890123456");
        record
    }

    #[test]
    fn empty_record_reports_every_required_message() {
        let errors = validate(&Registration::default());
        assert_eq!(errors.len(), 10);
        for field in FieldId::iter() {
            assert_eq!(errors[&field], format!("{} is required", field.label()));
        }
    }

    #[test]
    fn error_order_follows_form_order() {
        let errors = validate(&Registration::default());
        let order: Vec<FieldId> = errors.keys().copied().collect();
        let expected: Vec<FieldId> = FieldId::iter().collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn valid_record_is_clean() {
        assert!(validate(&valid_record()).is_empty());
    }

    #[test]
    fn presence_check_wins_over_format_check() {
        let mut record = valid_record();
        record.set(FieldId::Email, "");
        let errors = validate(&record);
        assert_eq!(errors[&FieldId::Email], "Email is required");
    }

    #[test]
    fn email_format() {
        let mut record = valid_record();
        record.set(FieldId::Email, "a@b.co");
        assert!(validate(&record).is_empty());

        record.set(FieldId::Email, "not-an-email");
        let errors = validate(&record);
        assert_eq!(errors[&FieldId::Email], "Email must be a valid email address");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn phone_requires_country_code_and_separator() {
        let mut record = valid_record();
        record.set(FieldId::PhoneNo, "91-9876543210");
        assert!(validate(&record).is_empty());

        record.set(FieldId::PhoneNo, "9876543210");
        let errors = validate(&record);
        assert_eq!(
            errors[&FieldId::PhoneNo],
            "Phone No. must be in the format country code - number"
        );
    }

    #[test]
    fn pan_is_case_sensitive() {
        let mut record = valid_record();
        record.set(FieldId::PanNo, "ABCDE1234F");
        assert!(validate(&record).is_empty());

        record.set(FieldId::PanNo, "abcde1234f");
        let errors = validate(&record);
        assert_eq!(errors[&FieldId::PanNo], "Pan No. must be in the format AAAAA9999A");
    }

    #[test]
    fn aadhar_must_be_exactly_sixteen_digits() {
        let mut record = valid_record();
        for (digits, ok) in [(15, false), (16, true), (17, false)] {
            record.set(FieldId::AadharNo, "4".repeat(digits));
            let errors = validate(&record);
            if ok {
                assert!(!errors.contains_key(&FieldId::AadharNo), "{digits} digits");
            } else {
                assert_eq!(errors[&FieldId::AadharNo], "Aadhar No. must be 16 digits");
            }
        }
    }

    #[test]
    fn whitespace_only_counts_as_present() {
        let mut record = valid_record();
        record.set(FieldId::FirstName, "   ");
        assert!(validate(&record).is_empty());
    }

    #[test]
    fn validator_is_idempotent() {
        let mut record = valid_record();
        record.set(FieldId::Email, "broken");
        record.set(FieldId::PanNo, "");
        assert_eq!(validate(&record), validate(&record));
    }
}
