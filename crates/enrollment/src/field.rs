use strum::EnumIter;

use crate::location::{City, Country};

/// Identity of a single form field, declared in the order the form presents
/// them. The derived `Ord` follows declaration order, which keeps error maps
/// sorted the way the form lays its fields out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum FieldId {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    PhoneNo,
    Country,
    City,
    PanNo,
    AadharNo,
}

/// Input behavior of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, edited inline.
    Text,
    /// Free text, rendered masked unless visibility is toggled on.
    Secret,
    /// Value cycled through a closed option list. The leading empty option is
    /// the "nothing selected" placeholder and fails the presence check.
    Select { options: &'static [&'static str] },
}

impl FieldId {
    /// Record key, matching the wire shape of the route payload.
    pub const fn key(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Username => "username",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::PhoneNo => "phoneNo",
            FieldId::Country => "country",
            FieldId::City => "city",
            FieldId::PanNo => "panNo",
            FieldId::AadharNo => "aadharNo",
        }
    }

    /// Display label, without the trailing colon the form adds.
    pub const fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Username => "Username",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::PhoneNo => "Phone No.",
            FieldId::Country => "Country",
            FieldId::City => "City",
            FieldId::PanNo => "Pan No.",
            FieldId::AadharNo => "Aadhar No.",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            FieldId::Password => FieldKind::Secret,
            FieldId::Country => FieldKind::Select {
                options: Country::OPTIONS,
            },
            FieldId::City => FieldKind::Select {
                options: City::OPTIONS,
            },
            _ => FieldKind::Text,
        }
    }

    /// Placeholder shown while a select field has the empty option.
    pub const fn placeholder(self) -> Option<&'static str> {
        match self {
            FieldId::Country => Some("Select Country"),
            FieldId::City => Some("Select City"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn keys_are_camel_case_and_unique() {
        let keys: Vec<&str> = FieldId::iter().map(FieldId::key).collect();
        assert_eq!(
            keys,
            vec![
                "firstName",
                "lastName",
                "username",
                "email",
                "password",
                "phoneNo",
                "country",
                "city",
                "panNo",
                "aadharNo",
            ]
        );
    }

    #[test]
    fn only_password_is_secret() {
        for field in FieldId::iter() {
            let secret = matches!(field.kind(), FieldKind::Secret);
            assert_eq!(secret, field == FieldId::Password, "{field:?}");
        }
    }

    #[test]
    fn selects_carry_placeholder_and_empty_option() {
        for field in FieldId::iter() {
            match field.kind() {
                FieldKind::Select { options } => {
                    assert_eq!(options[0], "");
                    assert!(field.placeholder().is_some(), "{field:?}");
                }
                _ => assert!(field.placeholder().is_none(), "{field:?}"),
            }
        }
    }

    #[test]
    fn order_matches_form_layout() {
        let fields: Vec<FieldId> = FieldId::iter().collect();
        let mut sorted = fields.clone();
        sorted.sort();
        assert_eq!(fields, sorted);
        assert_eq!(fields.first(), Some(&FieldId::FirstName));
        assert_eq!(fields.last(), Some(&FieldId::AadharNo));
    }
}
